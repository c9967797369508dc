use serde_json::{json, Value};

use crate::desired::{StaticRouteSpec, StaticRoutingServiceSpec};
use crate::error::Error;
use crate::generator::wire_flag;
use crate::interface::{
    find_interface, interface_descriptor, NetworkInterface, ORG_VDC_NETWORK_MEDIA_TYPE,
};

/// Generate the `StaticRoutingService` wire block.
pub fn generate_static_routing_service(
    spec: &StaticRoutingServiceSpec,
    interfaces: &[NetworkInterface],
) -> Result<Value, Error> {
    let mut routes = Vec::with_capacity(spec.static_routes.len());
    for route in &spec.static_routes {
        routes.push(static_route(route, interfaces)?);
    }

    Ok(json!({
        "IsEnabled": wire_flag(spec.enabled.as_ref(), true),
        "StaticRoute": routes,
    }))
}

fn static_route(route: &StaticRouteSpec, interfaces: &[NetworkInterface]) -> Result<Value, Error> {
    let interface =
        find_interface(interfaces, &route.apply_on).ok_or_else(|| Error::ReferenceNotFound {
            service: "StaticRoutingService",
            rule: format!("static route {}", route.name),
            reference: route.apply_on.clone(),
        })?;

    Ok(json!({
        "Name": route.name,
        "Network": route.network,
        "NextHopIp": route.next_hop,
        "IsEnabled": wire_flag(route.enabled.as_ref(), true),
        "GatewayInterface": interface_descriptor(interface, ORG_VDC_NETWORK_MEDIA_TYPE),
    }))
}
