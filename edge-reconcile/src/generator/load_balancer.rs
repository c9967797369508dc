use std::collections::HashSet;

use serde_json::{json, Value};

use crate::desired::{
    LoadBalancerServiceSpec, PoolMemberSpec, PoolServiceSpec, PoolSpec, ProtocolMap,
    ServiceProfileSpec, VirtualServerSpec,
};
use crate::error::Error;
use crate::generator::{wire_flag, wire_scalar};
use crate::interface::{
    find_interface, interface_descriptor, NetworkInterface, ORG_VDC_NETWORK_MEDIA_TYPE,
};

/// The device requires every protocol slot present in every `ServicePort`
/// and `ServiceProfile` list, in this order, with undeclared protocols
/// emitted as disabled entries.
const PROTOCOL_SLOTS: [Protocol; 3] = [Protocol::Http, Protocol::Https, Protocol::Tcp];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Protocol {
    Http,
    Https,
    Tcp,
}

impl Protocol {
    fn wire_name(self) -> &'static str {
        match self {
            Protocol::Http => "HTTP",
            Protocol::Https => "HTTPS",
            Protocol::Tcp => "TCP",
        }
    }

    fn default_port(self) -> &'static str {
        match self {
            Protocol::Http => "80",
            Protocol::Https => "443",
            Protocol::Tcp => "",
        }
    }

    fn health_check_mode(self) -> &'static str {
        match self {
            Protocol::Http => "HTTP",
            Protocol::Https => "SSL",
            Protocol::Tcp => "TCP",
        }
    }

    fn health_check_uri(self) -> &'static str {
        match self {
            Protocol::Http => "/",
            Protocol::Https | Protocol::Tcp => "",
        }
    }

    fn entry<T>(self, map: &ProtocolMap<T>) -> Option<&T> {
        match self {
            Protocol::Http => map.http.as_ref(),
            Protocol::Https => map.https.as_ref(),
            Protocol::Tcp => map.tcp.as_ref(),
        }
    }
}

/// Generate the `LoadBalancerService` wire block.
///
/// Every virtual server must name a pool declared in the same document;
/// anything else fails generation before a partial config can escape.
pub fn generate_load_balancer_service(
    spec: &LoadBalancerServiceSpec,
    interfaces: &[NetworkInterface],
) -> Result<Value, Error> {
    let pool_names: HashSet<&str> = spec.pools.iter().map(|pool| pool.name.as_str()).collect();

    let pools: Vec<Value> = spec.pools.iter().map(pool_entry).collect();
    let mut virtual_servers = Vec::with_capacity(spec.virtual_servers.len());
    for virtual_server in &spec.virtual_servers {
        virtual_servers.push(virtual_server_entry(virtual_server, &pool_names, interfaces)?);
    }

    Ok(json!({
        "IsEnabled": wire_flag(spec.enabled.as_ref(), true),
        "Pool": pools,
        "VirtualServer": virtual_servers,
    }))
}

fn pool_entry(pool: &PoolSpec) -> Value {
    let service_ports: Vec<Value> = PROTOCOL_SLOTS
        .iter()
        .map(|protocol| pool_service_port(*protocol, &pool.service))
        .collect();
    let members: Vec<Value> = pool.members.iter().map(member_entry).collect();

    json!({
        "Name": pool.name,
        "Description": pool.description.clone().unwrap_or_default(),
        "ServicePort": service_ports,
        "Member": members,
    })
}

fn pool_service_port(protocol: Protocol, service: &ProtocolMap<PoolServiceSpec>) -> Value {
    let entry = protocol.entry(service);
    let enabled = match entry {
        Some(entry) => wire_flag(entry.enabled.as_ref(), true),
        None => "false".to_string(),
    };
    let algorithm = entry
        .and_then(|entry| entry.algorithm.clone())
        .unwrap_or_else(|| "ROUND_ROBIN".to_string());
    let port = wire_scalar(
        entry.and_then(|entry| entry.port.as_ref()),
        protocol.default_port(),
    );
    let health_check_port = wire_scalar(entry.and_then(|entry| entry.health_check_port.as_ref()), "");

    json!({
        "IsEnabled": enabled,
        "Protocol": protocol.wire_name(),
        "Algorithm": algorithm,
        "Port": port,
        "HealthCheckPort": health_check_port,
        "HealthCheck": {
            "Mode": protocol.health_check_mode(),
            "Uri": protocol.health_check_uri(),
            "HealthThreshold": "2",
            "UnhealthThreshold": "3",
            "Interval": "5",
            "Timeout": "15",
        },
    })
}

fn member_entry(member: &PoolMemberSpec) -> Value {
    let service_ports: Vec<Value> = PROTOCOL_SLOTS
        .iter()
        .map(|protocol| {
            json!({
                "Protocol": protocol.wire_name(),
                "Port": wire_scalar(member.port.as_ref(), ""),
                "HealthCheckPort": wire_scalar(member.health_check_port.as_ref(), ""),
            })
        })
        .collect();

    json!({
        "IpAddress": member.ip_address,
        "Weight": wire_scalar(member.weight.as_ref(), "1"),
        "ServicePort": service_ports,
    })
}

fn virtual_server_entry(
    virtual_server: &VirtualServerSpec,
    pool_names: &HashSet<&str>,
    interfaces: &[NetworkInterface],
) -> Result<Value, Error> {
    if !pool_names.contains(virtual_server.pool.as_str()) {
        return Err(Error::MissingBackingPool {
            name: virtual_server.name.clone(),
        });
    }

    let interface = find_interface(interfaces, &virtual_server.network).ok_or_else(|| {
        Error::ReferenceNotFound {
            service: "LoadBalancerService",
            rule: format!("virtual server {}", virtual_server.name),
            reference: virtual_server.network.clone(),
        }
    })?;

    let service_profiles: Vec<Value> = PROTOCOL_SLOTS
        .iter()
        .map(|protocol| service_profile(*protocol, &virtual_server.service_profiles))
        .collect();

    Ok(json!({
        "IsEnabled": wire_flag(virtual_server.enabled.as_ref(), true),
        "Name": virtual_server.name,
        "Description": virtual_server.description.clone().unwrap_or_default(),
        "Interface": interface_descriptor(interface, ORG_VDC_NETWORK_MEDIA_TYPE),
        "IpAddress": virtual_server.ip_address,
        "ServiceProfile": service_profiles,
        "Logging": wire_flag(virtual_server.logging.as_ref(), false),
        "Pool": virtual_server.pool,
    }))
}

fn service_profile(protocol: Protocol, profiles: &ProtocolMap<ServiceProfileSpec>) -> Value {
    let entry = protocol.entry(profiles);
    let enabled = match entry {
        Some(entry) => wire_flag(entry.enabled.as_ref(), true),
        None => "false".to_string(),
    };
    let port = wire_scalar(
        entry.and_then(|entry| entry.port.as_ref()),
        protocol.default_port(),
    );

    json!({
        "IsEnabled": enabled,
        "Protocol": protocol.wire_name(),
        "Port": port,
        "Persistence": {"Method": ""},
    })
}
