//! The top-level aggregator: one reconciliation pass across all services.

use std::fmt::{self, Display, Formatter};

use serde_json::{Map, Value};
use value_diff_core::DiffOp;

use crate::desired::EdgeGatewayServices;
use crate::differ::{
    diff_service, FirewallStripper, IdentityStripper, NatStripper, StaticRoutingStripper, Stripper,
};
use crate::error::Error;
use crate::generator::{
    generate_firewall_service, generate_ipsec_vpn_service, generate_load_balancer_service,
    generate_nat_service, generate_static_routing_service,
};
use crate::interface::NetworkInterface;

/// The service kinds this tool manages, in the fixed declared order used for
/// `config` and `diff` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Firewall,
    Nat,
    GatewayIpsecVpn,
    LoadBalancer,
    StaticRouting,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::Firewall,
        ServiceKind::Nat,
        ServiceKind::GatewayIpsecVpn,
        ServiceKind::LoadBalancer,
        ServiceKind::StaticRouting,
    ];

    /// The key this service uses in the device's wire format.
    pub fn wire_key(self) -> &'static str {
        match self {
            ServiceKind::Firewall => "FirewallService",
            ServiceKind::Nat => "NatService",
            ServiceKind::GatewayIpsecVpn => "GatewayIpsecVpnService",
            ServiceKind::LoadBalancer => "LoadBalancerService",
            ServiceKind::StaticRouting => "StaticRoutingService",
        }
    }
}

impl Display for ServiceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_key())
    }
}

/// One evaluated reconciliation pass.
///
/// Evaluation happens eagerly, exactly once, at construction; the result is
/// immutable, so accessor order cannot matter and sharing across threads
/// needs no synchronization. Generation failure aborts construction — there
/// is no partial-success mode.
#[derive(Debug, Clone)]
pub struct EdgeGatewayConfiguration {
    config: Map<String, Value>,
    diff: Vec<(ServiceKind, Vec<DiffOp>)>,
}

impl EdgeGatewayConfiguration {
    /// Run the pass: for each service present in the desired document, in
    /// declared order, generate its wire block, look up the matching remote
    /// block (absent is fine), and compare stripped. Services whose diff is
    /// empty are left out of both results; services absent from the desired
    /// document are never evaluated at all, whatever their remote state.
    pub fn new(
        desired: &EdgeGatewayServices,
        remote: &Value,
        interfaces: &[NetworkInterface],
    ) -> Result<Self, Error> {
        let mut config = Map::new();
        let mut diff = Vec::new();

        for kind in ServiceKind::ALL {
            let Some(generated) = generate_service(kind, desired, interfaces)? else {
                continue;
            };
            let remote_block = remote.get(kind.wire_key());
            let ops = diff_service(Some(&generated), remote_block, stripper_for(kind));
            if !ops.is_empty() {
                config.insert(kind.wire_key().to_string(), generated);
                diff.push((kind, ops));
            }
        }

        Ok(Self { config, diff })
    }

    /// True iff any managed service needs an update. The caller uses this to
    /// avoid issuing a no-op device call.
    pub fn update_required(&self) -> bool {
        !self.diff.is_empty()
    }

    /// The minimal patch: exactly the services whose stripped generated
    /// config differs from their stripped remote config, keyed by wire key
    /// in declared service order.
    pub fn config(&self) -> &Map<String, Value> {
        &self.config
    }

    /// The per-service structural deltas, in declared service order.
    pub fn diff(&self) -> &[(ServiceKind, Vec<DiffOp>)] {
        &self.diff
    }

    /// The delta for one service, when it changed.
    pub fn diff_for(&self, kind: ServiceKind) -> Option<&[DiffOp]> {
        self.diff
            .iter()
            .find(|(entry, _)| *entry == kind)
            .map(|(_, ops)| ops.as_slice())
    }

    /// Wire keys of the services that changed, in declared service order.
    pub fn service_keys(&self) -> Vec<&'static str> {
        self.diff.iter().map(|(kind, _)| kind.wire_key()).collect()
    }
}

fn generate_service(
    kind: ServiceKind,
    desired: &EdgeGatewayServices,
    interfaces: &[NetworkInterface],
) -> Result<Option<Value>, Error> {
    Ok(match kind {
        ServiceKind::Firewall => desired
            .firewall_service
            .as_ref()
            .map(generate_firewall_service),
        ServiceKind::Nat => match &desired.nat_service {
            Some(spec) => Some(generate_nat_service(spec, interfaces)?),
            None => None,
        },
        ServiceKind::GatewayIpsecVpn => desired
            .gateway_ipsec_vpn_service
            .as_ref()
            .map(generate_ipsec_vpn_service),
        ServiceKind::LoadBalancer => match &desired.load_balancer_service {
            Some(spec) => Some(generate_load_balancer_service(spec, interfaces)?),
            None => None,
        },
        ServiceKind::StaticRouting => match &desired.static_routing_service {
            Some(spec) => Some(generate_static_routing_service(spec, interfaces)?),
            None => None,
        },
    })
}

fn stripper_for(kind: ServiceKind) -> &'static dyn Stripper {
    match kind {
        ServiceKind::Firewall => &FirewallStripper,
        ServiceKind::Nat => &NatStripper,
        ServiceKind::StaticRouting => &StaticRoutingStripper,
        ServiceKind::GatewayIpsecVpn | ServiceKind::LoadBalancer => &IdentityStripper,
    }
}
