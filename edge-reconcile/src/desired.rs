//! Typed desired-state documents.
//!
//! The operator's document is schema-validated upstream; these types give it
//! a concrete shape for the generators. Operator documents are lenient about
//! scalar spelling (`true` or `"true"`, `8080` or `"8080"`), so flag and
//! port fields deserialize through [`Toggle`] and [`Scalar`], which always
//! render the device's string encoding.

use serde::Deserialize;
use serde_json::Value;

/// A boolean flag written either as a boolean or as a string literal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Toggle {
    Flag(bool),
    Text(String),
}

impl Toggle {
    /// The wire encoding, `"true"` or `"false"` (string spellings verbatim).
    pub fn as_wire(&self) -> String {
        match self {
            Toggle::Flag(flag) => flag.to_string(),
            Toggle::Text(text) => text.clone(),
        }
    }
}

/// A numeric field written either as a number or as a string literal.
///
/// Explicit identifiers and ports pass through verbatim when written as
/// strings; numbers render as plain decimal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(i64),
    Text(String),
}

impl Scalar {
    pub fn as_wire(&self) -> String {
        match self {
            Scalar::Number(number) => number.to_string(),
            Scalar::Text(text) => text.clone(),
        }
    }
}

/// The desired-state document for one edge gateway.
///
/// Only the service blocks the operator chose to manage are present; absent
/// services are never evaluated against remote state.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeGatewayServices {
    /// Name or identifier of the edge gateway this document targets. Used by
    /// the calling layer to locate the device; not part of any service block.
    pub gateway: String,
    #[serde(default)]
    pub firewall_service: Option<FirewallServiceSpec>,
    #[serde(default)]
    pub nat_service: Option<NatServiceSpec>,
    #[serde(default)]
    pub load_balancer_service: Option<LoadBalancerServiceSpec>,
    #[serde(default)]
    pub gateway_ipsec_vpn_service: Option<GatewayIpsecVpnServiceSpec>,
    #[serde(default)]
    pub static_routing_service: Option<StaticRoutingServiceSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirewallServiceSpec {
    #[serde(default)]
    pub enabled: Option<Toggle>,
    #[serde(default)]
    pub policy: Option<String>,
    #[serde(default)]
    pub log_default_action: Option<Toggle>,
    #[serde(default)]
    pub firewall_rules: Vec<FirewallRuleSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirewallRuleSpec {
    #[serde(default)]
    pub id: Option<Scalar>,
    #[serde(default)]
    pub enabled: Option<Toggle>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub policy: Option<String>,
    /// One of `tcp`, `udp`, `icmp`, `any`, `tcp+udp`. Defaults to `tcp`.
    #[serde(default)]
    pub protocols: Option<String>,
    #[serde(default)]
    pub destination_port_range: Option<Scalar>,
    pub destination_ip: String,
    #[serde(default)]
    pub source_port_range: Option<Scalar>,
    pub source_ip: String,
    #[serde(default)]
    pub enable_logging: Option<Toggle>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NatServiceSpec {
    #[serde(default)]
    pub enabled: Option<Toggle>,
    #[serde(default)]
    pub nat_rules: Vec<NatRuleSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NatRuleSpec {
    #[serde(default)]
    pub id: Option<Scalar>,
    #[serde(default)]
    pub enabled: Option<Toggle>,
    /// `SNAT` or `DNAT`.
    pub rule_type: String,
    /// Gateway network the rule applies on, by id or name.
    pub network_id: String,
    pub original_ip: String,
    #[serde(default)]
    pub original_port: Option<Scalar>,
    pub translated_ip: String,
    #[serde(default)]
    pub translated_port: Option<Scalar>,
    #[serde(default)]
    pub protocol: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoadBalancerServiceSpec {
    #[serde(default)]
    pub enabled: Option<Toggle>,
    #[serde(default)]
    pub pools: Vec<PoolSpec>,
    #[serde(default)]
    pub virtual_servers: Vec<VirtualServerSpec>,
}

/// Per-protocol entries of a pool `service` map or a virtual server
/// `service_profiles` map. Protocols left out of the document still occupy a
/// slot in the wire output, as disabled entries.
#[derive(Debug, Clone, Deserialize)]
pub struct ProtocolMap<T> {
    pub http: Option<T>,
    pub https: Option<T>,
    pub tcp: Option<T>,
}

impl<T> Default for ProtocolMap<T> {
    fn default() -> Self {
        Self {
            http: None,
            https: None,
            tcp: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolSpec {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub service: ProtocolMap<PoolServiceSpec>,
    #[serde(default)]
    pub members: Vec<PoolMemberSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolServiceSpec {
    #[serde(default)]
    pub enabled: Option<Toggle>,
    #[serde(default)]
    pub port: Option<Scalar>,
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub health_check_port: Option<Scalar>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolMemberSpec {
    pub ip_address: String,
    #[serde(default)]
    pub weight: Option<Scalar>,
    #[serde(default)]
    pub port: Option<Scalar>,
    #[serde(default)]
    pub health_check_port: Option<Scalar>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VirtualServerSpec {
    #[serde(default)]
    pub enabled: Option<Toggle>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ip_address: String,
    /// Gateway network the virtual server listens on, by id or name.
    pub network: String,
    /// Name of a pool declared in the same document.
    pub pool: String,
    #[serde(default)]
    pub service_profiles: ProtocolMap<ServiceProfileSpec>,
    #[serde(default)]
    pub logging: Option<Toggle>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceProfileSpec {
    #[serde(default)]
    pub enabled: Option<Toggle>,
    #[serde(default)]
    pub port: Option<Scalar>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayIpsecVpnServiceSpec {
    #[serde(default)]
    pub enabled: Option<Toggle>,
    #[serde(default)]
    pub tunnels: Vec<TunnelSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TunnelSpec {
    #[serde(default)]
    pub enabled: Option<Toggle>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ipsec_vpn_local_peer: LocalPeerSpec,
    pub peer_ip_address: String,
    pub peer_id: String,
    pub local_ip_address: String,
    pub local_id: String,
    #[serde(default)]
    pub peer_subnets: Vec<SubnetSpec>,
    pub shared_secret: String,
    pub encryption_protocol: String,
    /// Passed through to the device verbatim; numbers stay numbers.
    pub mtu: Value,
    #[serde(default)]
    pub local_subnets: Vec<SubnetSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalPeerSpec {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubnetSpec {
    pub name: String,
    pub gateway: String,
    pub netmask: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticRoutingServiceSpec {
    #[serde(default)]
    pub enabled: Option<Toggle>,
    #[serde(default)]
    pub static_routes: Vec<StaticRouteSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticRouteSpec {
    #[serde(default)]
    pub enabled: Option<Toggle>,
    pub name: String,
    pub network: String,
    pub next_hop: String,
    /// Gateway network the route applies on, by id or name.
    pub apply_on: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{EdgeGatewayServices, LoadBalancerServiceSpec, Scalar, Toggle};

    #[test]
    fn toggle_accepts_both_spellings() {
        let from_bool: Toggle = serde_json::from_value(json!(true)).expect("bool");
        let from_text: Toggle = serde_json::from_value(json!("false")).expect("text");
        assert_eq!(from_bool.as_wire(), "true");
        assert_eq!(from_text.as_wire(), "false");
    }

    #[test]
    fn scalar_renders_numbers_and_preserves_strings() {
        let number: Scalar = serde_json::from_value(json!(8080)).expect("number");
        let text: Scalar = serde_json::from_value(json!("0443")).expect("text");
        assert_eq!(number.as_wire(), "8080");
        assert_eq!(text.as_wire(), "0443");
    }

    #[test]
    fn undeclared_protocol_entries_deserialize_as_none() {
        let spec: LoadBalancerServiceSpec = serde_json::from_value(json!({
            "pools": [{
                "name": "pool-1",
                "service": {"http": {"port": 8080}},
            }],
            "virtual_servers": [{
                "name": "vs-1",
                "ip_address": "192.0.2.88",
                "network": "ane012345",
                "pool": "pool-1",
            }],
        }))
        .expect("load balancer spec");

        let service = &spec.pools[0].service;
        assert!(service.http.is_some());
        assert!(service.https.is_none());
        assert!(service.tcp.is_none());

        let profiles = &spec.virtual_servers[0].service_profiles;
        assert!(profiles.http.is_none());
        assert!(profiles.https.is_none());
        assert!(profiles.tcp.is_none());
    }

    #[test]
    fn document_with_only_a_gateway_has_no_services() {
        let doc: EdgeGatewayServices =
            serde_json::from_value(json!({"gateway": "1111111-7b54-43dd-9eb1-631dd337e5a7"}))
                .expect("document");
        assert!(doc.firewall_service.is_none());
        assert!(doc.nat_service.is_none());
        assert!(doc.load_balancer_service.is_none());
        assert!(doc.gateway_ipsec_vpn_service.is_none());
        assert!(doc.static_routing_service.is_none());
    }
}
