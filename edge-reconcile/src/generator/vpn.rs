use serde_json::{json, Value};

use crate::desired::{GatewayIpsecVpnServiceSpec, SubnetSpec, TunnelSpec};
use crate::generator::wire_flag;

/// Generate the `GatewayIpsecVpnService` wire block.
///
/// Tunnel fields map across mostly verbatim; `Mtu` in particular is passed
/// through untouched so numeric values stay numeric on the wire.
pub fn generate_ipsec_vpn_service(spec: &GatewayIpsecVpnServiceSpec) -> Value {
    let tunnels: Vec<Value> = spec.tunnels.iter().map(tunnel).collect();

    json!({
        "IsEnabled": wire_flag(spec.enabled.as_ref(), true),
        "Tunnel": tunnels,
    })
}

fn tunnel(tunnel: &TunnelSpec) -> Value {
    let peer_subnets: Vec<Value> = tunnel.peer_subnets.iter().map(subnet).collect();
    let local_subnets: Vec<Value> = tunnel.local_subnets.iter().map(subnet).collect();

    json!({
        "Name": tunnel.name,
        "Description": tunnel.description.clone().unwrap_or_default(),
        "IpsecVpnLocalPeer": {
            "Id": tunnel.ipsec_vpn_local_peer.id,
            "Name": tunnel.ipsec_vpn_local_peer.name,
        },
        "PeerIpAddress": tunnel.peer_ip_address,
        "PeerId": tunnel.peer_id,
        "LocalIpAddress": tunnel.local_ip_address,
        "LocalId": tunnel.local_id,
        "PeerSubnet": peer_subnets,
        "SharedSecret": tunnel.shared_secret,
        "EncryptionProtocol": tunnel.encryption_protocol,
        "Mtu": tunnel.mtu,
        "IsEnabled": wire_flag(tunnel.enabled.as_ref(), true),
        "LocalSubnet": local_subnets,
    })
}

fn subnet(subnet: &SubnetSpec) -> Value {
    json!({
        "Name": subnet.name,
        "Gateway": subnet.gateway,
        "Netmask": subnet.netmask,
    })
}
