//! Gateway network inventory and wire interface descriptors.

use serde::Deserialize;
use serde_json::{json, Value};

/// Media type of network references inside NAT rules.
pub const ADMIN_NETWORK_MEDIA_TYPE: &str = "application/vnd.vmware.admin.network+xml";

/// Media type of network references inside load balancer virtual servers and
/// static routes.
pub const ORG_VDC_NETWORK_MEDIA_TYPE: &str = "application/vnd.vmware.vcloud.orgVdcNetwork+xml";

/// A network attached to the edge gateway, as reported by the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkInterface {
    pub name: String,
    pub id: String,
    /// API reference handle for the network.
    pub href: String,
}

/// Locate an attached network by id or by name.
pub fn find_interface<'a>(
    interfaces: &'a [NetworkInterface],
    reference: &str,
) -> Option<&'a NetworkInterface> {
    interfaces
        .iter()
        .find(|interface| interface.id == reference || interface.name == reference)
}

/// The wire-format descriptor embedded in generated rules.
pub fn interface_descriptor(interface: &NetworkInterface, media_type: &str) -> Value {
    json!({
        "type": media_type,
        "name": interface.name,
        "href": interface.href,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{find_interface, interface_descriptor, NetworkInterface, ADMIN_NETWORK_MEDIA_TYPE};

    fn inventory() -> Vec<NetworkInterface> {
        vec![
            NetworkInterface {
                name: "ane012345".to_string(),
                id: "01234567-1234-1234-1234-0123456789aa".to_string(),
                href: "https://vmware.example.com/api/admin/network/01234567-1234-1234-1234-0123456789aa".to_string(),
            },
            NetworkInterface {
                name: "internal".to_string(),
                id: "12346788-1234-1234-1234-123456789000".to_string(),
                href: "https://vmware.example.com/api/admin/network/12346788-1234-1234-1234-123456789000".to_string(),
            },
        ]
    }

    #[test]
    fn finds_by_id_or_name() {
        let interfaces = inventory();
        let by_id = find_interface(&interfaces, "12346788-1234-1234-1234-123456789000");
        let by_name = find_interface(&interfaces, "ane012345");
        assert_eq!(by_id.map(|i| i.name.as_str()), Some("internal"));
        assert_eq!(by_name.map(|i| i.id.as_str()), Some("01234567-1234-1234-1234-0123456789aa"));
        assert!(find_interface(&interfaces, "missing").is_none());
    }

    #[test]
    fn descriptor_has_the_wire_shape() {
        let interfaces = inventory();
        let descriptor = interface_descriptor(&interfaces[0], ADMIN_NETWORK_MEDIA_TYPE);
        assert_eq!(
            descriptor,
            json!({
                "type": "application/vnd.vmware.admin.network+xml",
                "name": "ane012345",
                "href": "https://vmware.example.com/api/admin/network/01234567-1234-1234-1234-0123456789aa",
            })
        );
    }
}
