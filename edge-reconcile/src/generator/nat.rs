use serde_json::{json, Map, Value};

use crate::desired::{NatRuleSpec, NatServiceSpec};
use crate::error::Error;
use crate::generator::wire_flag;
use crate::id_ranges::{RuleIdAllocator, NAT_AUTO_RULE_ID_BASE};
use crate::interface::{find_interface, interface_descriptor, NetworkInterface, ADMIN_NETWORK_MEDIA_TYPE};

/// Generate the `NatService` wire block.
///
/// SNAT rules carry no `Protocol` key at all; DNAT rules default it to
/// `tcp`. Ports appear only when the operator supplied them.
pub fn generate_nat_service(
    spec: &NatServiceSpec,
    interfaces: &[NetworkInterface],
) -> Result<Value, Error> {
    let mut ids = RuleIdAllocator::new(NAT_AUTO_RULE_ID_BASE);
    let mut rules = Vec::with_capacity(spec.nat_rules.len());
    for (position, rule) in spec.nat_rules.iter().enumerate() {
        rules.push(nat_rule(rule, position, interfaces, &mut ids)?);
    }

    Ok(json!({
        "IsEnabled": wire_flag(spec.enabled.as_ref(), true),
        "NatRule": rules,
    }))
}

fn nat_rule(
    rule: &NatRuleSpec,
    position: usize,
    interfaces: &[NetworkInterface],
    ids: &mut RuleIdAllocator,
) -> Result<Value, Error> {
    let interface =
        find_interface(interfaces, &rule.network_id).ok_or_else(|| Error::ReferenceNotFound {
            service: "NatService",
            rule: format!("{} rule {}", rule.rule_type, position + 1),
            reference: rule.network_id.clone(),
        })?;

    let mut gateway_rule = Map::new();
    gateway_rule.insert(
        "Interface".to_string(),
        interface_descriptor(interface, ADMIN_NETWORK_MEDIA_TYPE),
    );
    gateway_rule.insert("OriginalIp".to_string(), json!(rule.original_ip));
    gateway_rule.insert("TranslatedIp".to_string(), json!(rule.translated_ip));
    if let Some(port) = &rule.original_port {
        gateway_rule.insert("OriginalPort".to_string(), json!(port.as_wire()));
    }
    if let Some(port) = &rule.translated_port {
        gateway_rule.insert("TranslatedPort".to_string(), json!(port.as_wire()));
    }
    if rule.rule_type == "DNAT" {
        let protocol = rule.protocol.clone().unwrap_or_else(|| "tcp".to_string());
        gateway_rule.insert("Protocol".to_string(), json!(protocol));
    }

    Ok(json!({
        "Id": ids.assign(rule.id.as_ref()),
        "IsEnabled": wire_flag(rule.enabled.as_ref(), true),
        "RuleType": rule.rule_type,
        "GatewayNatRule": gateway_rule,
    }))
}
