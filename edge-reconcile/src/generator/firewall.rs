use serde_json::{json, Value};

use crate::desired::{FirewallRuleSpec, FirewallServiceSpec, Scalar};
use crate::generator::{wire_flag, wire_scalar};
use crate::id_ranges::{RuleIdAllocator, FIREWALL_RULE_ID_BASE};

/// Generate the `FirewallService` wire block.
///
/// Firewall rules carry no network references, so generation cannot fail.
pub fn generate_firewall_service(spec: &FirewallServiceSpec) -> Value {
    let mut ids = RuleIdAllocator::new(FIREWALL_RULE_ID_BASE);
    let rules: Vec<Value> = spec
        .firewall_rules
        .iter()
        .map(|rule| firewall_rule(rule, &mut ids))
        .collect();

    json!({
        "IsEnabled": wire_flag(spec.enabled.as_ref(), true),
        "DefaultAction": spec.policy.clone().unwrap_or_else(|| "drop".to_string()),
        "LogDefaultAction": wire_flag(spec.log_default_action.as_ref(), false),
        "FirewallRule": rules,
    })
}

fn firewall_rule(rule: &FirewallRuleSpec, ids: &mut RuleIdAllocator) -> Value {
    json!({
        "Id": ids.assign(rule.id.as_ref()),
        "IsEnabled": wire_flag(rule.enabled.as_ref(), true),
        "MatchOnTranslate": "false",
        "Description": rule.description.clone().unwrap_or_default(),
        "Policy": rule.policy.clone().unwrap_or_else(|| "allow".to_string()),
        "Protocols": protocols(rule.protocols.as_deref()),
        "DestinationPortRange": wire_scalar(rule.destination_port_range.as_ref(), "Any"),
        "Port": single_port(rule.destination_port_range.as_ref()),
        "DestinationIp": rule.destination_ip,
        "SourcePortRange": wire_scalar(rule.source_port_range.as_ref(), "Any"),
        "SourcePort": single_port(rule.source_port_range.as_ref()),
        "SourceIp": rule.source_ip,
        "EnableLogging": wire_flag(rule.enable_logging.as_ref(), false),
    })
}

fn protocols(protocols: Option<&str>) -> Value {
    match protocols.unwrap_or("tcp") {
        "udp" => json!({"Udp": "true"}),
        "icmp" => json!({"Icmp": "true"}),
        "any" => json!({"Any": "true"}),
        "tcp+udp" => json!({"Tcp": "true", "Udp": "true"}),
        _ => json!({"Tcp": "true"}),
    }
}

/// The device wants a plain port alongside each port range: the range itself
/// when it is a single port number, `-1` for `Any` and true ranges.
fn single_port(range: Option<&Scalar>) -> String {
    let range = wire_scalar(range, "Any");
    if !range.is_empty() && range.chars().all(|c| c.is_ascii_digit()) {
        range
    } else {
        "-1".to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::generate_firewall_service;
    use crate::desired::FirewallServiceSpec;

    fn spec(doc: serde_json::Value) -> FirewallServiceSpec {
        serde_json::from_value(doc).expect("firewall spec")
    }

    #[test]
    fn applies_rule_defaults_and_positional_ids() {
        let generated = generate_firewall_service(&spec(json!({
            "policy": "drop",
            "log_default_action": true,
            "firewall_rules": [
                {
                    "enabled": true,
                    "description": "A rule",
                    "policy": "allow",
                    "protocols": "tcp",
                    "destination_port_range": "Any",
                    "destination_ip": "10.10.1.2",
                    "source_port_range": "Any",
                    "source_ip": "192.0.2.2",
                },
                {
                    "enabled": true,
                    "destination_ip": "10.10.1.3-10.10.1.5",
                    "source_ip": "192.0.2.2/24",
                },
            ],
        })));

        assert_eq!(
            generated,
            json!({
                "IsEnabled": "true",
                "DefaultAction": "drop",
                "LogDefaultAction": "true",
                "FirewallRule": [
                    {
                        "Id": "1",
                        "IsEnabled": "true",
                        "MatchOnTranslate": "false",
                        "Description": "A rule",
                        "Policy": "allow",
                        "Protocols": {"Tcp": "true"},
                        "DestinationPortRange": "Any",
                        "Port": "-1",
                        "DestinationIp": "10.10.1.2",
                        "SourcePortRange": "Any",
                        "SourcePort": "-1",
                        "SourceIp": "192.0.2.2",
                        "EnableLogging": "false",
                    },
                    {
                        "Id": "2",
                        "IsEnabled": "true",
                        "MatchOnTranslate": "false",
                        "Description": "",
                        "Policy": "allow",
                        "Protocols": {"Tcp": "true"},
                        "DestinationPortRange": "Any",
                        "Port": "-1",
                        "DestinationIp": "10.10.1.3-10.10.1.5",
                        "SourcePortRange": "Any",
                        "SourcePort": "-1",
                        "SourceIp": "192.0.2.2/24",
                        "EnableLogging": "false",
                    },
                ],
            })
        );
    }

    #[test]
    fn numeric_port_ranges_populate_the_port_fields() {
        let generated = generate_firewall_service(&spec(json!({
            "firewall_rules": [{
                "destination_port_range": 8080,
                "source_port_range": "1024-2048",
                "destination_ip": "10.10.1.2",
                "source_ip": "Any",
            }],
        })));

        let rule = &generated["FirewallRule"][0];
        assert_eq!(rule["DestinationPortRange"], json!("8080"));
        assert_eq!(rule["Port"], json!("8080"));
        assert_eq!(rule["SourcePortRange"], json!("1024-2048"));
        assert_eq!(rule["SourcePort"], json!("-1"));
    }

    #[test]
    fn protocol_spellings_map_to_wire_flags() {
        let generated = generate_firewall_service(&spec(json!({
            "firewall_rules": [
                {"protocols": "udp", "destination_ip": "10.0.0.1", "source_ip": "Any"},
                {"protocols": "tcp+udp", "destination_ip": "10.0.0.1", "source_ip": "Any"},
                {"protocols": "icmp", "destination_ip": "10.0.0.1", "source_ip": "Any"},
                {"protocols": "any", "destination_ip": "10.0.0.1", "source_ip": "Any"},
                {"destination_ip": "10.0.0.1", "source_ip": "Any"},
            ],
        })));

        let rules = generated["FirewallRule"].as_array().expect("rules");
        assert_eq!(rules[0]["Protocols"], json!({"Udp": "true"}));
        assert_eq!(rules[1]["Protocols"], json!({"Tcp": "true", "Udp": "true"}));
        assert_eq!(rules[2]["Protocols"], json!({"Icmp": "true"}));
        assert_eq!(rules[3]["Protocols"], json!({"Any": "true"}));
        assert_eq!(rules[4]["Protocols"], json!({"Tcp": "true"}));
    }

    #[test]
    fn explicit_rule_ids_win() {
        let generated = generate_firewall_service(&spec(json!({
            "firewall_rules": [
                {"id": "10", "destination_ip": "10.0.0.1", "source_ip": "Any"},
                {"destination_ip": "10.0.0.2", "source_ip": "Any"},
            ],
        })));

        let rules = generated["FirewallRule"].as_array().expect("rules");
        assert_eq!(rules[0]["Id"], json!("10"));
        assert_eq!(rules[1]["Id"], json!("1"));
    }
}
