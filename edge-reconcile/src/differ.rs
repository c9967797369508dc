//! Per-service comparison of generated against live configuration.
//!
//! Before comparing, each side passes through a service-specific [`Stripper`]
//! that drops fields the generator cannot stably reproduce or that the device
//! mutates on its own, rule identifiers being the usual case: the device is
//! free to renumber them, so they must never count as drift.

use serde_json::Value;
use value_diff_core::{diff, DiffOp, Path};

/// Removes or normalizes fields to ignore during comparison. The default is
/// the identity. Implementations always return an independent value; callers
/// may compare and discard it without touching the input.
pub trait Stripper {
    fn strip(&self, config: &Value) -> Value {
        config.clone()
    }
}

/// For services whose wire format has nothing volatile.
pub struct IdentityStripper;

impl Stripper for IdentityStripper {}

/// Drops firewall rule identifiers.
pub struct FirewallStripper;

impl Stripper for FirewallStripper {
    fn strip(&self, config: &Value) -> Value {
        strip_rule_ids(config, "FirewallRule")
    }
}

/// Drops NAT rule identifiers.
pub struct NatStripper;

impl Stripper for NatStripper {
    fn strip(&self, config: &Value) -> Value {
        strip_rule_ids(config, "NatRule")
    }
}

/// Drops server-assigned static route identifiers.
pub struct StaticRoutingStripper;

impl Stripper for StaticRoutingStripper {
    fn strip(&self, config: &Value) -> Value {
        strip_rule_ids(config, "StaticRoute")
    }
}

fn strip_rule_ids(config: &Value, list_key: &str) -> Value {
    let mut stripped = config.clone();
    if let Some(rules) = stripped.get_mut(list_key).and_then(Value::as_array_mut) {
        for rule in rules {
            if let Some(rule) = rule.as_object_mut() {
                rule.remove("Id");
            }
        }
    }
    stripped
}

/// Compare a generated service block against its remote counterpart.
///
/// Either side may be absent: a service never configured remotely, or (for
/// symmetry) no local block. Both absent is an empty diff; one side absent is
/// a single whole-config operation at the root path. Present pairs compare
/// stripped, deep, with unordered maps and ordered sequences.
pub fn diff_service(
    local: Option<&Value>,
    remote: Option<&Value>,
    stripper: &dyn Stripper,
) -> Vec<DiffOp> {
    match (local, remote) {
        (None, None) => Vec::new(),
        (Some(local), None) => vec![DiffOp::Removed {
            path: Path::root(),
            old: stripper.strip(local),
        }],
        (None, Some(remote)) => vec![DiffOp::Added {
            path: Path::root(),
            new: stripper.strip(remote),
        }],
        (Some(local), Some(remote)) => {
            let local = stripper.strip(local);
            let remote = stripper.strip(remote);
            if local == remote {
                Vec::new()
            } else {
                diff(&local, &remote)
            }
        }
    }
}
