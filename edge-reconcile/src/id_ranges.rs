//! Stable rule identifier allocation.
//!
//! Rules without an operator-supplied identifier receive a deterministic one
//! derived from their position in the rule list, so regenerating an
//! unchanged document reproduces identical identifiers and the differ stays
//! quiet. Reordering rules legitimately changes the allocation.

use crate::desired::Scalar;

/// Firewall rule identifiers count up from 1.
pub const FIREWALL_RULE_ID_BASE: u32 = 1;

/// Auto-assigned NAT rule identifiers live in the reserved range above the
/// 65536 boundary, clear of anything an operator would hand-assign.
pub const NAT_AUTO_RULE_ID_BASE: u32 = 65537;

/// Pass-scoped allocator, one per generation run.
#[derive(Debug)]
pub struct RuleIdAllocator {
    next: u32,
}

impl RuleIdAllocator {
    pub fn new(base: u32) -> Self {
        Self { next: base }
    }

    /// The identifier to embed in the wire record: the operator's, verbatim,
    /// when supplied; otherwise the next auto identifier. Explicit
    /// identifiers do not consume an auto slot.
    pub fn assign(&mut self, explicit: Option<&Scalar>) -> String {
        match explicit {
            Some(id) => id.as_wire(),
            None => {
                let id = self.next;
                self.next += 1;
                id.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::desired::Scalar;

    use super::{RuleIdAllocator, NAT_AUTO_RULE_ID_BASE};

    #[test]
    fn auto_ids_count_up_from_the_base() {
        let mut ids = RuleIdAllocator::new(NAT_AUTO_RULE_ID_BASE);
        assert_eq!(ids.assign(None), "65537");
        assert_eq!(ids.assign(None), "65538");
    }

    #[test]
    fn explicit_ids_pass_through_without_consuming_a_slot() {
        let mut ids = RuleIdAllocator::new(NAT_AUTO_RULE_ID_BASE);
        assert_eq!(ids.assign(None), "65537");
        assert_eq!(ids.assign(Some(&Scalar::Text("999".to_string()))), "999");
        assert_eq!(ids.assign(Some(&Scalar::Number(42))), "42");
        assert_eq!(ids.assign(None), "65538");
    }
}
