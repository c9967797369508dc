//! Per-service wire configuration generators.
//!
//! Each generator maps a desired-state block into the device's nested wire
//! representation: defaults applied, identifiers assigned in rule order,
//! network references resolved against the inventory. Generators are pure
//! functions returning freshly built values; nothing is shared between
//! calls, so repeated generation of the same document is byte-for-byte
//! identical.

pub mod firewall;
pub mod load_balancer;
pub mod nat;
pub mod static_routing;
pub mod vpn;

pub use firewall::generate_firewall_service;
pub use load_balancer::generate_load_balancer_service;
pub use nat::generate_nat_service;
pub use static_routing::generate_static_routing_service;
pub use vpn::generate_ipsec_vpn_service;

use crate::desired::{Scalar, Toggle};

/// Wire encoding of an optional flag.
pub(crate) fn wire_flag(flag: Option<&Toggle>, default: bool) -> String {
    match flag {
        Some(flag) => flag.as_wire(),
        None => default.to_string(),
    }
}

/// Wire encoding of an optional numeric-or-string field.
pub(crate) fn wire_scalar(value: Option<&Scalar>, default: &str) -> String {
    match value {
        Some(value) => value.as_wire(),
        None => default.to_string(),
    }
}
