//! Reconciliation engine for declarative edge gateway service configuration.
//!
//! A virtual network edge device holds one configuration block per managed
//! service (firewall, NAT, load balancing, IPsec VPN, static routing). An
//! operator describes the desired state of those services in a compact,
//! schema-validated document; the device reports its live state in a nested
//! wire format. This crate turns the desired document into the device's wire
//! representation, compares it structurally against the live state, and
//! assembles the minimal patch needed to converge the two.
//!
//! # Architecture
//!
//! - [`desired`] — Typed desired-state documents and their lenient scalars
//! - [`interface`] — Gateway network inventory and wire interface descriptors
//! - [`id_ranges`] — Stable rule identifier allocation
//! - [`generator`] — Per-service wire configuration generators
//! - [`differ`] — Per-service field stripping and structural comparison
//! - [`configuration`] — The top-level aggregator producing the patch
//! - [`error`] — Generation failures
//!
//! # Workflow
//!
//! Build an [`EdgeGatewayConfiguration`] from the desired document, the live
//! remote configuration, and the gateway's attached-network inventory. The
//! whole pass is evaluated once, at construction; the result is immutable.
//! `update_required()` gates the expensive device update call, `config()` is
//! the minimal patch to submit, and `diff()` is the audit trail. Generation
//! and diffing are pure computation — submitting the patch, sessions, and
//! retries belong to the caller.

pub mod configuration;
pub mod desired;
pub mod differ;
pub mod error;
pub mod generator;
pub mod id_ranges;
pub mod interface;

pub use configuration::{EdgeGatewayConfiguration, ServiceKind};
pub use desired::EdgeGatewayServices;
pub use differ::{diff_service, Stripper};
pub use error::Error;
pub use interface::NetworkInterface;
