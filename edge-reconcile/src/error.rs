use thiserror::Error;

/// A generation failure. Any error aborts the whole reconciliation pass;
/// submitting a partially generated patch could corrupt live device state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A rule references a network that is not attached to the gateway. An
    /// incomplete rule would be silently accepted by the device with
    /// undefined behavior, so this surfaces instead.
    #[error("{service}: {rule} references network '{reference}' which is not attached to the gateway")]
    ReferenceNotFound {
        service: &'static str,
        /// The offending rule, by name when it has one, else by position.
        rule: String,
        reference: String,
    },

    /// A virtual server names a pool that is not declared in the document.
    #[error("Load balancer virtual server {name} does not have a valid backing pool")]
    MissingBackingPool { name: String },
}
