//! Shared error type for storage port adapters.

use super::macros::define_port_error;

define_port_error! {
    /// Persistence failures raised by repository adapters. Services wrap
    /// these into the data-access error kind before they leave the domain.
    pub enum RepositoryError {
        /// A pooled connection could not be obtained or the data-access
        /// layer failed to initialise.
        Connection => "repository connection failed: {message}",
        /// A query or statement failed during execution.
        Query => "repository query failed: {message}",
    }
}
