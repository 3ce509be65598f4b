use crate::domain::{Result, ServerCertificate};

/// Port for the default certificate store lookup
pub trait CertificateStorePort: Send + Sync {
    /// Find the server certificate registered under `server_name`
    ///
    /// Returns `CertificateNotFound` when the store has no entry for the
    /// name, `StoreInaccessible` or `PermissionDenied` when the store itself
    /// cannot be read.
    fn find_by_name(&self, server_name: &str) -> Result<ServerCertificate>;
}
