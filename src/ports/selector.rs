use crate::domain::{Result, ServerCertificate};

/// Port for overriding which certificate backs new server credentials
///
/// Supplied per call by the embedding application; when absent the default
/// certificate store lookup by name is used instead.
pub trait CertificateSelectorPort: Send + Sync {
    /// Choose a certificate for the requested server name
    fn select(&self, server_name: &str) -> Result<ServerCertificate>;
}

// A plain function makes a valid selector, mirroring callers that pass a
// closure instead of a dedicated type.
impl<F> CertificateSelectorPort for F
where
    F: Fn(&str) -> Result<ServerCertificate> + Send + Sync,
{
    fn select(&self, server_name: &str) -> Result<ServerCertificate> {
        self(server_name)
    }
}
