use crate::domain::{Result, ServerCertificate, TlsPolicy};

/// Port for exchanging a certificate for reusable server credentials with
/// the platform TLS subsystem
pub trait CredentialFactoryPort: Send + Sync {
    /// Create credentials bound to one certificate and the given protocol
    /// policy, for inbound (server) use
    ///
    /// A single attempt, no retries; failures are returned to the caller
    /// unchanged.
    fn create_credentials(
        &self,
        certificate: ServerCertificate,
        policy: &TlsPolicy,
    ) -> Result<crate::domain::ServerCredentials>;
}
