use std::fmt;

#[derive(Debug, Clone)]
pub enum CredentialError {
    SelectionFailed(String),
    CertificateNotFound(String),
    StoreInaccessible(String),
    AcquisitionFailed(String),
    PermissionDenied(String),
    Internal(String),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::SelectionFailed(msg) => write!(f, "Certificate selection failed: {}", msg),
            CredentialError::CertificateNotFound(name) => write!(f, "No server certificate found for '{}'", name),
            CredentialError::StoreInaccessible(msg) => write!(f, "Certificate store inaccessible: {}", msg),
            CredentialError::AcquisitionFailed(msg) => write!(f, "Credential acquisition failed: {}", msg),
            CredentialError::PermissionDenied(msg) => write!(
                f,
                "Credential access denied: {}. Be sure the process has rights to read the private key",
                msg
            ),
            CredentialError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for CredentialError {}

pub type Result<T> = std::result::Result<T, CredentialError>;
