use crate::ports::LocalIdentityPort;

/// Local identity resolver backed by the operating system hostname.
pub struct SystemIdentity;

impl LocalIdentityPort for SystemIdentity {
    fn local_hostname(&self) -> String {
        gethostname::gethostname()
            .into_string()
            .unwrap_or_else(|_| "localhost".to_string())
    }
}
