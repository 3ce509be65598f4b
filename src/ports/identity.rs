/// Port for resolving the local machine's own hostname
///
/// Used to normalize an empty requested server name.
pub trait LocalIdentityPort: Send + Sync {
    fn local_hostname(&self) -> String;
}
