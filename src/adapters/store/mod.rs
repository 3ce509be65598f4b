pub mod pem_store;

pub use pem_store::PemDirectoryStore;
