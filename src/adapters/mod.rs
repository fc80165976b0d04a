// Adapters layer: concrete implementations for external systems (credentials, storage, http).

pub mod credentials;
pub mod http;
pub mod storage;

pub use credentials::CredentialStore;
pub use http::ManagementApi;
pub use storage::LocalStorage;
