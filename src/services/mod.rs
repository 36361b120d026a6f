// ============================================================================
// SERVICES - SOLO comunicación con el exterior (API + localStorage)
// ============================================================================

pub mod api_client;
pub mod token_storage;
pub mod traits;

pub use api_client::ApiClient;
pub use token_storage::LocalTokenStore;
pub use traits::{AuthApi, CompanyApi, TokenStore};
