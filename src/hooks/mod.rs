pub mod use_auth;
pub mod use_companies;

pub use use_auth::{use_auth, UseAuthHandle};
pub use use_companies::{use_companies, UseCompaniesHandle};
