pub mod auth;
pub mod company;

pub use auth::{LoginCredentials, TokenResponse};
pub use company::{
    Company, CompanyFilters, CompanyForm, CompanyId, CompanyPayload, CompanyUpdate, FilterField,
    FormMode, NewCompany,
};
