use async_trait::async_trait;

use crate::error::{ApiError, StorageError};
use crate::models::{Company, CompanyFilters, CompanyId, CompanyUpdate, LoginCredentials, NewCompany};

/// Frontera de autenticación: credenciales -> token bearer
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<String, ApiError>;
}

/// Operaciones CRUD sobre `/empresas`
#[async_trait(?Send)]
pub trait CompanyApi {
    async fn list_companies(
        &self,
        token: &str,
        filters: &CompanyFilters,
    ) -> Result<Vec<Company>, ApiError>;

    async fn create_company(&self, token: &str, company: &NewCompany) -> Result<Company, ApiError>;

    async fn update_company(
        &self,
        token: &str,
        id: CompanyId,
        update: &CompanyUpdate,
    ) -> Result<Company, ApiError>;

    async fn delete_company(&self, token: &str, id: CompanyId) -> Result<(), ApiError>;
}

/// Persistencia del token entre recargas de página
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn clear(&self);
}
