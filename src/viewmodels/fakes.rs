//! Dobles en memoria de la API y del storage para los tests de viewmodels.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::{ApiError, StorageError};
use crate::models::{
    Company, CompanyFilters, CompanyId, CompanyUpdate, LoginCredentials, NewCompany,
};
use crate::services::{AuthApi, CompanyApi, TokenStore};

#[derive(Clone)]
pub struct FakeAuthApi {
    username: String,
    password: String,
    token: String,
    calls: Rc<Cell<usize>>,
}

impl FakeAuthApi {
    pub fn accepting(username: &str, password: &str, token: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            token: token.to_string(),
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<String, ApiError> {
        self.calls.set(self.calls.get() + 1);
        if credentials.username == self.username && credentials.password == self.password {
            Ok(self.token.clone())
        } else {
            Err(ApiError::InvalidCredentials)
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
    fail_writes: bool,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.token.borrow_mut() = Some(token.to_string());
        store
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn current(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.current()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::WriteFailed("QuotaExceededError".to_string()));
        }
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[derive(Default)]
struct ServerState {
    companies: Vec<Company>,
    next_id: i64,
    list_calls: usize,
    mutation_calls: usize,
    last_query: Vec<(String, String)>,
}

/// Servidor falso: filtra con `contains` sin distinguir mayúsculas y
/// rechaza CNPJ duplicados, como el backend real.
#[derive(Clone)]
pub struct FakeCompanyApi {
    token: String,
    state: Rc<RefCell<ServerState>>,
}

impl FakeCompanyApi {
    pub fn with_companies(token: &str, companies: Vec<Company>) -> Self {
        let next_id = companies.iter().map(|c| c.id.0).max().unwrap_or(0) + 1;
        Self {
            token: token.to_string(),
            state: Rc::new(RefCell::new(ServerState {
                companies,
                next_id,
                ..ServerState::default()
            })),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.state.borrow().list_calls
    }

    pub fn mutation_calls(&self) -> usize {
        self.state.borrow().mutation_calls
    }

    pub fn last_query(&self) -> Vec<(String, String)> {
        self.state.borrow().last_query.clone()
    }

    fn authorized(&self, token: &str) -> bool {
        token == self.token
    }
}

fn matches(value: &str, filter: &str) -> bool {
    value.to_lowercase().contains(&filter.to_lowercase())
}

#[async_trait(?Send)]
impl CompanyApi for FakeCompanyApi {
    async fn list_companies(
        &self,
        token: &str,
        filters: &CompanyFilters,
    ) -> Result<Vec<Company>, ApiError> {
        let mut state = self.state.borrow_mut();
        state.list_calls += 1;
        state.last_query = filters
            .active_params()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        if !self.authorized(token) {
            return Err(ApiError::FetchFailed);
        }
        Ok(state
            .companies
            .iter()
            .filter(|c| matches(&c.name, &filters.name))
            .filter(|c| matches(&c.city, &filters.city))
            .filter(|c| matches(&c.sector, &filters.sector))
            .cloned()
            .collect())
    }

    async fn create_company(&self, token: &str, company: &NewCompany) -> Result<Company, ApiError> {
        let mut state = self.state.borrow_mut();
        state.mutation_calls += 1;
        if !self.authorized(token) {
            return Err(ApiError::CreateFailed(None));
        }
        if state.companies.iter().any(|c| c.tax_id == company.tax_id) {
            return Err(ApiError::CreateFailed(Some("CNPJ já registado.".to_string())));
        }
        let created = Company {
            id: CompanyId(state.next_id),
            name: company.name.clone(),
            tax_id: company.tax_id.clone(),
            city: company.city.clone(),
            sector: company.sector.clone(),
            phone: company.phone.clone(),
            contact_email: company.contact_email.clone(),
            registered_at: Some("2025-06-01T09:00:00".to_string()),
        };
        state.next_id += 1;
        state.companies.push(created.clone());
        Ok(created)
    }

    async fn update_company(
        &self,
        token: &str,
        id: CompanyId,
        update: &CompanyUpdate,
    ) -> Result<Company, ApiError> {
        let mut state = self.state.borrow_mut();
        state.mutation_calls += 1;
        if !self.authorized(token) {
            return Err(ApiError::UpdateFailed);
        }
        let company = state
            .companies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ApiError::UpdateFailed)?;
        company.name = update.name.clone();
        company.city = update.city.clone();
        company.sector = update.sector.clone();
        company.phone = update.phone.clone();
        Ok(company.clone())
    }

    async fn delete_company(&self, token: &str, id: CompanyId) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        state.mutation_calls += 1;
        if !self.authorized(token) {
            return Err(ApiError::DeleteFailed);
        }
        let before = state.companies.len();
        state.companies.retain(|c| c.id != id);
        if state.companies.len() == before {
            return Err(ApiError::DeleteFailed);
        }
        Ok(())
    }
}
