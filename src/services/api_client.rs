// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Cada endpoint colapsa sus fallos en un único ApiError.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::UrlSearchParams;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    Company, CompanyFilters, CompanyId, CompanyUpdate, LoginCredentials, NewCompany, TokenResponse,
};
use crate::services::traits::{AuthApi, CompanyApi};
use crate::utils::constants::{company_path, COMPANIES_PATH, DELETE_SUCCESS_STATUSES, LOGIN_PATH};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn with_bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

/// Éxito en DELETE: 200 o 204 (sin cuerpo)
pub fn is_delete_success(status: u16) -> bool {
    DELETE_SUCCESS_STATUSES.contains(&status)
}

/// `detail` del cuerpo de error de FastAPI, solo si es texto
pub fn error_detail(body: &serde_json::Value) -> Option<String> {
    body.get("detail")?
        .as_str()
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}

async fn create_failure(response: Response) -> ApiError {
    let detail = match response.json::<serde_json::Value>().await {
        Ok(body) => error_detail(&body),
        Err(e) => {
            log::warn!("⚠️ [EMPRESAS] Cuerpo de error ilegible: {}", e);
            None
        }
    };
    ApiError::CreateFailed(detail)
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<String, ApiError> {
        log::info!("🔐 [AUTH] Login para usuario: {}", credentials.username);

        let form = UrlSearchParams::new().map_err(|e| {
            log::error!("❌ [AUTH] No se pudo crear el formulario: {:?}", e);
            ApiError::InvalidCredentials
        })?;
        for (name, value) in credentials.form_fields() {
            form.append(name, value);
        }

        let response = Request::post(&self.url(LOGIN_PATH))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|e| {
                log::error!("❌ [AUTH] Request build error: {}", e);
                ApiError::InvalidCredentials
            })?
            .send()
            .await
            .map_err(|e| {
                log::error!("❌ [AUTH] Network error: {}", e);
                ApiError::InvalidCredentials
            })?;

        if !response.ok() {
            log::warn!("⚠️ [AUTH] HTTP {}: {}", response.status(), response.status_text());
            return Err(ApiError::InvalidCredentials);
        }

        let body = response.json::<TokenResponse>().await.map_err(|e| {
            log::error!("❌ [AUTH] Parse error: {}", e);
            ApiError::InvalidCredentials
        })?;

        body.token().ok_or(ApiError::MissingToken)
    }
}

#[async_trait(?Send)]
impl CompanyApi for ApiClient {
    async fn list_companies(
        &self,
        token: &str,
        filters: &CompanyFilters,
    ) -> Result<Vec<Company>, ApiError> {
        let params = filters.active_params();
        log::info!("📋 [EMPRESAS] Listando empresas ({} filtros activos)", params.len());

        let mut builder = Request::get(&self.url(COMPANIES_PATH));
        if !params.is_empty() {
            builder = builder.query(params);
        }

        let response = with_bearer(builder, token).send().await.map_err(|e| {
            log::error!("❌ [EMPRESAS] Network error: {}", e);
            ApiError::FetchFailed
        })?;

        if !response.ok() {
            log::warn!("⚠️ [EMPRESAS] HTTP {}: {}", response.status(), response.status_text());
            return Err(ApiError::FetchFailed);
        }

        let companies = response.json::<Vec<Company>>().await.map_err(|e| {
            log::error!("❌ [EMPRESAS] Parse error: {}", e);
            ApiError::FetchFailed
        })?;

        log::info!("✅ [EMPRESAS] {} empresas recibidas", companies.len());
        Ok(companies)
    }

    async fn create_company(&self, token: &str, company: &NewCompany) -> Result<Company, ApiError> {
        log::info!("🏢 [EMPRESAS] Creando empresa: {}", company.name);

        let response = with_bearer(Request::post(&self.url(COMPANIES_PATH)), token)
            .json(company)
            .map_err(|e| {
                log::error!("❌ [EMPRESAS] Serialization error: {}", e);
                ApiError::CreateFailed(None)
            })?
            .send()
            .await
            .map_err(|e| {
                log::error!("❌ [EMPRESAS] Network error: {}", e);
                ApiError::CreateFailed(None)
            })?;

        if !response.ok() {
            log::warn!("⚠️ [EMPRESAS] Creación rechazada: HTTP {}", response.status());
            return Err(create_failure(response).await);
        }

        response.json::<Company>().await.map_err(|e| {
            log::error!("❌ [EMPRESAS] Parse error: {}", e);
            ApiError::CreateFailed(None)
        })
    }

    async fn update_company(
        &self,
        token: &str,
        id: CompanyId,
        update: &CompanyUpdate,
    ) -> Result<Company, ApiError> {
        log::info!("📝 [EMPRESAS] Actualizando empresa {}", id);

        let response = with_bearer(Request::put(&self.url(&company_path(id))), token)
            .json(update)
            .map_err(|e| {
                log::error!("❌ [EMPRESAS] Serialization error: {}", e);
                ApiError::UpdateFailed
            })?
            .send()
            .await
            .map_err(|e| {
                log::error!("❌ [EMPRESAS] Network error: {}", e);
                ApiError::UpdateFailed
            })?;

        if !response.ok() {
            log::warn!("⚠️ [EMPRESAS] HTTP {}: {}", response.status(), response.status_text());
            return Err(ApiError::UpdateFailed);
        }

        response.json::<Company>().await.map_err(|e| {
            log::error!("❌ [EMPRESAS] Parse error: {}", e);
            ApiError::UpdateFailed
        })
    }

    async fn delete_company(&self, token: &str, id: CompanyId) -> Result<(), ApiError> {
        log::info!("🗑️ [EMPRESAS] Eliminando empresa {}", id);

        let response = with_bearer(Request::delete(&self.url(&company_path(id))), token)
            .send()
            .await
            .map_err(|e| {
                log::error!("❌ [EMPRESAS] Network error: {}", e);
                ApiError::DeleteFailed
            })?;

        if !is_delete_success(response.status()) {
            log::warn!("⚠️ [EMPRESAS] HTTP {}: {}", response.status(), response.status_text());
            return Err(ApiError::DeleteFailed);
        }

        Ok(())
    }
}
