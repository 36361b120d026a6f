// ============================================================================
// SESSION VIEWMODEL - LOGIN / LOGOUT / TOKEN
// ============================================================================
// Devuelve valores, los hooks actualizan el estado
// ============================================================================

use crate::error::AppError;
use crate::models::LoginCredentials;
use crate::services::{ApiClient, AuthApi, LocalTokenStore, TokenStore};
use crate::utils::validation::ValidationError;

pub struct SessionViewModel<A = ApiClient, S = LocalTokenStore> {
    api: A,
    store: S,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self::with(ApiClient::new(), LocalTokenStore)
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AuthApi, S: TokenStore> SessionViewModel<A, S> {
    pub fn with(api: A, store: S) -> Self {
        Self { api, store }
    }

    /// Token guardado de una visita anterior
    pub fn restore(&self) -> Option<String> {
        let token = self.store.load();
        if token.is_some() {
            log::info!("💾 [AUTH] Token encontrado en storage");
        }
        token
    }

    /// Login: si va bien el token queda persistido
    pub async fn login(&self, credentials: LoginCredentials) -> Result<String, AppError> {
        if !credentials.is_complete() {
            return Err(ValidationError::MissingCredentials.into());
        }

        let token = self.api.login(&credentials).await.map_err(|e| {
            log::warn!("⚠️ [AUTH] Login fallido: {}", e);
            e
        })?;

        // Si no se puede persistir, la sesión sigue en memoria
        if let Err(e) = self.store.save(&token) {
            log::error!("❌ [AUTH] Error guardando token: {}", e);
        }

        log::info!("✅ [AUTH] Login exitoso: {}", credentials.username);
        Ok(token)
    }

    pub fn logout(&self) {
        log::info!("👋 [AUTH] Logout");
        self.store.clear();
    }
}
