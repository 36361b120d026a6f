use gloo_storage::{LocalStorage, Storage};

use crate::error::StorageError;
use crate::services::traits::TokenStore;
use crate::utils::constants::STORAGE_KEY_TOKEN;

/// Token bearer en localStorage bajo una clave fija.
/// Se guarda el texto tal cual (sin JSON), igual que `localStorage.setItem`.
#[derive(Clone, Copy, Default)]
pub struct LocalTokenStore;

/// Valor crudo leído de storage -> token utilizable
pub fn decode_stored(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        let raw = LocalStorage::raw()
            .get_item(STORAGE_KEY_TOKEN)
            .unwrap_or_else(|e| {
                log::warn!("⚠️ [AUTH] No se pudo leer localStorage: {:?}", e);
                None
            });
        decode_stored(raw)
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(STORAGE_KEY_TOKEN, token)
            .map_err(|e| StorageError::WriteFailed(format!("{:?}", e)))
    }

    fn clear(&self) {
        if let Err(e) = LocalStorage::raw().remove_item(STORAGE_KEY_TOKEN) {
            log::warn!("⚠️ [AUTH] No se pudo borrar el token: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_token_is_used_as_is() {
        assert_eq!(
            decode_stored(Some("eyJhbGciOiJIUzI1NiJ9.abc".to_string())).as_deref(),
            Some("eyJhbGciOiJIUzI1NiJ9.abc")
        );
    }

    #[test]
    fn missing_or_blank_value_means_no_session() {
        assert_eq!(decode_stored(None), None);
        assert_eq!(decode_stored(Some(String::new())), None);
        assert_eq!(decode_stored(Some("  ".to_string())), None);
    }
}
