// ============================================================================
// VALIDACIÓN DE FORMULARIOS (lado cliente)
// ============================================================================

use thiserror::Error;

pub const CNPJ_LENGTH: usize = 14;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("O campo \"{0}\" é obrigatório.")]
    Required(&'static str),

    #[error("O CNPJ deve conter 14 dígitos numéricos.")]
    InvalidCnpj,

    #[error("Email de contato inválido.")]
    InvalidEmail,

    #[error("Preencha o utilizador e a senha.")]
    MissingCredentials,
}

pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

/// Exactamente 14 dígitos ASCII, sin máscara
pub fn is_valid_cnpj(value: &str) -> bool {
    value.len() == CNPJ_LENGTH && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
