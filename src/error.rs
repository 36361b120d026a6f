// ============================================================================
// ERRORES
// ============================================================================
// Un único mensaje genérico por operación. La causa real (red, status HTTP,
// parseo) solo va al log, nunca al usuario.
// ============================================================================

use thiserror::Error;

use crate::utils::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Utilizador ou senha inválidos.")]
    InvalidCredentials,

    #[error("Não foi possível obter o token.")]
    MissingToken,

    #[error("Falha ao buscar empresas. Verifique a sua sessão.")]
    FetchFailed,

    /// El servidor puede devolver un `detail` que se muestra tal cual
    #[error("{}", .0.as_deref().unwrap_or("Falha ao criar empresa."))]
    CreateFailed(Option<String>),

    #[error("Falha ao atualizar empresa.")]
    UpdateFailed,

    #[error("Falha ao excluir empresa.")]
    DeleteFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("erro ao gravar em localStorage: {0}")]
    WriteFailed(String),
}

/// Error de una acción del usuario: validación local o fallo de la API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
