/// Clave de localStorage donde se guarda el token bearer
pub const STORAGE_KEY_TOKEN: &str = "authToken";

pub const LOGIN_PATH: &str = "/auth/login";
pub const COMPANIES_PATH: &str = "/empresas/";

/// Ruta de una empresa concreta (`/empresas/{id}`)
pub fn company_path(id: impl std::fmt::Display) -> String {
    format!("/empresas/{}", id)
}

/// Códigos HTTP aceptados como éxito en DELETE
pub const DELETE_SUCCESS_STATUSES: [u16; 2] = [200, 204];
