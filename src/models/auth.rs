use serde::{Deserialize, Serialize};

/// Respuesta de `POST /auth/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl TokenResponse {
    /// Token utilizable (no vacío)
    pub fn token(self) -> Option<String> {
        self.access_token.filter(|t| !t.is_empty())
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// Campos del body `application/x-www-form-urlencoded`
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [("username", self.username.as_str()), ("password", self.password.as_str())]
    }
}
