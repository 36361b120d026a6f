// ============================================================================
// AUTH STORE - token + estado del formulario de login
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthStore {
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

pub enum AuthAction {
    LoginStarted,
    LoggedIn(String),
    LoginFailed(String),
    LoggedOut,
}

impl AuthStore {
    pub fn with_token(token: Option<String>) -> Self {
        Self {
            token,
            ..Self::default()
        }
    }
}

impl Reducible for AuthStore {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            AuthAction::LoginStarted => Self {
                loading: true,
                error: None,
                ..(*self).clone()
            },
            AuthAction::LoggedIn(token) => Self {
                token: Some(token),
                loading: false,
                error: None,
            },
            AuthAction::LoginFailed(message) => Self {
                token: None,
                loading: false,
                error: Some(message),
            },
            AuthAction::LoggedOut => Self::default(),
        };
        Rc::new(next)
    }
}
