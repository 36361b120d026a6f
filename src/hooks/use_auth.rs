use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::LoginCredentials;
use crate::stores::{AuthAction, AuthStore};
use crate::viewmodels::SessionViewModel;

#[derive(Clone)]
pub struct UseAuthHandle {
    pub state: UseReducerHandle<AuthStore>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    // El token guardado se lee una sola vez, al montar
    let state = use_reducer(|| AuthStore::with_token(SessionViewModel::new().restore()));

    let login = {
        let state = state.clone();
        Callback::from(move |(username, password): (String, String)| {
            state.dispatch(AuthAction::LoginStarted);
            let state = state.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new();
                match vm.login(LoginCredentials::new(username, password)).await {
                    Ok(token) => state.dispatch(AuthAction::LoggedIn(token)),
                    Err(e) => state.dispatch(AuthAction::LoginFailed(e.to_string())),
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            SessionViewModel::new().logout();
            state.dispatch(AuthAction::LoggedOut);
        })
    };

    UseAuthHandle {
        state,
        login,
        logout,
    }
}
