use yew::prelude::*;

use super::{Dashboard, LoginForm};
use crate::hooks::use_auth;

#[function_component(App)]
pub fn app() -> Html {
    let auth = use_auth();
    let state = &*auth.state;

    let content = match &state.token {
        Some(token) => html! {
            <div class="content content-wide">
                <Dashboard token={token.clone()} on_logout={auth.logout.clone()} />
            </div>
        },
        None => html! {
            <div class="content content-narrow">
                <LoginForm
                    loading={state.loading}
                    error={state.error.clone()}
                    on_login={auth.login.clone()}
                />
            </div>
        },
    };

    html! {
        <div class="app-shell">
            <header class="app-header">
                <h1>{"Portal Ecomp Jr."}</h1>
                <p>{"Gestão de Clientes"}</p>
            </header>

            <main class="app-main">
                {content}
            </main>

            <footer class="app-footer">
                <p>{"Desafio Técnico - Processo Seletivo 2025.2"}</p>
            </footer>
        </div>
    }
}
