use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_login: Callback<(String, String)>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                on_login.emit((username_input.value(), password_input.value()));
            }
        })
    };

    html! {
        <div class="login-card">
            <div class="login-header">
                <div class="login-logo">{"🔒"}</div>
                <h2>{"Acesso Restrito"}</h2>
            </div>

            <form class="login-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="username">{"Utilizador"}</label>
                    <input
                        type="text"
                        id="username"
                        name="username"
                        class="form-input"
                        ref={username_ref}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="password">{"Senha"}</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        class="form-input"
                        ref={password_ref}
                        required=true
                    />
                </div>

                if let Some(error) = &props.error {
                    <div class="error-banner">{error.clone()}</div>
                }

                <button type="submit" class="btn-primary btn-block" disabled={props.loading}>
                    {if props.loading { "A entrar..." } else { "Entrar" }}
                </button>
            </form>
        </div>
    }
}
