use yew::prelude::*;

use super::{CompanyList, CompanyModal, FilterBar};
use crate::hooks::use_companies;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub token: String,
    pub on_logout: Callback<()>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let companies = use_companies(props.token.clone());
    let state = &*companies.state;

    let logout_click = {
        let cb = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let add_click = {
        let cb = companies.open_create.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="dashboard-card">
            <div class="dashboard-header">
                <h2>{"Painel de Clientes"}</h2>
                <button class="btn-logout" onclick={logout_click}>{"Sair"}</button>
            </div>

            <div class="dashboard-actions">
                <FilterBar filters={state.filters.clone()} on_change={companies.set_filter.clone()} />
                <div class="add-row">
                    <button class="btn-primary" onclick={add_click}>{"+ Adicionar Nova Empresa"}</button>
                </div>
            </div>

            <div class="dashboard-list">
                <h3>{"Empresas Registadas"}</h3>
                if state.loading {
                    <p class="loading-text">{"A carregar empresas..."}</p>
                }
                if let Some(error) = &state.error {
                    <p class="error-banner">{error.clone()}</p>
                }
                if state.shows_list() {
                    <CompanyList
                        companies={state.companies.clone()}
                        on_edit={companies.open_edit.clone()}
                        on_delete={companies.delete.clone()}
                    />
                }
            </div>

            if let Some(mode) = &state.modal {
                <CompanyModal
                    mode={mode.clone()}
                    error={state.form_error.clone()}
                    saving={state.saving}
                    on_close={companies.close_modal.clone()}
                    on_save={companies.save.clone()}
                />
            }
        </div>
    }
}
