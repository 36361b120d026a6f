// ============================================================================
// USE COMPANIES HOOK - estado del dashboard + acciones CRUD
// ============================================================================
// Las peticiones no se coordinan entre sí: dos mutaciones rápidas pueden
// terminar en cualquier orden y gana el último fetch en llegar.
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::error::AppError;
use crate::models::{Company, CompanyForm, CompanyId, FilterField};
use crate::stores::{DashboardAction, DashboardStore};
use crate::utils::dialogs::{alert, confirm};
use crate::viewmodels::CompanyViewModel;

#[derive(Clone)]
pub struct UseCompaniesHandle {
    pub state: UseReducerHandle<DashboardStore>,
    pub set_filter: Callback<(FilterField, String)>,
    pub open_create: Callback<()>,
    pub open_edit: Callback<Company>,
    pub close_modal: Callback<()>,
    pub save: Callback<CompanyForm>,
    pub delete: Callback<CompanyId>,
}

fn report_failure(error: &impl std::fmt::Display) {
    alert(&format!("Erro: {}", error));
}

#[hook]
pub fn use_companies(token: String) -> UseCompaniesHandle {
    let state = use_reducer(DashboardStore::default);

    // Fetch al montar y en cada cambio de filtros
    {
        let state = state.clone();
        let filters = state.filters.clone();
        use_effect_with((token.clone(), filters), move |(token, filters)| {
            state.dispatch(DashboardAction::FetchStarted);
            let token = token.clone();
            let filters = filters.clone();
            spawn_local(async move {
                let result = CompanyViewModel::new().fetch(&token, &filters).await;
                state.dispatch(DashboardAction::Fetched(result));
            });
            || ()
        });
    }

    let set_filter = {
        let state = state.clone();
        Callback::from(move |(field, value): (FilterField, String)| {
            state.dispatch(DashboardAction::SetFilter(field, value));
        })
    };

    let open_create = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(DashboardAction::OpenCreate))
    };

    let open_edit = {
        let state = state.clone();
        Callback::from(move |company: Company| state.dispatch(DashboardAction::OpenEdit(company)))
    };

    let close_modal = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(DashboardAction::CloseModal))
    };

    let save = {
        let state = state.clone();
        let token = token.clone();
        Callback::from(move |form: CompanyForm| {
            let Some(mode) = state.modal.clone() else {
                log::warn!("⚠️ [EMPRESAS] Guardar sin modal abierto");
                return;
            };
            let filters = state.filters.clone();
            state.dispatch(DashboardAction::SaveStarted);

            let state = state.clone();
            let token = token.clone();
            spawn_local(async move {
                let vm = CompanyViewModel::new();
                match vm.save(&token, &form, &mode, &filters).await {
                    Ok(refresh) => {
                        state.dispatch(DashboardAction::CloseModal);
                        state.dispatch(DashboardAction::Fetched(refresh));
                    }
                    Err(AppError::Validation(e)) => {
                        state.dispatch(DashboardAction::FormRejected(e.to_string()));
                    }
                    Err(AppError::Api(e)) => {
                        report_failure(&e);
                        state.dispatch(DashboardAction::SaveFailed);
                    }
                }
            });
        })
    };

    let delete = {
        let state = state.clone();
        let token = token.clone();
        Callback::from(move |id: CompanyId| {
            let filters = state.filters.clone();
            let state = state.clone();
            let token = token.clone();
            spawn_local(async move {
                match CompanyViewModel::new().delete(&token, id, &filters, confirm).await {
                    Ok(Some(refresh)) => state.dispatch(DashboardAction::Fetched(refresh)),
                    Ok(None) => {}
                    Err(e) => report_failure(&e),
                }
            });
        })
    };

    UseCompaniesHandle {
        state,
        set_filter,
        open_create,
        open_edit,
        close_modal,
        save,
        delete,
    }
}
