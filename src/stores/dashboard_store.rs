// ============================================================================
// DASHBOARD STORE - lista de empresas, filtros y modal
// ============================================================================
// La lista es una copia transitoria: se sustituye entera en cada fetch OK.
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::error::ApiError;
use crate::models::{Company, CompanyFilters, FilterField, FormMode};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStore {
    pub companies: Vec<Company>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: CompanyFilters,
    /// `Some` mientras el modal está abierto
    pub modal: Option<FormMode>,
    pub form_error: Option<String>,
    pub saving: bool,
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self {
            companies: Vec::new(),
            // el primer fetch arranca al montar
            loading: true,
            error: None,
            filters: CompanyFilters::default(),
            modal: None,
            form_error: None,
            saving: false,
        }
    }
}

pub enum DashboardAction {
    FetchStarted,
    Fetched(Result<Vec<Company>, ApiError>),
    SetFilter(FilterField, String),
    OpenCreate,
    OpenEdit(Company),
    CloseModal,
    SaveStarted,
    FormRejected(String),
    /// Mutación rechazada por la API: el modal sigue abierto
    SaveFailed,
}

impl DashboardStore {
    /// La tabla solo se muestra sin carga ni error en curso
    pub fn shows_list(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DashboardAction::FetchStarted => {
                next.loading = true;
            }
            DashboardAction::Fetched(Ok(companies)) => {
                next.companies = companies;
                next.loading = false;
                next.error = None;
            }
            DashboardAction::Fetched(Err(e)) => {
                next.loading = false;
                next.error = Some(e.to_string());
            }
            DashboardAction::SetFilter(field, value) => {
                next.filters = next.filters.with(field, value);
            }
            DashboardAction::OpenCreate => {
                next.modal = Some(FormMode::Create);
                next.form_error = None;
                next.saving = false;
            }
            DashboardAction::OpenEdit(company) => {
                next.modal = Some(FormMode::Edit(company));
                next.form_error = None;
                next.saving = false;
            }
            DashboardAction::CloseModal => {
                next.modal = None;
                next.form_error = None;
                next.saving = false;
            }
            DashboardAction::SaveStarted => {
                next.saving = true;
                next.form_error = None;
            }
            DashboardAction::FormRejected(message) => {
                next.saving = false;
                next.form_error = Some(message);
            }
            DashboardAction::SaveFailed => {
                next.saving = false;
            }
        }
        Rc::new(next)
    }
}
