// ============================================================================
// COMPANY VIEWMODEL - LISTADO Y MUTACIONES DE EMPRESAS
// ============================================================================
// Tras cada mutación exitosa se vuelve a pedir la lista al servidor con los
// filtros actuales. La lista local nunca se edita a mano.
// ============================================================================

use crate::error::{ApiError, AppError};
use crate::models::{Company, CompanyFilters, CompanyForm, CompanyId, CompanyPayload, FormMode};
use crate::services::{ApiClient, CompanyApi};

pub const CONFIRM_DELETE_MESSAGE: &str = "Tem a certeza de que deseja excluir esta empresa?";

/// Resultado del re-fetch posterior a una mutación
pub type Refresh = Result<Vec<Company>, ApiError>;

pub struct CompanyViewModel<A = ApiClient> {
    api: A,
}

impl CompanyViewModel {
    pub fn new() -> Self {
        Self::with(ApiClient::new())
    }
}

impl Default for CompanyViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: CompanyApi> CompanyViewModel<A> {
    pub fn with(api: A) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, token: &str, filters: &CompanyFilters) -> Refresh {
        self.api.list_companies(token, filters).await
    }

    /// Valida el formulario, crea o actualiza y refresca la lista.
    /// Un formulario inválido no genera ninguna petición.
    pub async fn save(
        &self,
        token: &str,
        form: &CompanyForm,
        mode: &FormMode,
        filters: &CompanyFilters,
    ) -> Result<Refresh, AppError> {
        let payload = form.validate(mode).map_err(|e| {
            log::info!("📝 [EMPRESAS] Formulario rechazado: {}", e);
            e
        })?;

        match payload {
            CompanyPayload::Create(new_company) => {
                let created = self.api.create_company(token, &new_company).await?;
                log::info!("✅ [EMPRESAS] Empresa creada: {}", created.id);
            }
            CompanyPayload::Update(id, update) => {
                self.api.update_company(token, id, &update).await?;
                log::info!("✅ [EMPRESAS] Empresa {} actualizada", id);
            }
        }

        Ok(self.fetch(token, filters).await)
    }

    /// Pide confirmación y, solo si se acepta, elimina y refresca.
    /// `Ok(None)`: el usuario canceló y no se hizo ninguna petición.
    pub async fn delete(
        &self,
        token: &str,
        id: CompanyId,
        filters: &CompanyFilters,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<Option<Refresh>, ApiError> {
        if !confirm(CONFIRM_DELETE_MESSAGE) {
            log::info!("↩️ [EMPRESAS] Eliminación de {} cancelada", id);
            return Ok(None);
        }
        self.api.delete_company(token, id).await?;
        log::info!("✅ [EMPRESAS] Empresa {} eliminada", id);
        Ok(Some(self.fetch(token, filters).await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::company::tests::sample_company;
    use crate::models::FilterField;
    use crate::utils::validation::ValidationError;
    use crate::viewmodels::fakes::FakeCompanyApi;
    use futures::executor::block_on;

    const TOKEN: &str = "tok-123";

    fn new_form(name: &str) -> CompanyForm {
        CompanyForm {
            name: name.to_string(),
            tax_id: "11222333000181".to_string(),
            city: "Salvador".to_string(),
            sector: "Varejo".to_string(),
            phone: "71 3333-3333".to_string(),
            contact_email: "contato@acme.com".to_string(),
        }
    }

    #[test]
    fn create_then_refetch_reflects_server() {
        let api = FakeCompanyApi::with_companies(TOKEN, vec![sample_company(1, "Ecomp Jr.")]);
        let vm = CompanyViewModel::with(api.clone());

        let refreshed = block_on(vm.save(
            TOKEN,
            &new_form("Acme"),
            &FormMode::Create,
            &CompanyFilters::default(),
        ))
        .unwrap()
        .unwrap();

        let names: Vec<_> = refreshed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ecomp Jr.", "Acme"]);
        assert_eq!(api.list_calls(), 1);
    }

    #[test]
    fn update_then_refetch_reflects_server() {
        let original = sample_company(1, "Antiga");
        let api = FakeCompanyApi::with_companies(TOKEN, vec![original.clone()]);
        let vm = CompanyViewModel::with(api.clone());
        let mode = FormMode::Edit(original.clone());
        let mut form = CompanyForm::for_mode(&mode);
        form.name = "Renovada".to_string();

        let refreshed = block_on(vm.save(TOKEN, &form, &mode, &CompanyFilters::default()))
            .unwrap()
            .unwrap();

        assert_eq!(refreshed.len(), 1);
        assert_eq!(refreshed[0].name, "Renovada");
        assert_eq!(refreshed[0].tax_id, original.tax_id);
        assert_eq!(refreshed[0].contact_email, original.contact_email);
    }

    #[test]
    fn delete_then_refetch_reflects_server() {
        let api = FakeCompanyApi::with_companies(
            TOKEN,
            vec![sample_company(1, "Uma"), sample_company(2, "Outra")],
        );
        let vm = CompanyViewModel::with(api.clone());

        let refreshed = block_on(vm.delete(TOKEN, CompanyId(1), &CompanyFilters::default(), |_| true))
            .unwrap()
            .expect("confirmed delete refetches")
            .unwrap();

        assert_eq!(refreshed.len(), 1);
        assert_eq!(refreshed[0].id, CompanyId(2));
    }

    #[test]
    fn invalid_cnpj_is_not_submitted() {
        let api = FakeCompanyApi::with_companies(TOKEN, Vec::new());
        let vm = CompanyViewModel::with(api.clone());
        let mut form = new_form("Acme");
        form.tax_id = "123".to_string();

        let err = block_on(vm.save(TOKEN, &form, &FormMode::Create, &CompanyFilters::default()))
            .unwrap_err();

        assert_eq!(err, AppError::Validation(ValidationError::InvalidCnpj));
        assert_eq!(api.mutation_calls(), 0);
        assert_eq!(api.list_calls(), 0);
    }

    #[test]
    fn create_rejection_surfaces_server_detail() {
        let api = FakeCompanyApi::with_companies(TOKEN, vec![sample_company(1, "Ecomp Jr.")]);
        let vm = CompanyViewModel::with(api.clone());
        let mut form = new_form("Clone");
        form.tax_id = "12345678000195".to_string();

        let err = block_on(vm.save(TOKEN, &form, &FormMode::Create, &CompanyFilters::default()))
            .unwrap_err();

        assert_eq!(err.to_string(), "CNPJ já registado.");
        assert_eq!(api.list_calls(), 0);
    }

    #[test]
    fn name_filter_is_passed_through() {
        let api = FakeCompanyApi::with_companies(
            TOKEN,
            vec![sample_company(1, "Acme Ltda"), sample_company(2, "Ecomp Jr.")],
        );
        let vm = CompanyViewModel::with(api.clone());
        let filters = CompanyFilters::default().with(FilterField::Name, "Acme");

        let companies = block_on(vm.fetch(TOKEN, &filters)).unwrap();

        assert_eq!(api.last_query(), vec![("nome".to_string(), "Acme".to_string())]);
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].name, "Acme Ltda");
    }

    #[test]
    fn expired_token_is_a_generic_fetch_failure() {
        let api = FakeCompanyApi::with_companies(TOKEN, vec![sample_company(1, "Acme")]);
        let vm = CompanyViewModel::with(api);

        let err = block_on(vm.fetch("expirado", &CompanyFilters::default())).unwrap_err();

        assert_eq!(err, ApiError::FetchFailed);
    }

    #[test]
    fn failed_delete_skips_refetch() {
        let api = FakeCompanyApi::with_companies(TOKEN, vec![sample_company(1, "Acme")]);
        let vm = CompanyViewModel::with(api.clone());

        let err = block_on(vm.delete(TOKEN, CompanyId(99), &CompanyFilters::default(), |_| true))
            .unwrap_err();

        assert_eq!(err, ApiError::DeleteFailed);
        assert_eq!(api.list_calls(), 0);
    }

    #[test]
    fn declined_confirmation_sends_nothing() {
        let api = FakeCompanyApi::with_companies(TOKEN, vec![sample_company(1, "Acme")]);
        let vm = CompanyViewModel::with(api.clone());
        let mut asked = None;

        let outcome = block_on(vm.delete(TOKEN, CompanyId(1), &CompanyFilters::default(), |msg| {
            asked = Some(msg.to_string());
            false
        }))
        .unwrap();

        assert!(outcome.is_none());
        assert_eq!(asked.as_deref(), Some(CONFIRM_DELETE_MESSAGE));
        assert_eq!(api.mutation_calls(), 0);
        assert_eq!(api.list_calls(), 0);
    }
}
