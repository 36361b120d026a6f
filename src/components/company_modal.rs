// ============================================================================
// COMPANY MODAL - alta / edición de empresa
// ============================================================================
// CNPJ y email solo se muestran al crear: no son editables.
// ============================================================================

use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{CompanyForm, FormMode};

#[derive(Properties, PartialEq)]
pub struct CompanyModalProps {
    pub mode: FormMode,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub saving: bool,
    pub on_close: Callback<()>,
    pub on_save: Callback<CompanyForm>,
}

type FieldSetter = fn(&mut CompanyForm, String);

/// Edición de un campo; el reducer siempre parte del estado más reciente
pub struct FieldEdit(FieldSetter, String);

impl Reducible for CompanyForm {
    type Action = FieldEdit;

    fn reduce(self: Rc<Self>, FieldEdit(set, value): FieldEdit) -> Rc<Self> {
        let mut next = (*self).clone();
        set(&mut next, value);
        Rc::new(next)
    }
}

fn field_input(form: &UseReducerHandle<CompanyForm>, set: FieldSetter) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        form.dispatch(FieldEdit(set, input.value()));
    })
}

#[function_component(CompanyModal)]
pub fn company_modal(props: &CompanyModalProps) -> Html {
    let form = use_reducer(|| CompanyForm::for_mode(&props.mode));
    let editing = props.mode.is_editing();

    let on_submit = {
        let form = form.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit((*form).clone());
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let title = if editing { "Editar Empresa" } else { "Adicionar Nova Empresa" };

    html! {
        <div class="modal-backdrop">
            <div class="modal-content">
                <h2 class="modal-title">{title}</h2>
                <form class="modal-form" onsubmit={on_submit} novalidate=true>
                    <input
                        name="nome"
                        class="form-input"
                        placeholder="Nome da Empresa"
                        value={form.name.clone()}
                        oninput={field_input(&form, |f, v| f.name = v)}
                    />
                    <input
                        name="cidade"
                        class="form-input"
                        placeholder="Cidade"
                        value={form.city.clone()}
                        oninput={field_input(&form, |f, v| f.city = v)}
                    />
                    <input
                        name="ramo_atuacao"
                        class="form-input"
                        placeholder="Ramo de Atuação"
                        value={form.sector.clone()}
                        oninput={field_input(&form, |f, v| f.sector = v)}
                    />
                    <input
                        name="telefone"
                        class="form-input"
                        placeholder="Telefone"
                        value={form.phone.clone()}
                        oninput={field_input(&form, |f, v| f.phone = v)}
                    />

                    if !editing {
                        <input
                            name="cnpj"
                            class="form-input"
                            placeholder="CNPJ (14 dígitos)"
                            inputmode="numeric"
                            maxlength="14"
                            value={form.tax_id.clone()}
                            oninput={field_input(&form, |f, v| f.tax_id = v)}
                        />
                        <input
                            type="email"
                            name="email_contato"
                            class="form-input"
                            placeholder="Email de Contato"
                            value={form.contact_email.clone()}
                            oninput={field_input(&form, |f, v| f.contact_email = v)}
                        />
                    }

                    if let Some(error) = &props.error {
                        <div class="error-banner">{error.clone()}</div>
                    }

                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" onclick={on_cancel}>
                            {"Cancelar"}
                        </button>
                        <button type="submit" class="btn-primary" disabled={props.saving}>
                            {"Guardar"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
