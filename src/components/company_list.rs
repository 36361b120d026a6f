use yew::prelude::*;

use crate::models::{Company, CompanyId};

#[derive(Properties, PartialEq)]
pub struct CompanyListProps {
    pub companies: Vec<Company>,
    pub on_edit: Callback<Company>,
    pub on_delete: Callback<CompanyId>,
}

#[function_component(CompanyList)]
pub fn company_list(props: &CompanyListProps) -> Html {
    if props.companies.is_empty() {
        return html! { <p class="empty-state">{"Nenhuma empresa encontrada."}</p> };
    }

    let rows = props.companies.iter().map(|company| {
        let on_edit = {
            let cb = props.on_edit.clone();
            let company = company.clone();
            Callback::from(move |_: MouseEvent| cb.emit(company.clone()))
        };
        let on_delete = {
            let cb = props.on_delete.clone();
            let id = company.id;
            Callback::from(move |_: MouseEvent| cb.emit(id))
        };

        html! {
            <tr key={company.id.to_string()}>
                <td class="td-cell td-name">{company.name.clone()}</td>
                <td class="td-cell">{company.city.clone()}</td>
                <td class="td-cell">{company.sector.clone()}</td>
                <td class="td-cell">{company.contact_email.clone()}</td>
                <td class="td-cell">{company.registered_on_label()}</td>
                <td class="td-cell td-actions">
                    <button class="btn-link" onclick={on_edit}>{"Editar"}</button>
                    <button class="btn-link btn-danger" onclick={on_delete}>{"Excluir"}</button>
                </td>
            </tr>
        }
    });

    html! {
        <div class="table-wrapper">
            <table class="company-table">
                <thead>
                    <tr>
                        <th class="th-cell">{"Nome"}</th>
                        <th class="th-cell">{"Cidade"}</th>
                        <th class="th-cell">{"Ramo"}</th>
                        <th class="th-cell">{"Email"}</th>
                        <th class="th-cell">{"Registo"}</th>
                        <th class="th-cell">{"Ações"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for rows}
                </tbody>
            </table>
        </div>
    }
}
