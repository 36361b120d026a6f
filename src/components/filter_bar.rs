use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{CompanyFilters, FilterField};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filters: CompanyFilters,
    pub on_change: Callback<(FilterField, String)>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let input_for = |field: FilterField, placeholder: &'static str| {
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        });
        html! {
            <input
                type="text"
                name={field.query_key()}
                class="form-input"
                placeholder={placeholder}
                value={props.filters.get(field).to_string()}
                {oninput}
            />
        }
    };

    html! {
        <div class="filter-grid">
            {input_for(FilterField::Name, "Buscar por nome...")}
            {input_for(FilterField::City, "Filtrar por cidade...")}
            {input_for(FilterField::Sector, "Filtrar por ramo...")}
        </div>
    }
}
