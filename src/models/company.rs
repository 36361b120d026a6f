use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::utils::validation::{is_valid_cnpj, is_valid_email, require, ValidationError};

/// Identificador opaco asignado por el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub i64);

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Empresa tal como la devuelve la API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cnpj")]
    pub tax_id: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "ramo_atuacao")]
    pub sector: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "email_contato")]
    pub contact_email: String,
    #[serde(rename = "data_cadastro", default)]
    pub registered_at: Option<String>,
}

impl Company {
    /// Fecha de registro. El backend manda timestamps sin zona horaria,
    /// así que se aceptan ambos formatos.
    pub fn registered_on(&self) -> Option<NaiveDate> {
        let raw = self.registered_at.as_deref()?.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        raw.parse::<NaiveDateTime>().ok().map(|dt| dt.date())
    }

    pub fn registered_on_label(&self) -> String {
        self.registered_on()
            .map(|date| date.format("%d/%m/%Y").to_string())
            .unwrap_or_default()
    }
}

/// Cuerpo de `POST /empresas/` (todos los campos)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCompany {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cnpj")]
    pub tax_id: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "ramo_atuacao")]
    pub sector: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "email_contato")]
    pub contact_email: String,
}

/// Cuerpo de `PUT /empresas/{id}`. CNPJ y email no se editan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyUpdate {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "ramo_atuacao")]
    pub sector: String,
    #[serde(rename = "telefone")]
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Name,
    City,
    Sector,
}

impl FilterField {
    pub fn query_key(self) -> &'static str {
        match self {
            FilterField::Name => "nome",
            FilterField::City => "cidade",
            FilterField::Sector => "ramo_atuacao",
        }
    }
}

/// Filtros del listado. Un filtro vacío no se envía.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilters {
    pub name: String,
    pub city: String,
    pub sector: String,
}

impl CompanyFilters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::City => &self.city,
            FilterField::Sector => &self.sector,
        }
    }

    pub fn with(&self, field: FilterField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            FilterField::Name => &mut next.name,
            FilterField::City => &mut next.city,
            FilterField::Sector => &mut next.sector,
        };
        *slot = value.into();
        next
    }

    /// Parámetros de query activos, sin modificar el valor tecleado
    pub fn active_params(&self) -> Vec<(&'static str, &str)> {
        [FilterField::Name, FilterField::City, FilterField::Sector]
            .into_iter()
            .map(|field| (field.query_key(), self.get(field)))
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(Company),
}

impl FormMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Valores crudos del formulario del modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyForm {
    pub name: String,
    pub tax_id: String,
    pub city: String,
    pub sector: String,
    pub phone: String,
    pub contact_email: String,
}

impl CompanyForm {
    pub fn for_mode(mode: &FormMode) -> Self {
        match mode {
            FormMode::Create => Self::default(),
            FormMode::Edit(company) => Self {
                name: company.name.clone(),
                tax_id: company.tax_id.clone(),
                city: company.city.clone(),
                sector: company.sector.clone(),
                phone: company.phone.clone(),
                contact_email: company.contact_email.clone(),
            },
        }
    }

    /// Valida y construye el cuerpo a enviar según el modo
    pub fn validate(&self, mode: &FormMode) -> Result<CompanyPayload, ValidationError> {
        require("Nome da Empresa", &self.name)?;
        require("Cidade", &self.city)?;
        require("Ramo de Atuação", &self.sector)?;
        require("Telefone", &self.phone)?;

        match mode {
            FormMode::Create => {
                if !is_valid_cnpj(&self.tax_id) {
                    return Err(ValidationError::InvalidCnpj);
                }
                if !is_valid_email(&self.contact_email) {
                    return Err(ValidationError::InvalidEmail);
                }
                Ok(CompanyPayload::Create(NewCompany {
                    name: self.name.clone(),
                    tax_id: self.tax_id.clone(),
                    city: self.city.clone(),
                    sector: self.sector.clone(),
                    phone: self.phone.clone(),
                    contact_email: self.contact_email.clone(),
                }))
            }
            FormMode::Edit(company) => Ok(CompanyPayload::Update(
                company.id,
                CompanyUpdate {
                    name: self.name.clone(),
                    city: self.city.clone(),
                    sector: self.sector.clone(),
                    phone: self.phone.clone(),
                },
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompanyPayload {
    Create(NewCompany),
    Update(CompanyId, CompanyUpdate),
}
