pub mod company_viewmodel;
pub mod session_viewmodel;

#[cfg(test)]
pub(crate) mod fakes;

pub use company_viewmodel::{CompanyViewModel, Refresh};
pub use session_viewmodel::SessionViewModel;
