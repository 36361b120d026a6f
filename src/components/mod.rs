pub mod app;
pub mod company_list;
pub mod company_modal;
pub mod dashboard;
pub mod filter_bar;
pub mod login_form;

pub use app::App;
pub use company_list::CompanyList;
pub use company_modal::CompanyModal;
pub use dashboard::Dashboard;
pub use filter_bar::FilterBar;
pub use login_form::LoginForm;
