// Utils compartidos

pub mod constants;
pub mod dialogs;
pub mod validation;

pub use constants::*;
pub use validation::ValidationError;
