//! Utils module split into submodules

mod errors;
mod splits;
mod validation;

pub use errors::UtilsError;
pub use splits::splits;
pub use validation::validate_digit_string;
