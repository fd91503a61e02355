pub mod formatter;
pub mod validation;
