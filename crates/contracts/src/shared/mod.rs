pub mod patterns;
pub mod validation;
