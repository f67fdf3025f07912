pub mod aggregate;
pub mod form;

pub use aggregate::Invoice;
