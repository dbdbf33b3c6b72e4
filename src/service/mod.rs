//! Request-level rules that sit between extraction and the store.

mod validation;
pub use validation::RequestValidator;
