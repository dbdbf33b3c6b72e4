//! Data-transfer types shared by handlers, stores and tests.

mod category;
mod product;

pub use category::{Category, CategoryInput};
pub use product::{Product, ProductInput, ProductSummary};
