#![forbid(unsafe_code)]

pub mod access;
pub mod catalog;
pub mod chart;
pub mod model;
pub mod quiz;
pub mod search;

pub use access::{AccessState, IdentityUser};
pub use catalog::{Catalog, CatalogError};
pub use chart::ChartSeries;
pub use quiz::QuizFeedback;
pub use search::{SearchQuery, Searchable};
