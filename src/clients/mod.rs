//! Client code for each family. Clients accept a factory trait object and an
//! output sink, and never name a concrete factory or product.

pub mod database_client;
pub mod furniture_client;

pub use database_client::*;
pub use furniture_client::*;
