pub mod error;
pub mod fixtures;
pub mod loader;
pub mod plan;

pub use error::{Result, SeederError};
pub use loader::{SeedLoader, SeedSummary};
pub use plan::{SeedOptions, SeedPlan};
