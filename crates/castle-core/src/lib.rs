//! Castle placement on one-dimensional integer topographies.

pub mod castles;
pub mod error;
pub mod scenarios;
pub mod topography;
pub mod trend;

pub use castles::{castle_sites, count_castles, CastleSite, SiteKind};
pub use error::ScenarioError;
pub use scenarios::{find_scenario, Scenario, SCENARIOS};
pub use topography::{Plateau, Topography};
pub use trend::Trend;
