pub mod error;
pub mod fixtures;
pub mod traits;
pub mod validator;

pub use error::{ImporterError, Result};
pub use fixtures::CsvFixtureImporter;
pub use traits::{ImportContext, LeagueImporter};
pub use validator::{FixtureValidator, ValidationReport};
