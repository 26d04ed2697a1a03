mod fixture;
mod league;
mod standing;
mod team;

pub use fixture::{Match, MatchStatus, MatchUpdate, NewMatch};
pub use league::{DEFAULT_COUNTRY, League};
pub use standing::StandingRow;
pub use team::Team;
