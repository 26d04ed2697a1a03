pub mod fixtures;
pub mod health;
pub mod leagues;
pub mod matches;
pub mod roster;
pub mod standings;
pub mod teams;
