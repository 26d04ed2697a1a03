pub mod fixture_import;
pub mod match_update;
pub mod roster;
pub mod standings;
