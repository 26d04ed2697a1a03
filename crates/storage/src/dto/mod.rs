pub mod common;
pub mod fixture;
pub mod health;
pub mod league;
pub mod roster;
pub mod team;
