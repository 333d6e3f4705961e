// Shared foundations: the league model, the league JSON reader, and run
// configuration.

pub mod config;
pub mod league_file;
pub mod model;

pub use model::{League, Matchup, MatchupType, Owner, OwnerId, Team, TeamId, Week, Year, YearSettings};
