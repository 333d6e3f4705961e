// Statistics engine: filter resolution, multi-week consolidation, the
// per-team calculators, and the year / all-time scope folds.

pub mod all_time;
pub mod awal;
pub mod consolidate;
pub mod error;
pub mod filters;
pub mod ledger;
pub mod numeric;
pub mod outcomes;
pub mod scoring;
pub mod season;
pub mod smart_wins;
pub mod ssl;
pub mod stat;
pub mod warning;
pub mod year;

#[cfg(test)]
mod testing;

pub use all_time::{AllTimeCalculator, OwnerCounts, OwnerStats};
pub use consolidate::{consolidate, effective_games, Consolidated, EffectiveGames};
pub use error::StatsError;
pub use filters::{filtered_matchups, AllTimeFilters, WeekFilters, YearFilters};
pub use ledger::{ScopeTotals, SeasonLedger, TeamLedger};
pub use season::Season;
pub use stat::{Stat, UnknownStat};
pub use warning::Warning;
pub use year::{TeamCounts, TeamStats, YearCalculator};
