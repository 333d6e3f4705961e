// Single-season scope: every team of one year under one filter.

use std::collections::BTreeMap;

use h2hstats_core::model::{League, TeamId, Year};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::StatsError;
use crate::filters::YearFilters;
use crate::ledger::{SeasonLedger, TeamLedger};
use crate::season::Season;
use crate::stat::Stat;
use crate::warning::Warning;

pub type TeamStats = BTreeMap<TeamId, Option<Decimal>>;
pub type TeamCounts = BTreeMap<TeamId, u32>;

/// Statistics for every team of one season.
///
/// The season view and all tallies are built once in the constructor; each
/// statistic is then a cheap derivation over the ledgers.
#[derive(Debug, Clone)]
pub struct YearCalculator<'a> {
    season: Season<'a>,
    ledger: SeasonLedger,
}

impl<'a> YearCalculator<'a> {
    pub fn new(league: &'a League, year_number: u32, filters: &YearFilters) -> Result<Self, StatsError> {
        let year = league
            .year(year_number)
            .ok_or(StatsError::UnknownYear(year_number))?;
        Self::for_year(year, filters)
    }

    pub fn for_year(year: &'a Year, filters: &YearFilters) -> Result<Self, StatsError> {
        let season = Season::new(year, filters.resolve(year)?)?;
        let ledger = SeasonLedger::tally(&season);
        debug!(
            "season {}: tallied {} teams",
            year.year_number,
            ledger.teams.len()
        );
        Ok(YearCalculator { season, ledger })
    }

    /// One value per roster team; `None` where the statistic has no value.
    pub fn compute(&self, stat: Stat) -> TeamStats {
        self.ledger
            .teams
            .iter()
            .map(|(id, l)| (id.clone(), stat.evaluate(l, &self.ledger.totals)))
            .collect()
    }

    pub fn games_played(&self) -> TeamCounts {
        self.counts(|l| l.games_played)
    }

    pub fn total_games(&self) -> TeamCounts {
        self.counts(|l| l.total_games)
    }

    pub fn wins(&self) -> TeamCounts {
        self.counts(|l| l.wins)
    }

    pub fn losses(&self) -> TeamCounts {
        self.counts(|l| l.losses)
    }

    pub fn ties(&self) -> TeamCounts {
        self.counts(|l| l.ties)
    }

    pub fn warnings(&self) -> &[Warning] {
        self.season.warnings()
    }

    pub fn season(&self) -> &Season<'a> {
        &self.season
    }

    fn counts(&self, field: impl Fn(&TeamLedger) -> u32) -> TeamCounts {
        self.ledger
            .teams
            .iter()
            .map(|(id, l)| (id.clone(), field(l)))
            .collect()
    }
}
