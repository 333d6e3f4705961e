// Multi-season scope: every owner across a range of years.
//
// Each season is tallied on its own, then each owner's team ledger for that
// season is folded into the owner's ledger. Stats are derived once from the folded ledgers, so
// rates come out as Σnumerator / Σdenominator rather than an average of
// per-season rates.

use std::collections::BTreeMap;

use h2hstats_core::model::{League, OwnerId};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::StatsError;
use crate::filters::AllTimeFilters;
use crate::ledger::{ScopeTotals, SeasonLedger, TeamLedger};
use crate::season::Season;
use crate::stat::Stat;
use crate::warning::Warning;

pub type OwnerStats = BTreeMap<OwnerId, Option<Decimal>>;
pub type OwnerCounts = BTreeMap<OwnerId, u32>;

#[derive(Debug, Clone)]
pub struct AllTimeCalculator {
    seasons: Vec<u32>,
    owners: BTreeMap<OwnerId, TeamLedger>,
    totals: ScopeTotals,
    warnings: Vec<Warning>,
}

impl AllTimeCalculator {
    pub fn new(league: &League, filters: &AllTimeFilters) -> Result<Self, StatsError> {
        let mut owners: BTreeMap<OwnerId, TeamLedger> = league
            .owners
            .iter()
            .map(|o| (o.id.clone(), TeamLedger::default()))
            .collect();
        let mut totals = ScopeTotals::default();
        let mut warnings = Vec::new();
        let mut seasons = Vec::new();

        for (year, week_filters) in filters.resolve(league)? {
            let season = Season::new(year, week_filters)?;
            let tallied = SeasonLedger::tally(&season);
            for (owner_id, folded) in owners.iter_mut() {
                let ledger = year
                    .team_for_owner(owner_id)
                    .and_then(|team| tallied.teams.get(&team.id));
                if let Some(ledger) = ledger {
                    folded.absorb(ledger);
                }
            }
            totals.absorb(&tallied.totals);
            warnings.extend_from_slice(season.warnings());
            seasons.push(year.year_number);
        }

        debug!(
            "all-time: folded {} seasons into {} owners",
            seasons.len(),
            owners.len()
        );
        Ok(AllTimeCalculator {
            seasons,
            owners,
            totals,
            warnings,
        })
    }

    /// One value per owner; `None` where the owner has no games in scope.
    pub fn compute(&self, stat: Stat) -> OwnerStats {
        self.owners
            .iter()
            .map(|(id, l)| (id.clone(), stat.evaluate(l, &self.totals)))
            .collect()
    }

    pub fn games_played(&self) -> OwnerCounts {
        self.counts(|l| l.games_played)
    }

    pub fn total_games(&self) -> OwnerCounts {
        self.counts(|l| l.total_games)
    }

    pub fn wins(&self) -> OwnerCounts {
        self.counts(|l| l.wins)
    }

    pub fn losses(&self) -> OwnerCounts {
        self.counts(|l| l.losses)
    }

    pub fn ties(&self) -> OwnerCounts {
        self.counts(|l| l.ties)
    }

    /// Seasons included after filter resolution, in league order.
    pub fn seasons(&self) -> &[u32] {
        &self.seasons
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    fn counts(&self, field: impl Fn(&TeamLedger) -> u32) -> OwnerCounts {
        self.owners
            .iter()
            .map(|(id, l)| (id.clone(), field(l)))
            .collect()
    }
}
