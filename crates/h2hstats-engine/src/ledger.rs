// Per-team running totals.
//
// Each engine tallies its raw numerators and denominators into a TeamLedger.
// Every published statistic is derived from a ledger, so folding ledgers
// across seasons and deriving once gives Σnumerator / Σdenominator for rate
// statistics.

use std::collections::BTreeMap;

use h2hstats_core::model::TeamId;
use rust_decimal::Decimal;

use crate::season::Season;
use crate::{awal, outcomes, scoring, smart_wins};

/// Raw components for one team (or one owner, once folded).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamLedger {
    /// Effective games, multi-week contests counted once.
    pub games_played: u32,
    /// Effective games, doubled in seasons with league median games.
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// Actual results with tiebreakers applied: 1 per win, 0.5 per tie.
    pub resolved_wal: Decimal,
    pub league_median_wins: Decimal,
    pub opponent_league_median_wins: Decimal,
    /// Physical weeks with a qualifying matchup.
    pub weeks_played: u32,
    /// All-play comparative fractions, without median wins.
    pub awal: Decimal,
    pub opponent_awal: Decimal,
    /// Season-pool rank fractions, without median wins.
    pub smart_wins: Decimal,
    pub opponent_smart_wins: Decimal,
    pub points_scored: Decimal,
    pub opponent_points_scored: Decimal,
    /// Own score in each effective game.
    pub game_scores: Vec<Decimal>,
    /// Share of the week's league-wide points, per physical week.
    pub weekly_shares: Vec<Decimal>,
}

impl TeamLedger {
    /// Add another season's components to this one.
    pub fn absorb(&mut self, other: &TeamLedger) {
        self.games_played += other.games_played;
        self.total_games += other.total_games;
        self.wins += other.wins;
        self.losses += other.losses;
        self.ties += other.ties;
        self.resolved_wal += other.resolved_wal;
        self.league_median_wins += other.league_median_wins;
        self.opponent_league_median_wins += other.opponent_league_median_wins;
        self.weeks_played += other.weeks_played;
        self.awal += other.awal;
        self.opponent_awal += other.opponent_awal;
        self.smart_wins += other.smart_wins;
        self.opponent_smart_wins += other.opponent_smart_wins;
        self.points_scored += other.points_scored;
        self.opponent_points_scored += other.opponent_points_scored;
        self.game_scores.extend_from_slice(&other.game_scores);
        self.weekly_shares.extend_from_slice(&other.weekly_shares);
    }

    pub fn has_games(&self) -> bool {
        self.games_played > 0
    }
}

/// League-wide totals over the scope, used as share denominators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeTotals {
    pub points_scored: Decimal,
    pub opponent_points_scored: Decimal,
}

impl ScopeTotals {
    pub fn absorb(&mut self, other: &ScopeTotals) {
        self.points_scored += other.points_scored;
        self.opponent_points_scored += other.opponent_points_scored;
    }
}

pub type Ledgers = BTreeMap<TeamId, TeamLedger>;

/// Every team's ledger for one season plus the season totals.
#[derive(Debug, Clone, Default)]
pub struct SeasonLedger {
    pub teams: Ledgers,
    pub totals: ScopeTotals,
}

impl SeasonLedger {
    /// Run every engine over the season.
    pub fn tally(season: &Season<'_>) -> Self {
        let mut teams: Ledgers = season
            .team_ids()
            .map(|id| (id.to_string(), TeamLedger::default()))
            .collect();

        outcomes::tally(season, &mut teams);
        awal::tally(season, &mut teams);
        smart_wins::tally(season, &mut teams);
        let totals = scoring::tally(season, &mut teams);

        SeasonLedger { teams, totals }
    }
}

/// Mutable ledger for `team_id`, created on first touch.
///
/// Matchups only reference the season's own teams, so in practice the entry
/// already exists.
pub(crate) fn entry<'l>(ledgers: &'l mut Ledgers, team_id: &str) -> &'l mut TeamLedger {
    ledgers.entry(team_id.to_string()).or_default()
}
