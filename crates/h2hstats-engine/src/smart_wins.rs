// Smart Wins: each score is ranked against every qualifying score posted in
// the season, not just that week's. A score earns the fraction of the other
// season scores it beats, with matches worth half. Legs of a multi-week
// contest are averaged so the contest counts once.
//
// This is the season-rank signal on its own. Weekly all-play (AWAL) and
// actual results stay separate stats; Team Score and Team Success combine
// them.

use rust_decimal::Decimal;

use crate::ledger::{entry, Ledgers, TeamLedger};
use crate::numeric::ratio;
use crate::season::Season;

/// Sorted pool of every qualifying score in a season.
#[derive(Debug, Clone)]
pub struct ScorePool {
    sorted: Vec<Decimal>,
}

impl ScorePool {
    pub fn from_season(season: &Season<'_>) -> Self {
        let mut sorted: Vec<Decimal> = season
            .slates()
            .iter()
            .flat_map(|slate| slate.scores().into_iter().map(|(_, s)| s))
            .collect();
        sorted.sort();
        ScorePool { sorted }
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Rank fraction of a score that is itself in the pool.
    pub fn fraction(&self, score: Decimal) -> Decimal {
        let others = self.sorted.len().saturating_sub(1);
        if others == 0 {
            return Decimal::ZERO;
        }
        let below = self.sorted.partition_point(|s| *s < score);
        let through = self.sorted.partition_point(|s| *s <= score);
        let matched = (through - below).saturating_sub(1);
        Decimal::from(2 * below + matched) / Decimal::from(2 * others)
    }
}

pub(crate) fn tally(season: &Season<'_>, ledgers: &mut Ledgers) {
    let pool = ScorePool::from_season(season);
    for slate in season.slates() {
        for m in &slate.matchups {
            let weight = season.leg_weight(m);
            for team in [&m.team_a_id, &m.team_b_id] {
                let (Some(own), Some(theirs)) = (m.score_for(team), m.opponent_score_for(team))
                else {
                    continue;
                };
                let ledger = entry(ledgers, team);
                ledger.smart_wins += weight * pool.fraction(own);
                ledger.opponent_smart_wins += weight * pool.fraction(theirs);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Derived statistics
// ---------------------------------------------------------------------------

/// Season rank fractions plus whole median wins. `None` without a qualifying week.
pub fn smart_wins(ledger: &TeamLedger) -> Option<Decimal> {
    (ledger.weeks_played > 0).then(|| ledger.smart_wins + ledger.league_median_wins)
}

pub fn smart_wins_per_game(ledger: &TeamLedger) -> Option<Decimal> {
    ratio(smart_wins(ledger)?, ledger.total_games)
}

pub fn opponent_smart_wins(ledger: &TeamLedger) -> Option<Decimal> {
    (ledger.weeks_played > 0)
        .then(|| ledger.opponent_smart_wins + ledger.opponent_league_median_wins)
}

pub fn opponent_smart_wins_per_game(ledger: &TeamLedger) -> Option<Decimal> {
    ratio(opponent_smart_wins(ledger)?, ledger.total_games)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
