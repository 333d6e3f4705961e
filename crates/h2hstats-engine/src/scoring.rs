// Scoring aggregates: points for and against, extremes, league shares and
// dispersion.

use rust_decimal::Decimal;

use crate::ledger::{entry, Ledgers, ScopeTotals, TeamLedger};
use crate::numeric::{population_std_dev, ratio, share};
use crate::season::Season;

/// Tally points from the effective games and weekly shares from the physical
/// weeks. Returns the season's league-wide totals.
pub(crate) fn tally(season: &Season<'_>, ledgers: &mut Ledgers) -> ScopeTotals {
    let mut totals = ScopeTotals::default();

    for game in season.games() {
        for (team, own, theirs) in [
            (&game.team_a_id, game.team_a_score, game.team_b_score),
            (&game.team_b_id, game.team_b_score, game.team_a_score),
        ] {
            let ledger = entry(ledgers, team);
            ledger.points_scored += own;
            ledger.opponent_points_scored += theirs;
            ledger.game_scores.push(own);
            totals.points_scored += own;
            totals.opponent_points_scored += theirs;
        }
    }

    for slate in season.slates() {
        let scores = slate.scores();
        let week_total: Decimal = scores.iter().map(|(_, s)| *s).sum();
        for (team, score) in scores {
            entry(ledgers, team).weekly_shares.push(share(score, week_total));
        }
    }

    totals
}

// ---------------------------------------------------------------------------
// Derived statistics
// ---------------------------------------------------------------------------

pub fn points_scored(ledger: &TeamLedger) -> Option<Decimal> {
    ledger.has_games().then_some(ledger.points_scored)
}

pub fn points_scored_per_game(ledger: &TeamLedger) -> Option<Decimal> {
    ratio(ledger.points_scored, ledger.games_played)
}

pub fn opponent_points_scored(ledger: &TeamLedger) -> Option<Decimal> {
    ledger.has_games().then_some(ledger.opponent_points_scored)
}

pub fn opponent_points_scored_per_game(ledger: &TeamLedger) -> Option<Decimal> {
    ratio(ledger.opponent_points_scored, ledger.games_played)
}

/// Points scored minus points allowed.
pub fn plus_minus(ledger: &TeamLedger) -> Option<Decimal> {
    ledger
        .has_games()
        .then(|| ledger.points_scored - ledger.opponent_points_scored)
}

pub fn max_score(ledger: &TeamLedger) -> Option<Decimal> {
    ledger.game_scores.iter().max().copied()
}

pub fn min_score(ledger: &TeamLedger) -> Option<Decimal> {
    ledger.game_scores.iter().min().copied()
}

/// Percentage of all points scored in scope.
pub fn scoring_share(ledger: &TeamLedger, totals: &ScopeTotals) -> Option<Decimal> {
    ledger
        .has_games()
        .then(|| share(ledger.points_scored, totals.points_scored))
}

pub fn opponent_scoring_share(ledger: &TeamLedger, totals: &ScopeTotals) -> Option<Decimal> {
    ledger
        .has_games()
        .then(|| share(ledger.opponent_points_scored, totals.opponent_points_scored))
}

/// Best single-week share of the league's points.
pub fn max_scoring_share(ledger: &TeamLedger) -> Option<Decimal> {
    ledger.weekly_shares.iter().max().copied()
}

pub fn min_scoring_share(ledger: &TeamLedger) -> Option<Decimal> {
    ledger.weekly_shares.iter().min().copied()
}

pub fn scoring_standard_deviation(ledger: &TeamLedger) -> Option<Decimal> {
    population_std_dev(&ledger.game_scores)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
