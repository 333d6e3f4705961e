// Game outcomes: records, tiebreaker-resolved WAL, and league median wins.
//
// Median results are taken per physical week; the legs of a multi-week
// contest share one median game between them.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::ledger::{entry, Ledgers, TeamLedger};
use crate::numeric::{median, ratio};
use crate::season::Season;

const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Score a team's result against the weekly median: 1 above, 0.5 level, 0 below.
fn median_outcome(score: Decimal, median: Decimal) -> Decimal {
    match score.cmp(&median) {
        Ordering::Greater => Decimal::ONE,
        Ordering::Equal => HALF,
        Ordering::Less => Decimal::ZERO,
    }
}

pub(crate) fn tally(season: &Season<'_>, ledgers: &mut Ledgers) {
    let games_per_game = if season.league_median_games() { 2 } else { 1 };

    for game in season.games() {
        let sides = [
            (&game.team_a_id, game.team_a_score, &game.team_b_id, game.team_b_score),
            (&game.team_b_id, game.team_b_score, &game.team_a_id, game.team_a_score),
        ];
        for (team, own, opponent, theirs) in sides {
            let ledger = entry(ledgers, team);
            ledger.games_played += 1;
            ledger.total_games += games_per_game;
            match own.cmp(&theirs) {
                Ordering::Greater => {
                    ledger.wins += 1;
                    ledger.resolved_wal += Decimal::ONE;
                }
                Ordering::Less => ledger.losses += 1,
                Ordering::Equal => {
                    ledger.ties += 1;
                    if game.has_tiebreaker_for(team) {
                        ledger.resolved_wal += Decimal::ONE;
                    } else if !game.has_tiebreaker_for(opponent) {
                        ledger.resolved_wal += HALF;
                    }
                }
            }
        }
    }

    if !season.league_median_games() {
        return;
    }
    for slate in season.slates() {
        let scores: Vec<Decimal> = slate.scores().into_iter().map(|(_, s)| s).collect();
        let Some(week_median) = median(&scores) else {
            continue;
        };
        for m in &slate.matchups {
            let weight = season.leg_weight(m);
            let a = weight * median_outcome(m.team_a_score, week_median);
            let b = weight * median_outcome(m.team_b_score, week_median);
            let ledger = entry(ledgers, &m.team_a_id);
            ledger.league_median_wins += a;
            ledger.opponent_league_median_wins += b;
            let ledger = entry(ledgers, &m.team_b_id);
            ledger.league_median_wins += b;
            ledger.opponent_league_median_wins += a;
        }
    }
}

// ---------------------------------------------------------------------------
// Derived statistics
// ---------------------------------------------------------------------------

/// Actual results plus median wins. `None` without games.
pub fn wal(ledger: &TeamLedger) -> Option<Decimal> {
    ledger
        .has_games()
        .then(|| ledger.resolved_wal + ledger.league_median_wins)
}

/// WAL over total games (median games double the denominator).
pub fn win_percentage(ledger: &TeamLedger) -> Option<Decimal> {
    ratio(wal(ledger)?, ledger.total_games)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
