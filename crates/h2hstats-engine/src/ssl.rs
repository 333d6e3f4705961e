// Team Score / Team Success / Team Luck.
//
//   Team Score   = 100 * AWAL per game     + 2 * scoring share + (max weekly share + min weekly share) / 2
//   Team Success = 100 * win percentage    + 2 * scoring share + (max weekly share + min weekly share) / 2
//   Team Luck    = Team Score - Team Success
//
// The scoring terms cancel in luck, which reduces to 100 * (AWAL per game -
// win percentage). Over a scope where every team plays the same number of
// games both rates average one half, so luck sums to zero.

use rust_decimal::Decimal;

use crate::awal::awal_per_game;
use crate::ledger::{ScopeTotals, TeamLedger};
use crate::outcomes::win_percentage;
use crate::scoring::{max_scoring_share, min_scoring_share, scoring_share};

const RATE_WEIGHT: Decimal = Decimal::ONE_HUNDRED;
const SHARE_WEIGHT: Decimal = Decimal::TWO;

/// The scoring terms shared by Team Score and Team Success.
fn scoring_component(ledger: &TeamLedger, totals: &ScopeTotals) -> Option<Decimal> {
    let share = scoring_share(ledger, totals)?;
    let spread = max_scoring_share(ledger)? + min_scoring_share(ledger)?;
    Some(SHARE_WEIGHT * share + spread / Decimal::TWO)
}

/// How good the team's scores were, independent of who it played.
pub fn team_score(ledger: &TeamLedger, totals: &ScopeTotals) -> Option<Decimal> {
    Some(RATE_WEIGHT * awal_per_game(ledger)? + scoring_component(ledger, totals)?)
}

/// How the team actually fared in its games.
pub fn team_success(ledger: &TeamLedger, totals: &ScopeTotals) -> Option<Decimal> {
    Some(RATE_WEIGHT * win_percentage(ledger)? + scoring_component(ledger, totals)?)
}

/// Team Score minus Team Success, taken from the rates alone.
pub fn team_luck(ledger: &TeamLedger, totals: &ScopeTotals) -> Option<Decimal> {
    scoring_component(ledger, totals)?;
    Some(RATE_WEIGHT * (awal_per_game(ledger)? - win_percentage(ledger)?))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
