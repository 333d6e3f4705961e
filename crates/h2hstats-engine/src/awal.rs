// AWAL: each week, a team's score is compared with every other qualifying
// score that week. Beating a score is worth 1, matching it 0.5, and the
// week's total is divided by the number of other scores. A multi-week
// contest is averaged over its legs so it adds at most one.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::ledger::{entry, Ledgers, TeamLedger};
use crate::numeric::ratio;
use crate::season::{Season, WeekSlate};

/// Each team's comparative fraction for one week.
///
/// With n teams in the week the fractions sum to n / 2.
pub fn week_fractions<'a>(slate: &WeekSlate<'a>) -> HashMap<&'a str, Decimal> {
    let scores = slate.scores();
    let others = scores.len().saturating_sub(1);
    let mut fractions = HashMap::with_capacity(scores.len());
    if others == 0 {
        return fractions;
    }
    let denominator = Decimal::from(2 * others);
    for &(team, score) in &scores {
        let beaten = scores.iter().filter(|(_, s)| *s < score).count();
        // Minus one for the team's own score.
        let matched = scores.iter().filter(|(_, s)| *s == score).count() - 1;
        fractions.insert(team, Decimal::from(2 * beaten + matched) / denominator);
    }
    fractions
}

pub(crate) fn tally(season: &Season<'_>, ledgers: &mut Ledgers) {
    for slate in season.slates() {
        let fractions = week_fractions(slate);
        let fraction = |team: &str| fractions.get(team).copied().unwrap_or_default();
        for m in &slate.matchups {
            let weight = season.leg_weight(m);
            for team in [&m.team_a_id, &m.team_b_id] {
                let theirs = m.opponent_of(team).map(fraction).unwrap_or_default();
                let ledger = entry(ledgers, team);
                ledger.weeks_played += 1;
                ledger.awal += weight * fraction(team.as_str());
                ledger.opponent_awal += weight * theirs;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Derived statistics
// ---------------------------------------------------------------------------

/// Comparative fractions plus whole median wins. `None` without a qualifying week.
pub fn awal(ledger: &TeamLedger) -> Option<Decimal> {
    (ledger.weeks_played > 0).then(|| ledger.awal + ledger.league_median_wins)
}

pub fn awal_per_game(ledger: &TeamLedger) -> Option<Decimal> {
    ratio(awal(ledger)?, ledger.total_games)
}

/// The same measure for whoever the team faced each week.
pub fn opponent_awal(ledger: &TeamLedger) -> Option<Decimal> {
    (ledger.weeks_played > 0).then(|| ledger.opponent_awal + ledger.opponent_league_median_wins)
}

pub fn opponent_awal_per_game(ledger: &TeamLedger) -> Option<Decimal> {
    ratio(opponent_awal(ledger)?, ledger.total_games)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::WeekFilters;
    use crate::ledger::SeasonLedger;
    use crate::testing;
    use h2hstats_core::model::{Matchup, Year};
    use rust_decimal_macros::dec;

    fn ledgers(year: &Year) -> Ledgers {
        let season = Season::new(year, WeekFilters::whole_season(year)).unwrap();
        SeasonLedger::tally(&season).teams
    }

    fn per_team<F>(l: &Ledgers, count: usize, f: F) -> Vec<Option<Decimal>>
    where
        F: Fn(&TeamLedger) -> Option<Decimal>,
    {
        testing::team_ids(count).iter().map(|t| f(&l[t])).collect()
    }

    #[test]
    fn six_team_awal() {
        let l = ledgers(&testing::six_team_year(false));
        assert_eq!(
            per_team(&l, 6, awal),
            vec![
                Some(dec!(0)),
                Some(dec!(0.6)),
                Some(dec!(1.2)),
                Some(dec!(2.1)),
                Some(dec!(2.1)),
                Some(dec!(3)),
            ]
        );
    }

    #[test]
    fn six_team_awal_per_game_with_median_games() {
        let l = ledgers(&testing::six_team_year(true));
        assert_eq!(
            per_team(&l, 6, awal_per_game),
            vec![
                Some(dec!(0)),
                Some(dec!(0.1)),
                Some(dec!(0.2)),
                Some(dec!(0.85)),
                Some(dec!(0.85)),
                Some(dec!(1)),
            ]
        );
    }

    #[test]
    fn week_fractions_sum_to_half_the_field() {
        let year = testing::year(
            2020,
            6,
            vec![testing::paired_week(&[
                dec!(88.5),
                dec!(101.25),
                dec!(88.5),
                dec!(120),
                dec!(101.25),
                dec!(75),
            ])],
            false,
        );
        let season = Season::new(&year, WeekFilters::whole_season(&year)).unwrap();
        let fractions = week_fractions(&season.slates()[0]);
        let total: Decimal = fractions.values().copied().sum();
        assert_eq!(total, dec!(3));
        // Beats 75, matches the other 88.5: (1 + 0.5) / 5.
        assert_eq!(fractions["t0"], dec!(0.3));
        assert_eq!(fractions["t1"], dec!(0.7));
        assert_eq!(fractions["t3"], dec!(1));
        assert_eq!(fractions["t5"], dec!(0));
    }

    #[test]
    fn opponent_awal_mirrors_the_schedule() {
        let l = ledgers(&testing::six_team_year(false));
        // t0 faced t1 all three weeks.
        assert_eq!(opponent_awal(&l["t0"]), awal(&l["t1"]));
        assert_eq!(opponent_awal(&l["t5"]), awal(&l["t4"]));
        assert_eq!(opponent_awal_per_game(&l["t5"]), Some(dec!(0.7)));
    }

    #[test]
    fn team_without_weeks_has_no_awal() {
        let year = testing::year(
            2020,
            3,
            vec![vec![Matchup::new("t0", "t1", dec!(1), dec!(2))]],
            false,
        );
        let l = ledgers(&year);
        assert_eq!(awal(&l["t2"]), None);
        assert_eq!(awal_per_game(&l["t2"]), None);
        assert_eq!(awal(&l["t1"]), Some(dec!(1)));
    }
}
