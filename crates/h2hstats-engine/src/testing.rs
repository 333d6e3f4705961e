// Builders shared by the unit tests.

use h2hstats_core::model::{League, Matchup, Owner, Team, Week, Year, YearSettings};
use rust_decimal::Decimal;

/// Team ids are `t{n}` owned by `o{n}` for n in 0..count.
pub fn team_ids(count: usize) -> Vec<String> {
    (0..count).map(|n| format!("t{n}")).collect()
}

pub fn year(year_number: u32, team_count: usize, weeks: Vec<Vec<Matchup>>, median: bool) -> Year {
    Year {
        year_number,
        teams: (0..team_count)
            .map(|n| Team {
                id: format!("t{n}"),
                owner_id: format!("o{n}"),
                name: format!("Team {n}"),
            })
            .collect(),
        weeks: weeks
            .into_iter()
            .enumerate()
            .map(|(i, matchups)| Week::new(i as u32 + 1, matchups))
            .collect(),
        settings: YearSettings {
            league_median_games: median,
        },
    }
}

pub fn league(owner_count: usize, years: Vec<Year>) -> League {
    League {
        name: "Test League".into(),
        owners: (0..owner_count)
            .map(|n| Owner {
                id: format!("o{n}"),
                name: format!("Owner {n}"),
            })
            .collect(),
        years,
    }
}

/// One week pairing t0-t1, t2-t3, ... with the given per-team scores.
pub fn paired_week(scores: &[Decimal]) -> Vec<Matchup> {
    scores
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| Matchup::new(format!("t{}", 2 * i), format!("t{}", 2 * i + 1), pair[0], pair[1]))
        .collect()
}

/// Six teams, three identical regular-season weeks, scores 1,2,3,4,4,5.
pub fn six_team_year(median: bool) -> Year {
    let scores: Vec<Decimal> = [1, 2, 3, 4, 4, 5].iter().map(|s| Decimal::from(*s)).collect();
    year(2020, 6, vec![paired_week(&scores); 3], median)
}
