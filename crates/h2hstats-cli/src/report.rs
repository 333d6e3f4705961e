// Tabulate calculator output and write it as CSV.

use std::io::Write;

use anyhow::Context;
use h2hstats_core::model::{League, Year};
use h2hstats_engine::{AllTimeCalculator, Stat, YearCalculator};
use rust_decimal::{Decimal, RoundingStrategy};

/// One CSV row: the roster entry and its value per requested statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: String,
    pub name: String,
    pub values: Vec<Option<Decimal>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub stats: Vec<Stat>,
    pub rows: Vec<Row>,
}

/// One row per team of the season, in roster order.
pub fn year_table(calc: &YearCalculator<'_>, year: &Year, stats: &[Stat]) -> Table {
    let columns: Vec<_> = stats.iter().map(|s| calc.compute(*s)).collect();
    let rows = year
        .teams
        .iter()
        .map(|team| Row {
            id: team.id.clone(),
            name: team.name.clone(),
            values: columns
                .iter()
                .map(|c| c.get(&team.id).copied().flatten())
                .collect(),
        })
        .collect();
    Table {
        stats: stats.to_vec(),
        rows,
    }
}

/// One row per owner of the league, in league order.
pub fn all_time_table(calc: &AllTimeCalculator, league: &League, stats: &[Stat]) -> Table {
    let columns: Vec<_> = stats.iter().map(|s| calc.compute(*s)).collect();
    let rows = league
        .owners
        .iter()
        .map(|owner| Row {
            id: owner.id.clone(),
            name: owner.name.clone(),
            values: columns
                .iter()
                .map(|c| c.get(&owner.id).copied().flatten())
                .collect(),
        })
        .collect();
    Table {
        stats: stats.to_vec(),
        rows,
    }
}

/// Render a value for display. Absent values become an empty cell.
pub fn format_value(value: Option<Decimal>, decimal_places: u32) -> String {
    match value {
        Some(v) => v
            .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        None => String::new(),
    }
}

pub fn write_csv<W: Write>(table: &Table, decimal_places: u32, out: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    let mut header = vec!["id".to_string(), "name".to_string()];
    header.extend(table.stats.iter().map(|s| s.name().to_string()));
    wtr.write_record(&header).context("failed to write CSV header")?;

    for row in &table.rows {
        let mut record = vec![row.id.clone(), row.name.clone()];
        record.extend(row.values.iter().map(|v| format_value(*v, decimal_places)));
        wtr.write_record(&record)
            .with_context(|| format!("failed to write CSV row for {}", row.id))?;
    }
    wtr.flush().context("failed to flush CSV output")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
