// h2hstats entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr, so stdout stays pure CSV)
// 2. Load config, apply command-line overrides
// 3. Read the league file
// 4. Run the year or all-time calculator
// 5. Re-emit engine warnings, write CSV to stdout

mod report;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use h2hstats_core::config::{self, Config, FilterConfig, ScopeKind};
use h2hstats_core::league_file;
use h2hstats_engine::{AllTimeCalculator, AllTimeFilters, Stat, YearCalculator, YearFilters};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "h2hstats", version)]
#[command(about = "Advanced head-to-head statistics for fantasy leagues")]
struct Args {
    /// Config file to load instead of config/h2hstats.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// League JSON file, overriding [league] path
    #[arg(long)]
    league: Option<PathBuf>,

    /// Compute a single season (implies year scope)
    #[arg(long, conflicts_with = "all_time")]
    year: Option<u32>,

    /// Compute every owner across seasons
    #[arg(long)]
    all_time: bool,

    /// Statistic to output; repeat for several columns
    #[arg(long = "stat", value_name = "STAT")]
    stats: Vec<String>,

    /// Decimal places for display
    #[arg(long)]
    decimal_places: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => config::load_config().context("failed to load configuration")?,
    };
    apply_overrides(&mut config, &args);
    let stats = parse_stats(&config.output.stats)?;

    let league = league_file::read_league(&config.league.path).context("failed to read league")?;
    info!(
        "League loaded: {}, {} owners, {} seasons",
        league.name,
        league.owners.len(),
        league.years.len()
    );

    let table = match config.scope.kind {
        ScopeKind::Year => {
            let year_number = match config.scope.year.or(league.last_year_number()) {
                Some(y) => y,
                None => bail!("league '{}' has no seasons", league.name),
            };
            let filters = year_filters(&config.filters);
            let calc = YearCalculator::new(&league, year_number, &filters)
                .with_context(|| format!("failed to compute season {year_number}"))?;
            for w in calc.warnings() {
                warn!("{w}");
            }
            let year = calc.season().year();
            info!("Computed {} stats for {} teams in {}", stats.len(), year.teams.len(), year_number);
            report::year_table(&calc, year, &stats)
        }
        ScopeKind::AllTime => {
            let filters = all_time_filters(&config.filters);
            let calc = AllTimeCalculator::new(&league, &filters)
                .context("failed to compute all-time statistics")?;
            for w in calc.warnings() {
                warn!("{w}");
            }
            info!(
                "Computed {} stats for {} owners over seasons {:?}",
                stats.len(),
                league.owners.len(),
                calc.seasons()
            );
            report::all_time_table(&calc, &league, &stats)
        }
    };

    report::write_csv(&table, config.output.decimal_places, std::io::stdout().lock())
}

/// Initialize tracing to stderr; stdout carries the CSV.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("h2hstats=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

/// Command-line flags take precedence over the config file.
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(path) = &args.league {
        config.league.path = path.clone();
    }
    if let Some(year) = args.year {
        config.scope.kind = ScopeKind::Year;
        config.scope.year = Some(year);
    }
    if args.all_time {
        config.scope.kind = ScopeKind::AllTime;
    }
    if !args.stats.is_empty() {
        config.output.stats = args.stats.clone();
    }
    if let Some(places) = args.decimal_places {
        config.output.decimal_places = places;
    }
}

fn parse_stats(names: &[String]) -> anyhow::Result<Vec<Stat>> {
    names
        .iter()
        .map(|name| {
            name.parse::<Stat>().with_context(|| {
                let known: Vec<&str> = Stat::ALL.iter().map(|s| s.name()).collect();
                format!("valid statistics: {}", known.join(", "))
            })
        })
        .collect()
}

fn year_filters(f: &FilterConfig) -> YearFilters {
    YearFilters {
        only_regular_season: f.only_regular_season,
        only_post_season: f.only_post_season,
        only_championship: f.only_championship,
        week_number_start: f.week_number_start,
        week_number_end: f.week_number_end,
    }
}

fn all_time_filters(f: &FilterConfig) -> AllTimeFilters {
    AllTimeFilters {
        only_regular_season: f.only_regular_season,
        only_post_season: f.only_post_season,
        only_championship: f.only_championship,
        week_number_start: f.week_number_start,
        week_number_end: f.week_number_end,
        year_number_start: f.year_number_start,
        year_number_end: f.year_number_end,
    }
}
