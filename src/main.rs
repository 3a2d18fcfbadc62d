mod config;
mod dataset;
mod engine;
mod report;

use anyhow::Result;
use config::Config;
use dataset::Dataset;
use std::path::Path;
use tracing::info;

/// Pick the week to display: --week argument, then config default, then the
/// last week in the document.
fn select_week<'a>(ds: &'a Dataset, requested: Option<&str>) -> Option<&'a dataset::Week> {
    if let Some(name) = requested {
        let week = ds.week(name);
        if week.is_none() {
            eprintln!("  Unknown week: {} (available: {})", name, ds.week_names().join(", "));
        }
        return week;
    }
    ds.weeks.last()
}

fn print_schedule(week: &dataset::Week) {
    println!("  Schedule — {}", week.name);
    let rows = report::schedule_rows(week);
    if rows.is_empty() {
        println!("    (no games)");
        return;
    }
    for row in rows {
        let tag = row
            .source_player
            .map(|p| format!("  [best bet: {}]", p))
            .unwrap_or_default();
        println!("    {:<28} {:>8} {:>10}{}", row.matchup, row.line, row.time, tag);
    }
}

fn print_heatmap(ds: &Dataset, week: &dataset::Week, config: &Config) {
    println!("  Scores — {}", week.name);
    let cells = report::heatmap_cells(
        ds,
        week,
        &config.heatmap.low_color,
        &config.heatmap.high_color,
    );
    if cells.is_empty() {
        println!("    (no players)");
        return;
    }
    for cell in cells {
        match (cell.score, cell.color) {
            (Some(score), Some(color)) => {
                println!("    {:<20} {:>7.1}   {}", cell.player, score, color.background)
            }
            (Some(score), None) => println!("    {:<20} {:>7.1}", cell.player, score),
            _ => println!("    {:<20} {:>7}", cell.player, "—"),
        }
    }
}

fn print_leaderboard(ds: &Dataset) {
    println!("  Leaderboard");
    let rows = report::leaderboard_rows(ds);
    if rows.is_empty() {
        println!("    (no standings yet)");
        return;
    }
    for row in rows {
        println!(
            "    {:>3}. {:<20} {:>7.1} pts  {:>2} wks  avg {:>5.2}",
            row.rank, row.player, row.total, row.weeks_played, row.average
        );
    }
}

fn print_team_tables(ds: &Dataset, week_filter: Option<&str>, max_rows: usize) {
    let (by_count, by_points) = report::team_tables(ds, week_filter);

    println!("  Most-picked teams");
    for stats in by_count.iter().take(max_rows) {
        println!(
            "    {:<20} {:>3} picks  {:>7.1} pts  {:>2} wks",
            stats.team, stats.bet_count, stats.total_points, stats.week_count
        );
    }

    println!("  Top-earning teams");
    for stats in by_points.iter().take(max_rows) {
        println!(
            "    {:<20} {:>7.1} pts  avg {:>5.2}  {:>3} picks",
            stats.team, stats.total_points, stats.average_points, stats.bet_count
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("gridboard=info")
        .with_writer(std::io::stderr)
        .init();

    // --week NAME, --all-weeks, optional positional dataset path
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut requested_week: Option<String> = None;
    let mut all_weeks = false;
    let mut dataset_override: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--week" => {
                requested_week = args.get(i + 1).cloned();
                i += 2;
            }
            "--all-weeks" => {
                all_weeks = true;
                i += 1;
            }
            other => {
                dataset_override = Some(other.to_string());
                i += 1;
            }
        }
    }

    let config = Config::load(Path::new("config.toml")).unwrap_or_else(|err| {
        info!("using default config: {err:#}");
        toml::from_str("").expect("empty config has defaults")
    });

    let dataset_path = dataset_override.unwrap_or_else(|| config.dataset_path.clone());
    let ds = Dataset::load(Path::new(&dataset_path))?;
    info!(
        weeks = ds.weeks.len(),
        players = ds.standings.len(),
        "dataset loaded from {}",
        dataset_path
    );

    println!();
    println!("  Gridboard — weekly pick'em report");
    if let Some(generated) = &ds.generated_at {
        println!("  dataset generated {}", generated);
    }
    println!();

    let requested = requested_week.as_deref().or(config.default_week.as_deref());
    let selected = select_week(&ds, requested);

    if let Some(week) = selected {
        print_schedule(week);
        println!();
        print_heatmap(&ds, week, &config);
        println!();
    }

    print_leaderboard(&ds);
    println!();

    let filter = if all_weeks {
        None
    } else {
        selected.map(|w| w.name.as_str())
    };
    print_team_tables(&ds, filter, config.report.max_team_rows);
    println!();

    Ok(())
}
