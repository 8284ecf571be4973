//! Net Worth Projection CLI
//!
//! Edit the stored financial profile, print projections and render charts

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use networth_projection::chart::{
    layout, render_svg, ChartStyle, FocusOverlay, FocusTracker, PointerEvent,
};
use networth_projection::config::{AppConfig, DEFAULT_DATA_PATH};
use networth_projection::format::{format_currency, format_percent};
use networth_projection::profile::{FileStorage, FinancialProfile, ProfileField, ProfileStore};
use networth_projection::projection::{project, Granularity, ProjectionSeries};

#[derive(Debug, Parser)]
#[command(name = "networth", version, about = "Project net worth from savings, income and growth")]
struct Cli {
    /// File holding the stored profile
    #[arg(long, env = "NETWORTH_DATA", default_value = DEFAULT_DATA_PATH, global = true)]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the stored profile
    Show,

    /// Edit one profile field (growth is given in percent)
    Set {
        field: ProfileField,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Restore the default profile
    Reset,

    /// Print the projection summary and per-period breakdown
    Project {
        #[arg(short, long, default_value_t = Granularity::Monthly)]
        granularity: Granularity,

        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Only print the first N breakdown rows
        #[arg(long)]
        limit: Option<usize>,

        /// Also write every point to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the whole series as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Lay out the projection chart and write it as SVG
    Chart {
        #[arg(short, long, default_value_t = Granularity::Monthly)]
        granularity: Granularity,

        #[arg(long)]
        start: Option<NaiveDate>,

        /// Available screen width; the chart takes this minus margins, capped at 800
        #[arg(long, default_value_t = 400.0)]
        width: f64,

        #[arg(long)]
        height: Option<f64>,

        /// Simulate a touch at this x offset to show the cursor and tooltip
        #[arg(long, allow_hyphen_values = true)]
        touch_x: Option<f64>,

        #[arg(short, long, default_value = "projection_chart.svg")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig {
        data_path: cli.data.clone(),
        ..AppConfig::default()
    };

    let mut store = ProfileStore::load(FileStorage::new(&config.data_path));

    match cli.command {
        Command::Show => print_profile(store.get()),
        Command::Set { field, value } => {
            store.subscribe(|p| {
                info!("Profile updated, net monthly now {}", format_currency(p.monthly_net()))
            });
            store.edit(field, &value);
            println!("Saved {} to {}", field, store.storage().path().display());
            print_profile(store.get());
        }
        Command::Reset => {
            store.set(FinancialProfile::default());
            println!("Profile reset to defaults");
            print_profile(store.get());
        }
        Command::Project { granularity, start, limit, csv, json } => {
            let start = start.unwrap_or_else(|| Local::now().date_naive());
            let series = project(store.get(), granularity, start).context("Projection failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                print_projection(&series, limit);
            }

            if let Some(path) = csv {
                write_series_csv(&series, &path)
                    .with_context(|| format!("Unable to write CSV to {}", path.display()))?;
                println!("\nSeries written to: {}", path.display());
            }
        }
        Command::Chart { granularity, start, width, height, touch_x, out } => {
            let start = start.unwrap_or_else(|| Local::now().date_naive());
            let series = project(store.get(), granularity, start).context("Projection failed")?;
            let chart_width = config.chart.chart_width(width);
            let chart_height = height.unwrap_or(config.chart.height);
            let geometry = layout(&series.values(), chart_width, chart_height, config.chart.padding)
                .context("Chart layout failed")?;

            let mut tracker = FocusTracker::new();
            if let Some(x) = touch_x {
                tracker.handle(PointerEvent::Down { x }, &geometry);
            }

            let overlay = tracker.focus(&geometry).and_then(|focus| {
                series
                    .tooltip_text(focus.index)
                    .map(|text| FocusOverlay { focus, text })
            });

            let svg = render_svg(&geometry, &ChartStyle::projection(), overlay.as_ref())
                .context("Chart rendering failed")?;
            fs::write(&out, svg).with_context(|| format!("Unable to write {}", out.display()))?;

            println!(
                "Chart {}x{} ({} points) written to: {}",
                chart_width,
                chart_height,
                geometry.len(),
                out.display()
            );
            println!(
                "Value axis: {} .. {}",
                format_currency(geometry.y_min),
                format_currency(geometry.y_max)
            );
            match &overlay {
                Some(overlay) => println!("{}", overlay.text),
                None => println!("End · {}", format_currency(series.summary().end_value)),
            }
        }
    }

    Ok(())
}

fn print_profile(profile: &FinancialProfile) {
    println!("Your Financial Data");
    println!("===================");
    for field in ProfileField::ALL {
        let value = profile.get(field);
        let shown = if field.is_percentage() {
            format_percent(value, 2)
        } else {
            format_currency(value)
        };
        println!("  {:<28} {:>14}", field.label(), shown);
    }
    println!();
    println!("  Net Monthly: {}", format_currency(profile.monthly_net()));
    println!("  Annual Growth: {}", format_percent(profile.annual_growth_rate, 2));
}

fn print_projection(series: &ProjectionSeries, limit: Option<usize>) {
    let summary = series.summary();

    println!("Net Worth Projection ({})", series.granularity);
    println!("==========================\n");
    println!("  Now:         {:>14}", format_currency(summary.now_value));
    println!("  End:         {:>14}", format_currency(summary.end_value));
    println!("  Monthly Net: {:>14}", format_currency(summary.monthly_net));
    println!("  Growth:      {:>14}", format_percent(summary.annual_growth_rate, 1));
    println!("\n  {}\n", summary.axis_hint());

    println!("{} Breakdown", series.granularity.title());
    println!("{:>5} {:<16} {:>16}", "Step", "Period", "Net Worth");
    println!("{}", "-".repeat(39));

    let breakdown = series.breakdown();
    let shown = limit.unwrap_or(breakdown.len()).min(breakdown.len());
    for point in &breakdown[..shown] {
        println!("{:>5} {:<16} {:>16}", point.index, point.label, format_currency(point.value));
    }

    if breakdown.len() > shown {
        println!("... ({} more rows)", breakdown.len() - shown);
    }
}

fn write_series_csv(series: &ProjectionSeries, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for point in &series.points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}
