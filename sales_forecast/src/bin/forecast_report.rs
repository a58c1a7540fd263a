use chrono::Local;
use clap::Parser;
use sales_forecast::config::{init_tracing, load_config, load_config_from};
use sales_forecast::stats::DashboardStats;
use sales_forecast::utils::{current_week, parse_period};
use sales_forecast::{BatchSummary, DataLoader, ForecastService};
use std::path::PathBuf;
use tracing::info;

/// Print SMA sales forecasts for one item or for every item
#[derive(Debug, Parser)]
#[command(name = "forecast_report", version)]
struct Args {
    /// SMA period in weeks (defaults to the configured period)
    #[arg(long)]
    period: Option<String>,

    /// Forecast only this item id
    #[arg(long)]
    item: Option<String>,

    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Items CSV (overrides the configured path)
    #[arg(long)]
    items: Option<PathBuf>,

    /// Sales CSV (overrides the configured path)
    #[arg(long)]
    sales: Option<PathBuf>,

    /// Week to report dashboard numbers for (defaults to the current week)
    #[arg(long)]
    week: Option<u32>,

    /// Directory holding forecast.{toml,json,yaml}
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config_dir {
        Some(dir) => load_config_from(dir)?,
        None => load_config()?,
    };
    init_tracing(&config.log_level, config.log_json);

    let period = match args.period.as_deref() {
        Some(input) => parse_period(input, config.min_period)?,
        None => config.default_period,
    };

    let items_path = args.items.unwrap_or(config.items_path);
    let sales_path = args.sales.unwrap_or(config.sales_path);
    let ledger = DataLoader::from_csv(&items_path, &sales_path)?;
    info!(
        items = ledger.items().len(),
        sales = ledger.sales().len(),
        "loaded sales ledger"
    );

    let week = args
        .week
        .unwrap_or_else(|| current_week(Local::now().naive_local()));
    let total_items = ledger.items().len();
    let service = ForecastService::new(ledger);

    if let Some(item_id) = args.item.as_deref() {
        let result = service.compute_forecast(item_id, period).await?;
        if args.json {
            println!("{}", result.to_json()?);
        } else {
            println!("{}", result);
        }
        return Ok(());
    }

    let results = service.compute_all_forecasts(period).await?;
    let summary = BatchSummary::new(&results, total_items, period);
    let stats = DashboardStats::compute(service.repository(), week);

    if args.json {
        let report = serde_json::json!({
            "dashboard": stats,
            "summary": summary,
            "results": results,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", stats);
    println!("{}", summary);
    if results.is_empty() {
        println!("No item has more than {} weeks of sales.", period);
    }
    for result in &results {
        println!("{}", result);
    }

    Ok(())
}
