//! POS reporting CLI
//!
//! Drives the pipeline end to end: orders file → bills → daily/monthly
//! reports → xlsx workbooks. The as-of dates the aggregators need are
//! taken from flags, falling back to the data itself and only then to
//! the local clock (the library crates never read a clock).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use tracing_subscriber::EnvFilter;

use pos_engine::{BillNumberGenerator, Catalog, Register, aggregate_daily, aggregate_monthly};
use pos_export::{write_bill_workbook, write_daily_workbook, write_monthly_workbook};
use shared::models::{Bill, DailyReport};

mod input;

#[derive(Parser)]
#[command(name = "pos-cli", about = "Cafe POS reporting pipeline")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "POS_LOG")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate one day of orders and write its workbook
    Daily {
        /// Orders JSON file
        #[arg(long)]
        orders: PathBuf,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Report date override (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Group orders by date, roll the month up, write its workbook
    Monthly {
        /// Orders JSON file
        #[arg(long)]
        orders: PathBuf,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Any date inside the month to label the report with (YYYY-MM-DD)
        #[arg(long)]
        month: Option<NaiveDate>,
    },
    /// Run the seeded demo menu through a register session and export
    /// all three workbook types
    Demo {
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(&cli.log_level);

    match cli.command {
        Commands::Daily { orders, out, date } => run_daily(&orders, &out, date),
        Commands::Monthly { orders, out, month } => run_monthly(&orders, &out, month),
        Commands::Demo { out } => run_demo(&out),
    }
}

fn init_logger(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(level, std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_target(false)
        .init();
}

/// RUST_LOG directives take precedence over the --log-level flag
fn log_filter(flag: &str, env_directives: Option<String>) -> EnvFilter {
    match env_directives {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(flag),
    }
}

fn run_daily(orders: &Path, out: &Path, date: Option<NaiveDate>) -> anyhow::Result<()> {
    let records = input::load_orders(orders)?;

    let mut numbers = BillNumberGenerator::new();
    let bills: Vec<Bill> = records.iter().map(|r| r.to_bill(&mut numbers)).collect();

    let as_of = date
        .or_else(|| bills.first().map(|b| b.date))
        .unwrap_or_else(|| Local::now().date_naive());
    let report = aggregate_daily(&bills, as_of);

    let path = write_daily_workbook(&report, out)?;
    println!("{}", path.display());
    Ok(())
}

fn run_monthly(orders: &Path, out: &Path, month: Option<NaiveDate>) -> anyhow::Result<()> {
    let records = input::load_orders(orders)?;

    // One bill number sequence and one daily report per calendar date
    let mut numbers = BillNumberGenerator::new();
    let mut by_date: BTreeMap<NaiveDate, Vec<Bill>> = BTreeMap::new();
    for record in &records {
        by_date
            .entry(record.issued_at.date())
            .or_default()
            .push(record.to_bill(&mut numbers));
    }

    let days: Vec<DailyReport> = by_date
        .into_iter()
        .map(|(date, bills)| aggregate_daily(&bills, date))
        .collect();

    let as_of = month
        .or_else(|| days.first().map(|d| d.date))
        .unwrap_or_else(|| Local::now().date_naive());
    let report = aggregate_monthly(&days, as_of)?;

    let path = write_monthly_workbook(&report, &days, out)?;
    println!("{}", path.display());
    Ok(())
}

fn run_demo(out: &Path) -> anyhow::Result<()> {
    let catalog = Catalog::demo();
    let product = |name: &str| {
        catalog
            .products()
            .iter()
            .find(|p| p.name == name)
            .expect("demo product")
            .clone()
    };

    let today = Local::now().date_naive();
    let at = |h: u32, m: u32| today.and_hms_opt(h, m, 0).expect("valid time");

    let mut register = Register::new();

    register.cart_mut().add(&product("Cappuccino"));
    register.cart_mut().add(&product("Cappuccino"));
    register.checkout(at(9, 10), "Cash", "")?;

    register.cart_mut().add(&product("Club Sandwich"));
    register.cart_mut().add(&product("Caesar Salad"));
    register.checkout(at(12, 45), "Card", "table 4")?;

    register.cart_mut().add(&product("Green Tea"));
    register.cart_mut().add(&product("Chocolate Cake"));
    let last = register.checkout(at(16, 20), "Cash", "")?;

    let daily = aggregate_daily(register.completed_bills(), today);
    let monthly = aggregate_monthly(std::slice::from_ref(&daily), today)?;

    println!("{}", write_bill_workbook(&last, out)?.display());
    println!("{}", write_daily_workbook(&daily, out)?.display());
    println!(
        "{}",
        write_monthly_workbook(&monthly, std::slice::from_ref(&daily), out)?.display()
    );
    Ok(())
}
