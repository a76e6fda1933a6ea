use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_report::cli::{handle_list_command, handle_report_command, ListArgs, ReportArgs};
use expense_report::config::{ReportPaths, ReportSettings};

#[derive(Parser)]
#[command(
    name = "expense-report",
    author = "Kaylee Beyene",
    version,
    about = "Expense totals by category, as tables, JSON, YAML, PDF or XLSX",
    long_about = "expense-report reads expense records from a JSON or CSV file, \
                  totals them per category over a date range and renders the \
                  result for the terminal or as a document."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a category report for a date range
    Report(ReportArgs),

    /// List expenses, newest first, one page at a time
    #[command(alias = "ls")]
    List(ListArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = ReportPaths::new()?;
    let settings = ReportSettings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Report(args)) => handle_report_command(&settings, args)?,
        Some(Commands::List(args)) => handle_list_command(&settings, args)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!(
                "Settings written to: {}",
                paths.settings_file().display()
            );
        }
        Some(Commands::Config) => {
            println!("expense-report configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Title:            {}", settings.title);
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Sheet name:       {}", settings.sheet_name);
            println!("  Timestamp format: {}", settings.timestamp_format);
            println!(
                "  Page size:        {} x {} mm",
                settings.page.width_mm, settings.page.height_mm
            );
            println!(
                "  Stream chunks:    {} bytes, {} in flight",
                settings.stream.chunk_size, settings.stream.channel_capacity
            );
        }
        None => {
            println!("expense-report - expense totals by category");
            println!();
            println!("Run 'expense-report --help' for usage information.");
        }
    }

    Ok(())
}
