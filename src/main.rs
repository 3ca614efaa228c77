use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_tracker::cli::{
    handle_breakdown, handle_budget_command, handle_categories, handle_currency_command,
    handle_expense_command, handle_export, handle_import, handle_reset, handle_summary,
    ExportOptions,
};
use budget_tracker::config::{paths::TrackerPaths, settings::Settings};
use budget_tracker::services::BudgetStore;
use budget_tracker::storage::{FileStorage, STATE_KEY};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal monthly budget tracker",
    long_about = "Track spending against a monthly budget from the command line. \
                  Set a budget, record expenses by category, and see how much \
                  of the month's budget is left."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly budget commands
    #[command(subcommand)]
    Budget(budget_tracker::cli::BudgetCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(budget_tracker::cli::ExpenseCommands),

    /// Display currency commands
    #[command(subcommand)]
    Currency(budget_tracker::cli::CurrencyCommands),

    /// Show this month's budget overview
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show this month's spending by category
    Breakdown {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List expense categories
    Categories,

    /// Export budget data to a file
    Export {
        /// Output file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export expenses as CSV
        #[arg(long)]
        csv: bool,
        /// With --csv, include expenses from every month
        #[arg(long)]
        all: bool,
    },

    /// Import budget data from an exported JSON file
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Delete all budget data
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    // Initialize storage
    let storage = FileStorage::open(&paths)?;
    let mut store = BudgetStore::load(storage);

    match cli.command {
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Currency(cmd)) => {
            handle_currency_command(&mut store, cmd)?;
        }
        Some(Commands::Summary { json }) => {
            handle_summary(&store, &settings, json)?;
        }
        Some(Commands::Breakdown { json }) => {
            handle_breakdown(&store, &settings, json)?;
        }
        Some(Commands::Categories) => handle_categories(&store),
        Some(Commands::Export { output, csv, all }) => {
            handle_export(&store, ExportOptions { output, csv, all })?;
        }
        Some(Commands::Import { file }) => {
            handle_import(&mut store, &file)?;
        }
        Some(Commands::Reset { yes }) => {
            handle_reset(&mut store, yes)?;
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data file:        {}", store.storage().path_for(STATE_KEY).display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Locale formatting: {}", settings.locale_formatting);
            println!("  Date format:       {}", settings.date_format);
            println!("  Recent limit:      {}", settings.recent_limit);
            println!();
            println!("Currency: {}", store.currency().code());
        }
        None => {
            handle_summary(&store, &settings, false)?;
            println!();
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}
