use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use site_ledger::cli::{
    handle_add, handle_edit, handle_export, handle_list, handle_projects, handle_show,
    handle_summary, EntryArgs,
};
use site_ledger::config::{paths::LedgerPaths, settings::Settings};
use site_ledger::models::ExpenseCategory;
use site_ledger::services::ProjectFilter;
use site_ledger::storage::{initialize_storage, LedgerStore};
use site_ledger::LedgerError;

#[derive(Parser)]
#[command(
    name = "siteledger",
    version,
    about = "Site expense management for construction projects",
    long_about = "Records per-person, per-project site expenses (fuel, food, purchase, \
                  hotel and other), lets you correct earlier entries by row, shows \
                  project-wise summaries and exports an Excel report."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the ledger file and settings
    Init,

    /// Save a new expense entry
    Add(EntryArgs),

    /// Update an existing entry by row; omitted fields keep their values
    Edit {
        /// Row position as shown by `list`
        row: usize,
        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Show one entry
    Show {
        /// Row position as shown by `list`
        row: usize,
    },

    /// List expense records
    #[command(alias = "ls")]
    List {
        /// Project name, or "All"
        #[arg(short, long, default_value = "All")]
        project: ProjectFilter,
    },

    /// List project names available as filters
    Projects,

    /// Project-wise expense summary
    Summary {
        /// Project name, or "All"
        #[arg(short, long, default_value = "All")]
        project: ProjectFilter,
    },

    /// Export records to an Excel (.xlsx) report
    Export {
        /// Project name, or "All"
        #[arg(short, long, default_value = "All")]
        project: ProjectFilter,
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    site_ledger::logging::init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Bad input is a warning: nothing was written
            match err.downcast_ref::<LedgerError>() {
                Some(LedgerError::Validation(msg)) => eprintln!("⚠️  {}", msg),
                _ => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut ledger = LedgerStore::open(paths.ledger_file())?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing site ledger at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Categories: {}", ExpenseCategory::labels().join(", "));
            println!("Run 'siteledger add --help' to record your first expense.");
        }
        Some(Commands::Add(entry)) => handle_add(&mut ledger, &settings, entry)?,
        Some(Commands::Edit { row, entry }) => handle_edit(&mut ledger, &settings, row, entry)?,
        Some(Commands::Show { row }) => handle_show(&ledger, &settings, row)?,
        Some(Commands::List { project }) => handle_list(&ledger, &settings, &project),
        Some(Commands::Projects) => handle_projects(&ledger),
        Some(Commands::Summary { project }) => handle_summary(&ledger, &project),
        Some(Commands::Export { project, output }) => {
            handle_export(&ledger, &settings, &project, output)?;
        }
        Some(Commands::Config) => {
            println!("Site Ledger Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Ledger file:      {}", ledger.path().display());
            println!("Records:          {}", ledger.len());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Default category: {}", settings.default_category);
            println!("  Report file name: {}", settings.report_file_name);
        }
        None => {
            println!("Site Ledger - construction site expense management");
            println!();
            println!("Run 'siteledger --help' for usage information.");
        }
    }

    Ok(())
}
