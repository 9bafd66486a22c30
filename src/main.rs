use anyhow::Result;
use clap::{Parser, Subcommand};

use till_report::cli::{
    handle_day_command, handle_log_command, handle_voucher_command, resolve_date, DayCommands,
    VoucherCommands,
};
use till_report::config::{paths::TillPaths, settings::Settings};
use till_report::storage::Storage;

#[derive(Parser)]
#[command(
    name = "till",
    version,
    about = "Daily cash register report",
    long_about = "till counts the cash drawer by denomination, records the day's \
                  card payments, deposits, purchases and vouchers, and computes \
                  the daily total. One record is kept per calendar day."
)]
struct Cli {
    /// Day to work on (YYYY-MM-DD or DD.MM.YYYY, default today)
    #[arg(short, long, global = true)]
    date: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Day(DayCommands),

    /// Voucher line commands
    #[command(subcommand)]
    Voucher(VoucherCommands),

    /// Show recent changes from the audit log
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory and write default settings
    Init,

    /// Show configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TillPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Day(cmd)) => {
            let date = resolve_date(cli.date.as_deref())?;
            handle_day_command(&storage, &settings, date, cmd)?;
        }
        Some(Commands::Voucher(cmd)) => {
            let date = resolve_date(cli.date.as_deref())?;
            handle_voucher_command(&storage, &settings, date, cmd)?;
        }
        Some(Commands::Log { limit }) => {
            handle_log_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing till-report at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Purchase vendors:");
            for vendor in &settings.purchase_vendors {
                println!("  - {}", vendor);
            }
        }
        Some(Commands::Config) => {
            println!("till-report Configuration");
            println!("=========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "Yes" } else { "No (run 'till init')" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Decimal comma:   {}", settings.decimal_comma);
            println!("  Date format:     {}", settings.date_format);
            println!("  Vendors:         {}", settings.purchase_vendors.join(", "));
        }
        None => {
            println!("till - daily cash register report");
            println!();
            println!("Run 'till --help' for usage information.");
            println!("Run 'till show' to see today's report.");
        }
    }

    Ok(())
}
