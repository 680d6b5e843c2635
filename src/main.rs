mod auth;
mod config;
mod db;
mod error;
mod models;
mod navigation;
mod operations;

use auth::Session;
use clap::{Parser, Subcommand};
use config::Config;
use db::TransactionStore;
use db::repository::SqliteTransactionStore;
use models::category::Category;
use models::transaction::TransactionType;
use navigation::{ConsoleNavigator, Route};
use operations::add::{FormState, FormUpdate, TransactionForm};
use operations::balance::BalanceSummary;
use operations::dashboard::{self, Dashboard};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Quick Pay: record income and expenses and keep an eye on your balance.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the SQLite database holding the transactions.
    #[arg(long, default_value = "quick_pay.db")]
    db_path: PathBuf,

    /// Name shown in the dashboard greeting.
    #[arg(long)]
    user_name: Option<String>,

    /// Email of the signed-in user, shown when no name is set. Without it
    /// the app runs signed out.
    #[arg(long)]
    user_email: Option<String>,

    /// How many times to try saving a transaction before giving up.
    #[arg(long, default_value_t = 1)]
    save_attempts: u32,

    #[command(subcommand)]
    command: UserCommands,
}

#[derive(Subcommand, Debug)]
enum UserCommands {
    /// Record a new transaction, then show the dashboard.
    Add {
        #[arg(long)]
        description: String,

        /// Positive amount; the sign comes from --type.
        #[arg(long)]
        amount: String,

        /// One of the categories listed by `categories`.
        #[arg(long)]
        category: String,

        /// income or expense.
        #[arg(long = "type", default_value = "expense")]
        transaction_type: TransactionType,

        /// YYYY-MM-DD, defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the balance and recent transactions.
    Dashboard,
    /// Print only the current balance.
    Balance,
    /// List the categories offered on entry.
    Categories,
    /// Sign out of the current session.
    Logout,
}

fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();
    let config = Config::new(args.db_path, args.user_name, args.user_email, args.save_attempts);

    match run(&config, args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &Config, command: UserCommands) -> Result<(), String> {
    let mut session = match &config.user {
        Some(user) => Session::signed_in(user.clone()),
        None => Session::signed_out(),
    };
    let mut navigator = ConsoleNavigator::new();

    let open_store = || {
        db::connection::establish_connection(&config.db_path)
            .map(SqliteTransactionStore::new)
            .map_err(|e| {
                format!("Failed to open database '{}': {}", config.db_path.display(), e)
            })
    };

    match command {
        UserCommands::Add {
            description,
            amount,
            category,
            transaction_type,
            date,
        } => {
            let store = open_store()?;
            let mut form =
                TransactionForm::new(FormState::default()).with_save_attempts(config.save_attempts);
            form.update(FormUpdate::Description(description));
            form.update(FormUpdate::Amount(amount));
            form.update(FormUpdate::Category(category));
            form.update(FormUpdate::Type(transaction_type));
            if let Some(date) = date {
                form.update(FormUpdate::Date(date));
            }

            if form.submit(&store, &mut navigator).is_err() {
                return Err(format!(
                    "Error adding transaction: {}",
                    form.error().unwrap_or_default()
                ));
            }
            println!("Transaction added successfully!");

            if navigator.current() == Some(Route::Dashboard) {
                let view = Dashboard::load(&store, &session)
                    .map_err(|e| format!("Error loading dashboard: {}", e))?;
                print!("{}", view);
            }
        }
        UserCommands::Dashboard => {
            let store = open_store()?;
            let view = Dashboard::load(&store, &session)
                .map_err(|e| format!("Error loading dashboard: {}", e))?;
            print!("{}", view);
        }
        UserCommands::Balance => {
            let store = open_store()?;
            let transactions = store
                .list()
                .map_err(|e| format!("Error loading transactions: {}", e))?;
            let summary = BalanceSummary::from_transactions(&transactions)
                .map_err(|e| format!("Error computing balance: {}", e))?;
            println!("{}", summary.formatted);
        }
        UserCommands::Categories => {
            for category in Category::ALL {
                println!("{}", category);
            }
        }
        UserCommands::Logout => {
            dashboard::logout(&mut session, &mut navigator);
            println!("Signed out.");
        }
    }

    Ok(())
}
