use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use touchbase_core::{env_nonempty, env_parse_or, ViewState};
use touchbase_http::{create_router, AppState};
use touchbase_service::{
    AccountService, CrmService, DashboardService, LedgerService, SyncService,
};
use touchbase_sheets::{SheetPush, SheetsClient};
use touchbase_storage::Storage;

#[derive(Parser)]
#[command(name = "touchbase")]
#[command(about = "Daily-touch tracker for a strategic account roster", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve {
        /// Port to listen on; defaults to $TOUCHBASE_PORT, then 5001.
        #[arg(short, long, default_value_t = default_port())]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Create the database and seed the account roster.
    Init,
    /// Delete the database and re-seed from scratch.
    Reset,
    /// Push unsynced activities, tasks, and notes to Google Sheets.
    Sync,
    /// Print the dashboard summary as JSON.
    Stats,
    /// Print the account roster with derived status as JSON.
    Accounts,
}

fn default_port() -> u16 {
    env_parse_or("TOUCHBASE_PORT", 5001)
}

fn db_path() -> PathBuf {
    env_nonempty("TOUCHBASE_DB").map_or_else(
        || {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("touchbase")
                .join("tracker.db")
        },
        PathBuf::from,
    )
}

/// Builds the sheets client when the env carries credentials; the tracker
/// works fully offline without them.
fn sheets_from_env() -> Result<Option<Arc<dyn SheetPush>>> {
    let (Some(token), Some(spreadsheet_id)) =
        (env_nonempty("TOUCHBASE_SHEETS_TOKEN"), env_nonempty("TOUCHBASE_SPREADSHEET_ID"))
    else {
        return Ok(None);
    };
    let client = match env_nonempty("TOUCHBASE_SHEETS_URL") {
        Some(url) => SheetsClient::with_base_url(token, spreadsheet_id, url)?,
        None => SheetsClient::new(token, spreadsheet_id)?,
    };
    Ok(Some(Arc::new(client) as Arc<dyn SheetPush>))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let db_path = db_path();

    if matches!(cli.command, Commands::Reset) && db_path.exists() {
        std::fs::remove_file(&db_path)?;
        tracing::info!(path = %db_path.display(), "database removed");
    }

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let storage = Arc::new(Storage::new(&db_path)?);
    let seeded = storage.seed_accounts()?;
    if seeded > 0 {
        tracing::info!(seeded, "account roster seeded");
    }

    match cli.command {
        Commands::Serve { port, host } => {
            let state = Arc::new(AppState {
                accounts: Arc::new(AccountService::new(Arc::clone(&storage))),
                ledger: Arc::new(LedgerService::new(Arc::clone(&storage))),
                crm: Arc::new(CrmService::new(Arc::clone(&storage))),
                dashboard: Arc::new(DashboardService::new(Arc::clone(&storage))),
                sync: Arc::new(SyncService::new(Arc::clone(&storage), sheets_from_env()?)),
            });
            let router = create_router(state);
            let addr = format!("{host}:{port}");
            tracing::info!("Starting HTTP server on {addr}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        },
        Commands::Init | Commands::Reset => {
            println!("database ready at {}", db_path.display());
        },
        Commands::Sync => {
            let sync = SyncService::new(Arc::clone(&storage), sheets_from_env()?);
            let report = sync.full_sync().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        },
        Commands::Stats => {
            let dashboard = DashboardService::new(Arc::clone(&storage));
            let summary = dashboard.summary(Local::now().date_naive())?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        },
        Commands::Accounts => {
            let accounts = AccountService::new(Arc::clone(&storage));
            let roster =
                accounts.list_accounts(ViewState::default(), Local::now().date_naive())?;
            println!("{}", serde_json::to_string_pretty(&roster.accounts)?);
        },
    }

    Ok(())
}
