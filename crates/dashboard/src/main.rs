use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;

use stockroom_auth::{Session, StubAuthenticator};
use stockroom_core::SystemClock;
use stockroom_dashboard::{DashboardConfig, DashboardView, OutputFormat, SeedMode};
use stockroom_inventory::{InventoryService, mock_inventory};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "dashboard failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = DashboardConfig::from_env().context("failed to load configuration")?;
    stockroom_observability::init_with(config.log_format, "info");

    if config.uses_default_credentials() {
        tracing::warn!("STOCKROOM_USERNAME/STOCKROOM_PASSWORD not set; using demo account");
    }

    let mut session = Session::new(StubAuthenticator::with_demo_accounts());
    let user = session
        .login(&config.credentials)
        .context("login failed")?
        .clone();

    let service = match config.seed {
        SeedMode::Mock => {
            mock_inventory(Arc::new(SystemClock)).context("failed to seed mock inventory")?
        }
        SeedMode::Empty => InventoryService::new(),
    };

    let view = DashboardView::build(&user, &service, &config.search);
    tracing::info!(
        alerts = view.alerts.len(),
        items = view.items.len(),
        warehouses = view.warehouses.len(),
        "dashboard rendered"
    );
    match config.output {
        OutputFormat::Text => print!("{view}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&view).context("failed to serialize dashboard")?
        ),
    }

    session.logout();
    Ok(())
}
