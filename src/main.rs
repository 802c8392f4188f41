#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

use atlas_lead_server::api::{self, MgmtState};
use atlas_lead_server::config::Config;
use atlas_lead_server::services::lead_service::LeadService;
use atlas_lead_server::services::mailer::{Mailer, SmtpMailer};
use atlas_lead_server::telemetry;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    let telemetry_guard = telemetry::init_telemetry(&config.telemetry)?;

    atlas_lead_server::setup_panic_hook();

    // The SMTP transport is built once and shared across all requests.
    let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::new(&config.smtp)?);
    let lead_service = LeadService::new(Arc::clone(&mailer), config.mail.clone());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    atlas_lead_server::spawn_signal_handler(shutdown_tx);

    let app_router = api::app_router(config.clone(), lead_service);
    let mgmt_app = api::mgmt_router(MgmtState { mailer });

    let api_addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let mgmt_addr: SocketAddr = format!("{}:{}", config.server.host, config.server.mgmt_port).parse()?;

    tracing::info!(address = %api_addr, "listening");
    tracing::info!(address = %mgmt_addr, "management server listening");

    let api_listener = tokio::net::TcpListener::bind(api_addr).await?;
    let mgmt_listener = tokio::net::TcpListener::bind(mgmt_addr).await?;

    let mut api_rx = shutdown_rx.clone();
    let api_server = axum::serve(api_listener, app_router.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(async move {
            let _ = api_rx.wait_for(|&s| s).await;
        });

    let mut mgmt_rx = shutdown_rx;
    let mgmt_server = axum::serve(mgmt_listener, mgmt_app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(async move {
            let _ = mgmt_rx.wait_for(|&s| s).await;
        });

    if let Err(e) = tokio::try_join!(api_server, mgmt_server) {
        tracing::error!(error = %e, "Server error");
    }

    telemetry_guard.shutdown();
    Ok(())
}
