//! Admin backend for the prize wheel.
//!
//! Serves two endpoints:
//! - `config-manager`: read/update the single configuration record
//! - `login`: check administrator credentials

use prize_admin::{
    cli::Cli,
    config::{AdminCredentials, StoreSettings},
    routes::router,
    state::AppState,
    store::{AirtableStore, MemoryStore, RecordStore},
};
use std::{env, process, sync::Arc};
use tracing::{Level, error, info, warn};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args: Cli = argh::from_env();

    let settings = StoreSettings::resolve(&args, |key| env::var(key).ok()).unwrap_or_else(|e| {
        error!("Invalid store configuration: {}", e);
        process::exit(2);
    });

    let store: Arc<dyn RecordStore> = match settings {
        StoreSettings::Memory => {
            warn!("Using in-memory store, configuration is lost on exit");
            Arc::new(MemoryStore::new())
        }
        StoreSettings::Airtable {
            endpoint,
            base_id,
            table,
            api_key,
        } => match AirtableStore::new(&endpoint, &base_id, &table, api_key) {
            Ok(store) => {
                info!("Using Airtable table: {}", store.table_url());
                Arc::new(store)
            }
            Err(e) => {
                error!("Invalid store configuration: {}", e);
                process::exit(2);
            }
        },
    };

    let credentials = AdminCredentials::from_env();
    if credentials.pair().is_none() {
        warn!("ADMIN_USER or ADMIN_PASS is not set, login will fail with 500");
    }

    let app = router(AppState::new(store, credentials), &args.api_path);

    info!(
        "Endpoints: {0}/config-manager, {0}/login",
        args.api_path.trim_end_matches('/')
    );
    info!("Server running on: http://{}", args.bind);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.expect("Server error");
}
