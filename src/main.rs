use actix_web::{App, HttpServer, middleware::Logger, web};
use log::info;
use promptgrid::{AppState, Config, Controller, FileStore, GenerationClient, handlers};
use reqwest::Client;
use std::io;
use std::sync::Arc;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let config = Config::from_env();

    let http = Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| io::Error::other(format!("failed to build reqwest client: {e}")))?;
    let client = GenerationClient::new(http, config.generate_url.clone());
    let store = Arc::new(FileStore::new(config.store_path.clone()));

    let controller = Controller::load(&config, client, store)
        .map_err(|e| io::Error::other(format!("failed to restore results: {e}")))?;

    let state = web::Data::new(AppState {
        config: config.clone(),
        controller: controller.clone(),
    });

    info!(
        "\n┌───────────────────────────────────────────┐\
         \n│                promptgrid                 │\
         \n└───────────────────────────────────────────┘\n"
    );
    info!("Open http://localhost:{} and start typing", config.port);
    info!("Generation endpoint: {}", config.generate_url);
    info!("Debounce: {}ms", config.debounce_ms);
    info!(
        "Store: {} (slot '{}')",
        config.store_path.display(),
        config.storage_key
    );
    info!(
        "Debug mode: {}",
        if config.debug { "ENABLED" } else { "disabled" }
    );

    let max_input_bytes = config.max_input_bytes;
    // one worker: all session mutations come from a single thread
    let result = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(handlers::json_config(max_input_bytes))
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .workers(1)
    .bind(("127.0.0.1", config.port))?
    .run()
    .await;

    controller.shutdown();
    result
}
