//! Application entry point building the Actix-Web server.
use std::env;

use dotenvy::dotenv;

use landing_signup::models::config::SharedConfig;
use landing_signup::{DEFAULT_CONFIG_FILE, run};

#[actix_web::main]
async fn main() {
    // Load environment variables from `.env` in local development.
    dotenv().ok();
    // Initialize logger with default level INFO if not provided.
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config_file = env::var("CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
    let config = SharedConfig::new(config_file);

    let current = config.current();
    log::info!("Listening on port {}", current.port);
    log::info!("Webhook URL: {}", current.webhook_url);
    log::info!("App title: {}", current.app_title);

    match run(config).await {
        Ok(_) => log::info!("Server stopped"),
        Err(err) => {
            log::error!("Error starting server: {}", err);
            std::process::exit(1);
        }
    }
}
