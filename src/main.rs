mod application;
mod domain;
mod infrastructure;
mod presentation;

#[cfg(test)]
mod testing;

use env_logger::Env;
use tracing::{error, info};

use crate::infrastructure::{Container, Settings};
use crate::presentation::http::HttpServer;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        error!("pdfchat exited with error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    info!(
        "Starting pdfchat on port {} (backend {})",
        settings.port, settings.api_url
    );

    let container = tokio::task::spawn_blocking({
        let settings = settings.clone();
        move || Container::from_settings(&settings)
    })
    .await??;

    HttpServer::new(container, settings.port).run().await
}
