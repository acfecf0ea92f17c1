use actix_web::{web, App, HttpServer};
use beam_sword_api::config::AppConfig;
use beam_sword_api::handlers;
use beam_sword_api::helpers::clients::{create_bookkeeping_agent, create_lark_client};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => {
            error!("Failed to read .env file: {}", e);
            std::process::exit(1);
        }
    }

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let agent = match create_bookkeeping_agent(&config.llm) {
        Ok(agent) => web::Data::new(agent),
        Err(e) => {
            error!("Failed to create LLM client: {:#}", e);
            std::process::exit(1);
        }
    };

    let lark = match create_lark_client(&config.lark) {
        Ok(client) => web::Data::new(client),
        Err(e) => {
            error!("Failed to create Lark client: {:#}", e);
            std::process::exit(1);
        }
    };

    let host = config.server.host.clone();
    let port = config.server.port;
    info!(model = %config.llm.model, "Starting beam-sword server at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(agent.clone())
            .app_data(lark.clone())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
