use std::env;

use dotenvy::dotenv;
use env_logger::Env;
use webdom_admin::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config_path = env::var("WEBDOM_CONFIG").unwrap_or_else(|_| "config/default".to_string());
    let server_config = match ServerConfig::load(Some(&config_path)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load server config: {e}");
            std::process::exit(1);
        }
    };

    webdom_admin::run(server_config).await
}
