//! Admin console toolkit for the webdom domain/DNS platform.
//!
//! The `client` feature provides the typed console side: session store, HTTP
//! dispatch, paginated list state. The `server` feature provides an in-memory
//! mock of the admin REST API for tests and local development.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(any(feature = "client", feature = "server"))]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;

#[cfg(feature = "client")]
pub mod api;
#[cfg(feature = "client")]
pub mod http;
#[cfg(feature = "client")]
pub mod list_page;
#[cfg(feature = "client")]
pub mod resource;
#[cfg(feature = "client")]
pub mod session;
#[cfg(feature = "client")]
pub mod storage;

#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{build_server, run};

#[cfg(feature = "server")]
mod server {
    use std::net::TcpListener;

    use actix_cors::Cors;
    use actix_web::dev::Server;
    use actix_web::{App, HttpServer, middleware, web};
    use uuid::Uuid;

    use crate::models::config::ServerConfig;
    use crate::repository::InMemoryRepository;
    use crate::routes::{configure, json_config};
    use crate::services::auth::JwtKeys;

    fn jwt_keys(config: &ServerConfig) -> JwtKeys {
        if config.jwt_secret.is_empty() {
            log::warn!("No JWT secret configured, tokens will not survive a restart");
            let secret = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
            JwtKeys::new(&secret, config.token_ttl_hours)
        } else {
            JwtKeys::new(&config.jwt_secret, config.token_ttl_hours)
        }
    }

    /// Builds the mock API server on an already bound listener.
    pub fn build_server(config: &ServerConfig, listener: TcpListener) -> std::io::Result<Server> {
        let repo = InMemoryRepository::seeded()
            .map_err(|e| std::io::Error::other(format!("Failed to seed repository: {e}")))?;
        let keys = web::Data::new(jwt_keys(config));
        let repo = web::Data::new(repo);

        if let Ok(address) = listener.local_addr() {
            log::info!("Mock admin API listening on http://{address}/api");
        }

        let server = HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Logger::default())
                .app_data(json_config())
                .app_data(repo.clone())
                .app_data(keys.clone())
                .configure(configure)
        })
        .listen(listener)?
        .run();

        Ok(server)
    }

    /// Binds the configured address and serves until shutdown.
    pub async fn run(config: ServerConfig) -> std::io::Result<()> {
        let listener = TcpListener::bind((config.address.as_str(), config.port))?;
        build_server(&config, listener)?.await
    }
}
