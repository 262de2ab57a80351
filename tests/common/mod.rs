#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::Arc;

use webdom_admin::api::AdminConsole;
use webdom_admin::forms::login::LoginForm;
use webdom_admin::http::MemoryNavigator;
use webdom_admin::models::config::{ClientConfig, ServerConfig};
use webdom_admin::storage::{ClientStorage, MemoryStorage};

pub const JWT_SECRET: &str = "integration-test-secret";

/// A mock API server running on an ephemeral port.
pub struct TestApp {
    pub base_url: String,
}

impl TestApp {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            redirect_delay_ms: 0,
            ..ClientConfig::default()
        }
    }

    /// Console over fresh in-memory storage, sitting on `path`.
    pub fn console_at(&self, path: &str) -> (AdminConsole, Arc<MemoryStorage>, Arc<MemoryNavigator>) {
        let storage = Arc::new(MemoryStorage::new());
        let navigator = Arc::new(MemoryNavigator::new(path));
        let console = AdminConsole::with_storage(
            &self.client_config(),
            storage.clone() as Arc<dyn ClientStorage>,
            navigator.clone(),
        )
        .expect("console should build");
        (console, storage, navigator)
    }
}

/// Starts the server in the background of the current tokio runtime.
pub fn spawn_app() -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local address").port();
    let config = ServerConfig {
        jwt_secret: JWT_SECRET.to_string(),
        ..ServerConfig::default()
    };
    let server = webdom_admin::build_server(&config, listener).expect("server should start");
    tokio::spawn(server);

    TestApp {
        base_url: format!("http://127.0.0.1:{port}/api/"),
    }
}

pub fn admin_form() -> LoginForm {
    LoginForm {
        username: "admin".to_string(),
        password: "admin".to_string(),
    }
}
