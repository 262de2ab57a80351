#![cfg(all(feature = "client", feature = "server"))]

use std::sync::Arc;

use webdom_admin::api::{AdminConsole, ListEndpoint};
use webdom_admin::domain::types::{AdminId, UserId};
use webdom_admin::dto::query::{DomainQuery, UserQuery};
use webdom_admin::forms::FormError;
use webdom_admin::forms::ban::{BanForm, OTHER_REASON};
use webdom_admin::forms::login::LoginForm;
use webdom_admin::http::{ClientError, MemoryNavigator};
use webdom_admin::list_page::ListPage;
use webdom_admin::models::config::ClientConfig;
use webdom_admin::storage::{ADMIN_INFO_KEY, ADMIN_TOKEN_KEY, ClientStorage, LEGACY_TOKEN_KEY};

mod common;

#[tokio::test]
async fn login_persists_a_session_that_a_restart_rehydrates() {
    let app = common::spawn_app();
    let dir = tempfile::tempdir().unwrap();
    let config = ClientConfig {
        storage_path: Some(dir.path().join("session.json")),
        ..app.client_config()
    };

    let console = AdminConsole::new(&config, Arc::new(MemoryNavigator::default())).unwrap();
    assert!(!console.session.is_authenticated());

    let response = console.admin.login(common::admin_form()).await.unwrap();
    assert_eq!(response.code, 200);
    assert!(!response.data.token.is_empty());
    assert_eq!(response.data.admin.username, "admin");
    assert!(console.session.is_authenticated());

    // A new console over the same file is signed in before any request is made.
    let restarted = AdminConsole::new(&config, Arc::new(MemoryNavigator::default())).unwrap();
    assert!(restarted.session.is_authenticated());
    assert!(restarted.session.initialize_from_storage());
    assert_eq!(restarted.session.token(), Some(response.data.token.clone()));

    let admin = restarted
        .admin
        .get_admin(AdminId::new(1).unwrap())
        .await
        .unwrap();
    assert_eq!(admin.data.username, "admin");
}

#[tokio::test]
async fn keyword_search_returns_the_matching_domains() {
    let app = common::spawn_app();
    let (console, _, _) = app.console_at("/domains");
    console.admin.login(common::admin_form()).await.unwrap();

    let mut page = ListPage::new(Arc::new(console.domains.clone()));
    page.mount().await.unwrap();
    assert_eq!(page.state().pagination.total, 5);

    page.submit_keyword("example").await.unwrap();
    let state = page.state();
    assert_eq!(state.pagination.total, 2);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.pagination.total_pages, 1);
    assert!(!state.loading);
    assert!(state
        .items
        .iter()
        .all(|d| d.full_domain.contains("example")));
}

#[tokio::test]
async fn rejected_token_tears_down_the_session_and_redirects_to_login() {
    let app = common::spawn_app();
    let (console, storage, navigator) = app.console_at("/users");
    storage.set(ADMIN_TOKEN_KEY, "not-a-jwt").unwrap();
    storage.set(ADMIN_INFO_KEY, "{}").unwrap();
    storage.set(LEGACY_TOKEN_KEY, "stale").unwrap();

    let error = console
        .users
        .fetch_page(&UserQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(error, ClientError::Unauthorized));
    assert_eq!(storage.get(ADMIN_TOKEN_KEY), None);
    assert_eq!(storage.get(ADMIN_INFO_KEY), None);
    assert_eq!(storage.get(LEGACY_TOKEN_KEY), None);
    assert_eq!(navigator.history(), vec!["/".to_string()]);
    assert!(!console.session.is_authenticated());
}

#[tokio::test]
async fn unauthorized_on_the_login_screen_does_not_redirect() {
    let app = common::spawn_app();
    let (console, _, navigator) = app.console_at("/");

    let error = console
        .domains
        .fetch_page(&DomainQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(error, ClientError::Unauthorized));
    assert!(navigator.history().is_empty());
}

#[tokio::test]
async fn wrong_password_is_a_bad_request() {
    let app = common::spawn_app();
    let (console, storage, _) = app.console_at("/");

    let error = console
        .admin
        .login(LoginForm {
            username: "admin".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    match error {
        ClientError::Http { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid username or password");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(storage.get(ADMIN_TOKEN_KEY), None);
}

#[tokio::test]
async fn blank_credentials_never_leave_the_client() {
    let app = common::spawn_app();
    let (console, _, _) = app.console_at("/");

    let error = console
        .admin
        .login(LoginForm {
            username: " ".to_string(),
            password: String::new(),
        })
        .await
        .unwrap_err();

    assert!(matches!(error, ClientError::Form(FormError::Validation(_))));
}

#[tokio::test]
async fn ban_lifecycle() {
    let app = common::spawn_app();
    let (console, _, _) = app.console_at("/users");
    console.admin.login(common::admin_form()).await.unwrap();
    let bob = UserId::new(2).unwrap();

    assert!(!console.bans.ban_status(bob).await.unwrap().data);

    let banned = console
        .bans
        .ban_user(BanForm {
            user_id: 2,
            reason: OTHER_REASON.to_string(),
            custom_reason: Some("  resold free subdomains ".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(banned.code, 200);

    let details = console.bans.ban_details(bob).await.unwrap().data;
    assert!(details.is_banned);
    assert_eq!(details.ban_reason.as_deref(), Some("resold free subdomains"));
    assert_eq!(details.banned_by, Some(AdminId::new(1).unwrap()));

    let again = console
        .bans
        .ban_user(BanForm {
            user_id: 2,
            reason: OTHER_REASON.to_string(),
            custom_reason: Some("twice".to_string()),
        })
        .await
        .unwrap_err();
    assert!(matches!(again, ClientError::Http { status: 409, .. }));

    console.bans.unban_user(bob).await.unwrap();
    assert!(!console.bans.ban_status(bob).await.unwrap().data);
}

#[tokio::test]
async fn overlong_ban_reason_is_rejected_locally() {
    let app = common::spawn_app();
    let (console, _, _) = app.console_at("/users");

    let error = console
        .bans
        .ban_user(BanForm {
            user_id: 2,
            reason: OTHER_REASON.to_string(),
            custom_reason: Some("x".repeat(501)),
        })
        .await
        .unwrap_err();

    assert!(matches!(error, ClientError::Form(_)));
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let app = common::spawn_app();
    let (console, _, _) = app.console_at("/users");
    console.admin.login(common::admin_form()).await.unwrap();

    let error = console
        .bans
        .ban_details(UserId::new(404).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(error, ClientError::Http { status: 404, .. }));
}

#[tokio::test]
async fn logout_signs_out_locally() {
    let app = common::spawn_app();
    let (console, storage, _) = app.console_at("/users");
    console.admin.login(common::admin_form()).await.unwrap();
    assert!(storage.get(ADMIN_TOKEN_KEY).is_some());

    console.admin.logout().unwrap();
    assert!(!console.session.is_authenticated());
    assert_eq!(storage.get(ADMIN_TOKEN_KEY), None);
    assert_eq!(storage.get(ADMIN_INFO_KEY), None);
}
