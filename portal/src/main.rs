//! Admin-side display shell: logs in the admin account, runs the rotation
//! controller, and prints each token as it would be rendered for scanning.
//! Ctrl-C tears the rotation timer down; the session stays persisted.

use common::config::Config;
use common::logger::init_logger;
use db::store::KeyValueStore;
use services::auth::{AuthService, LoginRequest};
use services::directory::{AcceptAllVerifier, MockDirectory};
use services::rotation::RotationController;
use services::session::SessionHandle;
use services::token::TokenGenerator;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let config = Config::init(".env");
    init_logger(&config.log_level, &config.log_file);

    println!("Starting {}", config.project_name);

    let store: Arc<dyn KeyValueStore> = match db::open() {
        Ok(store) => Arc::new(store),
        Err(err) => {
            log::error!("cannot open the portal store: {err}");
            return;
        }
    };

    let auth = AuthService::new(
        Arc::new(MockDirectory::seeded()),
        Arc::new(AcceptAllVerifier),
        SessionHandle::new(store),
    )
    .with_latency(Duration::from_millis(config.login_latency_ms));

    let admin = match auth.restore() {
        Ok(Some(user)) => {
            log::info!("restored session for {}", user.username);
            user
        }
        _ => {
            let request = LoginRequest {
                username: "admin1".into(),
                password: String::new(),
                role: db::models::user::Role::Admin,
            };
            match auth.login(&request).await {
                Ok(user) => user,
                Err(err) => {
                    log::error!("admin login failed: {err}");
                    return;
                }
            }
        }
    };
    println!("Signed in as {} ({})", admin.name, admin.role);

    let controller =
        RotationController::with_window(TokenGenerator, config.rotation_seconds);
    let mut feed = controller.subscribe();

    let first = controller.display();
    println!(
        "Scan code: {}  ({}s remaining)",
        first.encodable_value, first.remaining_seconds
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = feed.changed() => {
                if changed.is_err() {
                    break;
                }
                let display = feed.borrow().clone();
                if display.remaining_seconds == config.rotation_seconds {
                    println!(
                        "Scan code: {}  ({}s remaining)",
                        display.encodable_value, display.remaining_seconds
                    );
                }
            }
        }
    }

    controller.shutdown();
    log::info!("rotation stopped; session left open for the next start");
}
