//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the SocialPizza client.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// The returned guard must be kept alive for the duration of the program,
/// otherwise buffered log lines are lost on shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "socialpizza.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log event actions (join, leave, withdraw, moderation, delete)
pub fn log_event_action(event_id: i64, action: &str, viewer: &str, details: Option<&str>) {
    info!(
        event_id = event_id,
        action = action,
        viewer = viewer,
        details = details,
        "Event action performed"
    );
}

/// Log session lifecycle events
pub fn log_session_event(username: &str, event: &str) {
    info!(username = username, event = event, "Session event");
}

/// Log admin actions
pub fn log_admin_action(admin: &str, action: &str, target: Option<&str>) {
    warn!(
        admin = admin,
        action = action,
        target = target,
        "Admin action performed"
    );
}
