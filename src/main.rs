//! SocialPizza terminal client
//!
//! Main application entry point: loads configuration, restores or opens a
//! session, fetches the event board and catalogs in parallel and prints the
//! filtered board with the actions the viewer may take on each event.

use anyhow::Context;
use futures::try_join;
use tracing::info;

use socialpizza::{
    api::ApiClient,
    config::Settings,
    models::Viewer,
    policy::{permitted_actions, EventAction},
    state::{BoardState, EventFilter},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("loading configuration")?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the program
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting SocialPizza client...");

    let client = ApiClient::new(&settings.api)?;

    // Restore the session from the cookie, or log in with configured
    // credentials if there is none.
    let viewer = match client.current_session().await? {
        Some(viewer) => {
            logging::log_session_event(&viewer.username, "restored");
            viewer
        }
        None => {
            let credentials = settings
                .credentials
                .as_ref()
                .context("no active session and no credentials configured")?;
            let viewer = client
                .login(&credentials.email, &credentials.password)
                .await?;
            logging::log_session_event(&viewer.username, "login");
            viewer
        }
    };

    // Board and catalogs populate disjoint state, so the fetches run
    // concurrently and completion order does not matter.
    let (public, joined, categories, cities) = try_join!(
        client.public_events(),
        client.joined_events(),
        client.categories(),
        client.cities(),
    )?;

    info!(
        public = public.len(),
        joined = joined.len(),
        categories = categories.len(),
        cities = cities.len(),
        "Board loaded"
    );

    let mut board = BoardState::new();
    let token = board.begin_public_fetch();
    board.complete_public_fetch(token, public);
    board.set_joined(joined);

    print_board(&board, &viewer);

    Ok(())
}

/// Print the filtered board with each event's permitted actions
fn print_board(board: &BoardState, viewer: &Viewer) {
    let filter = EventFilter::any();
    let events = filter.apply(&board.public);

    println!("SocialPizza — event board ({})", viewer.name);
    if events.is_empty() {
        println!("  no events found");
        return;
    }

    for event in &events {
        let mut labels: Vec<&str> = permitted_actions(viewer, event, &board.joined_ids)
            .into_iter()
            .map(action_label)
            .collect();
        labels.sort_unstable();

        let joined_marker = if board.is_joined(event.id) { " [joined]" } else { "" };
        println!(
            "  #{} {} — {} @ {} [{}]{} ({})",
            event.id,
            event.event_date.format("%Y-%m-%d %H:%M"),
            event.title,
            event.restaurant.name,
            event.status,
            joined_marker,
            if labels.is_empty() {
                "no actions".to_string()
            } else {
                labels.join(", ")
            }
        );
    }
}

fn action_label(action: EventAction) -> &'static str {
    match action {
        EventAction::Join => "join",
        EventAction::Leave => "leave",
        EventAction::Withdraw => "withdraw",
        EventAction::ViewModeratorComment => "view comment",
        EventAction::ViewRejectionReason => "view rejection",
        EventAction::Approve => "approve",
        EventAction::Reject => "reject",
        EventAction::Cancel => "cancel",
        EventAction::Delete => "delete",
    }
}
