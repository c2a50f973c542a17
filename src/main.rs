use std::sync::Arc;

use color_eyre::eyre::{bail, Result};
use dotenv::dotenv;
use edt_client::{config::ClientConfig, ApiClient};
use edt_core::grid;
use edt_view::{personal::PersonalWeekView, session::Session};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ClientConfig::from_env()?;

    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Open a session: resume from a stored token, or log in with credentials
    let client = Arc::new(ApiClient::new(&config));
    let session = match Session::establish(client.clone()).await {
        Some(session) => session,
        None => match (&config.email, &config.password) {
            (Some(email), Some(password)) => {
                Session::login(client.clone(), email, password).await?
            }
            _ => bail!("no valid session: set EDT_TOKEN or EDT_EMAIL/EDT_PASSWORD"),
        },
    };

    // Fetch and render the user's week
    let mut view = PersonalWeekView::new(session.backend());
    view.load(&session.user).await;

    println!(
        "Emploi du temps de {} {} ({} cours)",
        session.user.prenom,
        session.user.nom,
        view.slots().len()
    );

    let mut positioned = view.positioned();
    positioned.sort_by_key(|(slot, _)| (slot.day.number(), slot.start));
    for (slot, position) in positioned {
        println!(
            "{:<9} {}-{}  {:<30} {:<20} {:<10} [top {:>5.0}px, h {:>4.0}px, col {:.1}%]",
            slot.day.name(),
            slot.start.format("%H:%M"),
            slot.end.format("%H:%M"),
            slot.subject,
            slot.teacher,
            slot.room,
            position.top,
            position.height,
            position.left_pct,
        );
    }

    if view.slots().is_empty() {
        println!(
            "(aucun cours: grille de {} jours x {} heures vide)",
            grid::DAY_COLUMNS,
            grid::HOUR_ROWS
        );
    }

    session.logout();
    Ok(())
}
