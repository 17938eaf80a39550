use chrono::Local;
use tracing::{error, info, warn};

use train_alert::config::AppConfig;
use train_alert::domain::{Outcome, TripQuery};
use train_alert::monitor::check_departure;
use train_alert::navitia::{NavitiaClient, NavitiaConfig};
use train_alert::telegram::{TelegramClient, TelegramConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            error!(%error, "configuration is incomplete");
            std::process::exit(1);
        }
    };

    let navitia = match NavitiaClient::new(NavitiaConfig::new(&config.sncf_api_key)) {
        Ok(client) => client,
        Err(error) => {
            error!(%error, "failed to create Navitia client");
            std::process::exit(1);
        }
    };

    let telegram = match TelegramClient::new(TelegramConfig::new(&config.telegram_bot_token)) {
        Ok(client) => client,
        Err(error) => {
            error!(%error, "failed to create Telegram client");
            std::process::exit(1);
        }
    };

    let departure = Local::now().date_naive().and_time(config.train_time);
    let query = TripQuery::new(
        config.departure_stop.clone(),
        config.intermediate_stop.clone(),
        departure,
        config.line.clone(),
    );

    info!(from = %query.from, to = %query.to, departure = %query.departure, "checking monitored departure");

    // Run the check on its own task: a panic surfaces as a join error
    // here, so a best-effort notification still goes out.
    let check = {
        let navitia = navitia.clone();
        let query = query.clone();
        tokio::spawn(async move { check_departure(&navitia, &query).await })
    };

    let outcome = match check.await {
        Ok(outcome) => outcome,
        Err(error) => Outcome::check_failed(&error),
    };

    info!(status = ?outcome.status, "check complete");

    if let Err(error) = telegram
        .send_message(&config.telegram_chat_id, &outcome.message)
        .await
    {
        warn!(%error, "failed to send notification");
    }
}
