use std::process::ExitCode;
use std::time::Duration;

use generic_sender::client::DaprConnector;
use generic_sender::config::{Settings, load_config};
use generic_sender::destination::load_destinations;
use generic_sender::sender::{Dispatcher, Driver, clamp_interval};
use generic_sender::utils::{SenderError, logging};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let settings = match load_config() {
        Ok(settings) => settings,
        Err(e) => {
            logging::init("info");
            error!("{}", SenderError::from(e));
            return ExitCode::FAILURE;
        }
    };
    logging::init(&settings.log_level);

    match run(settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Sender failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(settings: Settings) -> Result<(), SenderError> {
    let destinations = load_destinations(settings.output_pipes.as_deref());
    let connector = DaprConnector::new(settings.sidecar.clone());

    if !destinations.is_empty() {
        if let Err(e) = connector.wait_until_ready().await {
            warn!("{}, sending anyway", e);
        }
    }

    let dispatcher = Dispatcher::new(connector, destinations);
    let destination_count = dispatcher.destinations().len();
    let mut driver = Driver::new(
        dispatcher,
        Duration::from_millis(clamp_interval(settings.interval_ms)),
    );
    info!(
        "Sending to {} destination(s) every {:?} via {}",
        destination_count,
        driver.interval(),
        settings.sidecar.endpoint
    );

    tokio::select! {
        result = driver.run() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received. Exiting.");
            Ok(())
        }
    }
}
