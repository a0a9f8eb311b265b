use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inspire_hand_gesture::actuator::perform_gesture;
use inspire_hand_gesture::channel::{DdsPublisher, JsonLinePublisher};
use inspire_hand_gesture::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("inspire_hand_gesture={}", cli.log_level()).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let transport = cli.transport_config();
    let motion = cli.motion_config();

    let sent = if cli.dry_run {
        let mut publisher = JsonLinePublisher::new(transport.topic(), std::io::stdout());
        perform_gesture(&mut publisher, cli.gesture, &motion).await?
    } else {
        let mut publisher = DdsPublisher::connect(&transport)
            .with_context(|| format!("initializing DDS for hand {}", transport.hand))?;
        perform_gesture(&mut publisher, cli.gesture, &motion).await?
    };

    info!(sent, "done");
    Ok(())
}
