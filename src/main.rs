use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info};
use tokio::runtime::Runtime;
use twilight_http::Client as HttpClient;

use crate::cogs::CommandRegistry;
use crate::core::{logging, Bot, BotConfig, BotContext};
use crate::error::StartupError;

mod cogs;
mod core;
mod database;
mod error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DATABASE_PATH: &str = "cogbot.db";

fn main() -> Result<(), StartupError> {
    let runtime = Runtime::new()?;

    runtime.block_on(real_main())?;

    runtime.shutdown_timeout(Duration::from_secs(90));
    Ok(())
}

async fn real_main() -> Result<(), StartupError> {
    logging::initialize()?;

    info!("Cogbot v{} starting!", VERSION);

    let config = BotConfig::from_env()?;
    debug!("Loaded configuration from the environment");

    let http = HttpClient::new(config.token.clone());
    // Validate the token and figure out who we are
    let user = http.current_user().await?.model().await?;
    info!(
        "Token validated, connecting to discord as {}#{}",
        user.name, user.discriminator
    );

    let pool = database::connect(DATABASE_PATH).await?;
    info!("Connected to the database, schema is up to date");

    debug!("Loading cogs...");
    let mut commands = CommandRegistry::new();
    let report = cogs::load_cogs(cogs::all_cogs(), &config.disabled_cogs, &mut commands);
    info!(
        "Loaded {} cogs with {} commands ({} disabled, {} failed to load)",
        report.loaded.len(),
        commands.len(),
        report.disabled.len(),
        report.failed.len()
    );

    let context = Arc::new(BotContext::new(config, http, pool, commands, user));

    // end of the critical failure zone, everything from here on out should be
    // properly wrapped and handled
    if let Err(e) = Bot::run(context).await {
        error!("Failed to run the bot: {}", e);
    }

    Ok(())
}
