use std::sync::Arc;

use log::{debug, error, warn};
use twilight_gateway::{CloseFrame, Event, Intents, Shard, ShardId};

use crate::core::handlers::{commands, general};
use crate::core::BotContext;
use crate::error::{EventHandlerError, StartupError};

pub struct Bot;

impl Bot {
    /// Drives the gateway connection until an operator interrupt or a fatal
    /// gateway error. Reconnecting after transient failures is handled
    /// inside the shard itself.
    pub async fn run(ctx: Arc<BotContext>) -> Result<(), StartupError> {
        let mut shard = Shard::new(ShardId::ONE, ctx.config.token.clone(), Intents::all());
        debug!("Logging in...");

        loop {
            let next = tokio::select! {
                _ = tokio::signal::ctrl_c() => None,
                event = shard.next_event() => Some(event),
            };

            let event = match next {
                None => {
                    warn!("Interrupt received, shutting down...");
                    // The database goes first, the gateway connection second
                    ctx.pool.close().await;
                    if let Err(e) = shard.close(CloseFrame::NORMAL).await {
                        debug!("The gateway connection was already gone: {}", e);
                    }
                    return Ok(());
                }
                Some(Ok(event)) => event,
                Some(Err(source)) => {
                    if source.is_fatal() {
                        error!("Fatal gateway error: {}", source);
                        ctx.pool.close().await;
                        return Err(StartupError::Gateway(source));
                    }

                    warn!("Gateway error, the shard will recover: {}", source);
                    continue;
                }
            };

            let ctx = ctx.clone();
            tokio::spawn(async move {
                if let Err(e) = handle_event(event, ctx.clone()).await {
                    error!("{}", e);
                    ctx.stats.had_error();
                }
            });
        }
    }
}

async fn handle_event(event: Event, ctx: Arc<BotContext>) -> Result<(), EventHandlerError> {
    general::handle_event(&event, &ctx).await?;

    if let Event::MessageCreate(msg) = &event {
        ctx.stats.new_message(&ctx, msg);
    }

    commands::handle_event(event, ctx).await?;

    Ok(())
}
