use std::sync::Arc;

use log::info;
use twilight_gateway::Event;

use crate::core::BotContext;
use crate::database::servers;
use crate::error::EventHandlerError;

/// Lifecycle events: identity logging, guild bookkeeping and making sure
/// every server we are in has a database record.
pub async fn handle_event(event: &Event, ctx: &Arc<BotContext>) -> Result<(), EventHandlerError> {
    match event {
        Event::Ready(ready) => {
            info!(
                "Logged in as {}#{} (ID: {})",
                ready.user.name, ready.user.discriminator, ready.user.id
            );

            // A re-identify replays every GuildCreate, start counting fresh
            ctx.stats.reset_guilds();

            let guild_ids: Vec<_> = ready.guilds.iter().map(|guild| guild.id).collect();
            let created = servers::reconcile(&ctx.pool, &guild_ids).await?;
            if created > 0 {
                info!("Recorded {} servers we hadn't seen before", created);
            }
        }
        Event::GuildCreate(guild) => {
            if servers::ensure_server(&ctx.pool, guild.id).await? {
                info!("Joined a new server: {} ({})", guild.name, guild.id);
            }
            ctx.stats.new_guild();
        }
        Event::GuildDelete(guild) => {
            if !guild.unavailable {
                info!("Removed from server {}", guild.id);
            }
            ctx.stats.left_guild();
        }
        Event::GatewayReconnect => info!("Reconnecting to the gateway"),
        _ => (),
    }

    Ok(())
}
