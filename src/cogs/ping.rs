use std::sync::Arc;

use twilight_model::channel::Message;

use crate::cogs::{Cog, Command, CommandRegistry};
use crate::core::BotContext;
use crate::error::{CogError, CommandResult};

pub struct Ping;

impl Cog for Ping {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn register(&self, commands: &mut CommandRegistry) -> Result<(), CogError> {
        commands.register(Command::new(
            "ping",
            false,
            Box::new(|ctx, msg, _| Box::pin(ping(ctx, msg))),
        ))
    }
}

async fn ping(ctx: Arc<BotContext>, msg: Message) -> CommandResult {
    ctx.http.create_message(msg.channel_id).content("Pong!")?.await?;

    Ok(())
}
