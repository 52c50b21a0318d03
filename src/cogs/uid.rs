use std::sync::Arc;

use twilight_model::channel::Message;

use crate::cogs::{Cog, Command, CommandRegistry};
use crate::core::BotContext;
use crate::error::{CogError, CommandResult};

pub struct Uid;

impl Cog for Uid {
    fn name(&self) -> &'static str {
        "uid"
    }

    fn register(&self, commands: &mut CommandRegistry) -> Result<(), CogError> {
        commands.register(Command::new(
            "uid",
            false,
            Box::new(|ctx, msg, _| Box::pin(uid(ctx, msg))),
        ))
    }
}

async fn uid(ctx: Arc<BotContext>, msg: Message) -> CommandResult {
    let reply = format!("Your user id is {}", msg.author.id);

    ctx.http.create_message(msg.channel_id).content(&reply)?.await?;

    Ok(())
}
