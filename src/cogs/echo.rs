use std::sync::Arc;

use twilight_model::channel::Message;

use crate::cogs::{Cog, Command, CommandRegistry};
use crate::core::BotContext;
use crate::error::{CogError, CommandResult};

pub struct Echo;

impl Cog for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn register(&self, commands: &mut CommandRegistry) -> Result<(), CogError> {
        commands.register(Command::new(
            "echo",
            true,
            Box::new(|ctx, msg, args| Box::pin(echo(ctx, msg, args))),
        ))
    }
}

async fn echo(ctx: Arc<BotContext>, msg: Message, args: String) -> CommandResult {
    let content = if args.is_empty() { String::from("same") } else { args };

    ctx.http.create_message(msg.channel_id).content(&content)?.await?;

    Ok(())
}
