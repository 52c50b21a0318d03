use std::sync::Arc;

use twilight_model::channel::Message;

use crate::cogs::{Cog, Command, CommandRegistry};
use crate::core::BotContext;
use crate::error::{CogError, CommandResult};

pub struct Coinflip;

impl Cog for Coinflip {
    fn name(&self) -> &'static str {
        "coinflip"
    }

    fn register(&self, commands: &mut CommandRegistry) -> Result<(), CogError> {
        commands.register(Command::new(
            "coinflip",
            false,
            Box::new(|ctx, msg, args| Box::pin(coinflip(ctx, msg, args))),
        ))
    }
}

async fn coinflip(ctx: Arc<BotContext>, msg: Message, args: String) -> CommandResult {
    let thing_todo = if args.is_empty() { String::from("do it") } else { args };

    let message_text = if rand::random() {
        format!("Yes, you should absolutely {}", thing_todo)
    } else {
        format!("No, you should probably not {}", thing_todo)
    };

    ctx.http.create_message(msg.channel_id).content(&message_text)?.await?;

    Ok(())
}
