use std::fmt;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use twilight_model::channel::Message;

use crate::cogs::{Cog, Command, CommandRegistry};
use crate::core::BotContext;
use crate::error::{CogError, CommandResult};
use crate::VERSION;

pub struct About;

impl Cog for About {
    fn name(&self) -> &'static str {
        "about"
    }

    fn register(&self, commands: &mut CommandRegistry) -> Result<(), CogError> {
        commands.register(Command::new(
            "about",
            false,
            Box::new(|ctx, msg, _| Box::pin(about(ctx, msg))),
        ))
    }
}

struct Uptime {
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl Uptime {
    fn since(launch_time: DateTime<Utc>) -> Self {
        let diff = Utc::now() - launch_time;
        Self::from_secs(diff.to_std().unwrap_or_default().as_secs())
    }

    fn from_secs(total_secs: u64) -> Self {
        let (hours, remainder) = (total_secs / 3600, total_secs % 3600);
        let (days, hours) = (hours / 24, hours % 24);
        let (minutes, seconds) = (remainder / 60, remainder % 60);

        Uptime {
            days,
            hours,
            minutes,
            seconds,
        }
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days, {} hours, {} minutes, {} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

async fn about(ctx: Arc<BotContext>, msg: Message) -> CommandResult {
    let stats = &ctx.stats;
    let description = format!(
        "I have been watching you for {}\n\
         Seen {} user messages and {} bot messages ({} were mine)\n\
         {} commands have been executed, with {} handler errors along the way\n\
         Working in {} servers\n\
         Cogbot version {}",
        Uptime::since(ctx.config.launch_time),
        stats.user_messages.load(Ordering::Relaxed),
        stats.bot_messages.load(Ordering::Relaxed),
        stats.my_messages.load(Ordering::Relaxed),
        stats.commands_ran.load(Ordering::Relaxed),
        stats.error_count.load(Ordering::Relaxed),
        stats.guilds.load(Ordering::Relaxed),
        VERSION,
    );

    ctx.http.create_message(msg.channel_id).content(&description)?.await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Uptime;

    #[test]
    fn uptime_splits_into_parts() {
        let uptime = Uptime::from_secs(90061);
        assert_eq!(uptime.days, 1);
        assert_eq!(uptime.hours, 1);
        assert_eq!(uptime.minutes, 1);
        assert_eq!(uptime.seconds, 1);
    }

    #[test]
    fn zero_uptime_renders() {
        assert_eq!(
            Uptime::from_secs(0).to_string(),
            "0 days, 0 hours, 0 minutes, 0 seconds"
        );
    }
}
