use std::sync::atomic::{AtomicUsize, Ordering};

use sqlx::SqlitePool;
use twilight_http::Client as HttpClient;
use twilight_model::channel::Message;
use twilight_model::user::CurrentUser;

use crate::cogs::CommandRegistry;
use crate::core::BotConfig;

#[derive(Debug, Default)]
pub struct BotStats {
    pub user_messages: AtomicUsize,
    pub bot_messages: AtomicUsize,
    pub my_messages: AtomicUsize,
    pub error_count: AtomicUsize,
    pub commands_ran: AtomicUsize,
    pub guilds: AtomicUsize,
}

impl BotStats {
    pub fn new_message(&self, ctx: &BotContext, msg: &Message) {
        if msg.author.bot {
            if ctx.is_own(msg) {
                self.my_messages.fetch_add(1, Ordering::Relaxed);
            }
            self.bot_messages.fetch_add(1, Ordering::Relaxed);
        } else {
            self.user_messages.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn had_error(&self) {
        self.error_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn new_guild(&self) {
        self.guilds.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reset_guilds(&self) {
        self.guilds.store(0, Ordering::Relaxed);
    }

    pub fn left_guild(&self) {
        self.guilds.fetch_sub(1, Ordering::Relaxed);
    }

    pub fn command_used(&self) {
        self.commands_ran.fetch_add(1, Ordering::Relaxed);
    }
}

/// Shared state for everything that happens after startup. Nothing in here
/// needs a lock: the registry and config are read-only once assembled and
/// the counters are atomics.
pub struct BotContext {
    pub config: BotConfig,
    pub http: HttpClient,
    pub pool: SqlitePool,
    pub commands: CommandRegistry,
    pub bot_user: CurrentUser,
    pub stats: BotStats,
}

impl BotContext {
    pub fn new(
        config: BotConfig,
        http: HttpClient,
        pool: SqlitePool,
        commands: CommandRegistry,
        bot_user: CurrentUser,
    ) -> Self {
        BotContext {
            config,
            http,
            pool,
            commands,
            bot_user,
            stats: BotStats::default(),
        }
    }

    /// Returns if a message was sent by us
    pub fn is_own(&self, other: &Message) -> bool {
        self.bot_user.id == other.author.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guild_counter_rebuilds_after_reidentify() {
        let stats = BotStats::default();
        stats.new_guild();
        stats.new_guild();

        // A second ready replays the same GuildCreate events
        stats.reset_guilds();
        stats.new_guild();
        stats.new_guild();

        assert_eq!(stats.guilds.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn leaving_a_guild_drops_the_counter() {
        let stats = BotStats::default();
        stats.new_guild();
        stats.new_guild();
        stats.left_guild();

        assert_eq!(stats.guilds.load(Ordering::Relaxed), 1);
    }
}

