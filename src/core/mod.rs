pub use bot::Bot;
pub use bot_config::BotConfig;
pub use context::BotContext;

mod bot;
mod bot_config;
mod context;
mod handlers;
pub mod logging;
