use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use log::{debug, error};
use twilight_model::channel::Message;

use crate::core::BotContext;
use crate::error::{CogError, CommandResult};

mod about;
mod coinflip;
mod echo;
mod ping;
mod uid;

type BoxedCommandFuture = Pin<Box<dyn Future<Output = CommandResult> + Send>>;
pub type CommandHandler = Box<dyn Fn(Arc<BotContext>, Message, String) -> BoxedCommandFuture + Send + Sync>;

pub struct Command {
    name: &'static str,
    owner_only: bool,
    handler: CommandHandler,
}

impl Command {
    pub fn new(name: &'static str, owner_only: bool, handler: CommandHandler) -> Self {
        Command {
            name,
            owner_only,
            handler,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn owner_only(&self) -> bool {
        self.owner_only
    }

    pub async fn execute(&self, ctx: Arc<BotContext>, msg: Message, args: String) -> CommandResult {
        (self.handler)(ctx, msg, args).await
    }
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Command) -> Result<(), CogError> {
        if self.commands.contains_key(command.name()) {
            return Err(CogError::DuplicateCommand(command.name().to_string()));
        }
        self.commands.insert(command.name(), command);

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

/// An independently loadable bundle of command handling logic. Cogs only
/// interact with the rest of the bot through the commands they register.
pub trait Cog: Send + Sync {
    fn name(&self) -> &'static str;

    fn register(&self, commands: &mut CommandRegistry) -> Result<(), CogError>;
}

pub fn all_cogs() -> Vec<Box<dyn Cog>> {
    vec![
        Box::new(about::About),
        Box::new(coinflip::Coinflip),
        Box::new(echo::Echo),
        Box::new(ping::Ping),
        Box::new(uid::Uid),
    ]
}

#[derive(Default)]
pub struct LoadReport {
    pub loaded: Vec<&'static str>,
    pub disabled: Vec<&'static str>,
    pub failed: Vec<(&'static str, CogError)>,
}

/// Loads every cog that is not on the disabled list. A cog that fails to
/// register is logged and skipped, it never takes the rest of the startup
/// down with it.
pub fn load_cogs(
    mut cogs: Vec<Box<dyn Cog>>,
    disabled: &HashSet<String>,
    commands: &mut CommandRegistry,
) -> LoadReport {
    // Load order is deterministic no matter how the list was assembled
    cogs.sort_unstable_by_key(|cog| cog.name());

    let mut report = LoadReport::default();
    for cog in cogs {
        let name = cog.name();

        if disabled.contains(name) {
            debug!("DISABLED - {}", name);
            report.disabled.push(name);
            continue;
        }

        match cog.register(commands) {
            Ok(()) => {
                debug!("LOADED - {}", name);
                report.loaded.push(name);
            }
            Err(e) => {
                error!("Failed to load cog {}: {}", name, e);
                report.failed.push((name, e));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestCog {
        name: &'static str,
        commands: &'static [&'static str],
    }

    impl Cog for TestCog {
        fn name(&self) -> &'static str {
            self.name
        }

        fn register(&self, commands: &mut CommandRegistry) -> Result<(), CogError> {
            for name in self.commands {
                commands.register(Command::new(
                    name,
                    false,
                    Box::new(|_, _, _| Box::pin(async { Ok(()) })),
                ))?;
            }

            Ok(())
        }
    }

    fn cog(name: &'static str, commands: &'static [&'static str]) -> Box<dyn Cog> {
        Box::new(TestCog { name, commands })
    }

    #[test]
    fn disabled_cogs_are_never_registered() {
        let cogs = vec![cog("foo", &["foo"]), cog("bar", &["bar"]), cog("baz", &["baz"])];
        let disabled = ["foo", "bar"].into_iter().map(String::from).collect();

        let mut registry = CommandRegistry::new();
        let report = load_cogs(cogs, &disabled, &mut registry);

        assert_eq!(report.loaded, vec!["baz"]);
        assert_eq!(report.disabled.len(), 2);
        assert!(report.failed.is_empty());
        assert!(registry.get("baz").is_some());
        assert!(registry.get("foo").is_none());
        assert!(registry.get("bar").is_none());
    }

    #[test]
    fn each_disabled_cog_is_reported_once() {
        let cogs = vec![cog("foo", &["foo"]), cog("bar", &["bar"])];
        let disabled = ["foo", "bar"].into_iter().map(String::from).collect();

        let report = load_cogs(cogs, &disabled, &mut CommandRegistry::new());

        assert_eq!(report.disabled, vec!["bar", "foo"]);
    }

    #[test]
    fn one_bad_cog_does_not_stop_the_others() {
        // "broken" collides with the command "alpha" already registered,
        // whichever order the cogs were handed over in
        for cogs in [
            vec![cog("alpha", &["alpha"]), cog("broken", &["alpha"]), cog("omega", &["omega"])],
            vec![cog("omega", &["omega"]), cog("broken", &["alpha"]), cog("alpha", &["alpha"])],
        ] {
            let mut registry = CommandRegistry::new();
            let report = load_cogs(cogs, &HashSet::new(), &mut registry);

            assert_eq!(report.loaded, vec!["alpha", "omega"]);
            assert_eq!(report.failed.len(), 1);
            assert_eq!(report.failed[0].0, "broken");
            assert!(registry.get("omega").is_some());
        }
    }

    #[test]
    fn load_order_is_lexicographic() {
        let cogs = vec![cog("zeta", &["zeta"]), cog("alpha", &["alpha"]), cog("mid", &["mid"])];

        let report = load_cogs(cogs, &HashSet::new(), &mut CommandRegistry::new());

        assert_eq!(report.loaded, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn duplicate_command_registration_fails() {
        let mut registry = CommandRegistry::new();
        registry
            .register(Command::new("ping", false, Box::new(|_, _, _| Box::pin(async { Ok(()) }))))
            .unwrap();

        let err = registry
            .register(Command::new("ping", false, Box::new(|_, _, _| Box::pin(async { Ok(()) }))))
            .unwrap_err();

        assert!(matches!(err, CogError::DuplicateCommand(name) if name == "ping"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn builtin_cogs_all_load() {
        let mut registry = CommandRegistry::new();
        let report = load_cogs(all_cogs(), &HashSet::new(), &mut registry);

        assert_eq!(report.loaded, vec!["about", "coinflip", "echo", "ping", "uid"]);
        assert!(report.failed.is_empty());
        assert_eq!(registry.len(), 5);
    }
}
