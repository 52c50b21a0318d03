use std::collections::HashSet;
use std::env;

use chrono::{DateTime, Utc};

use crate::error::StartupError;

/// Everything the bot needs to know before it can go online. Assembled once
/// at startup and immutable afterwards.
pub struct BotConfig {
    pub token: String,
    pub prefix: String,
    pub launch_time: DateTime<Utc>,
    pub owner_ids: HashSet<u64>,
    pub disabled_cogs: HashSet<String>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, StartupError> {
        // A missing .env file is fine, plain environment variables work too
        dotenvy::dotenv().ok();

        Ok(BotConfig {
            token: required("TOKEN")?,
            prefix: required("PREFIX")?,
            launch_time: Utc::now(),
            owner_ids: parse_id_set("OWNER_IDS", &required("OWNER_IDS")?)?,
            disabled_cogs: parse_name_set(&required("DISABLED_COGS")?),
        })
    }

    pub fn is_owner(&self, user_id: u64) -> bool {
        self.owner_ids.contains(&user_id)
    }
}

fn required(name: &'static str) -> Result<String, StartupError> {
    env::var(name).map_err(|_| StartupError::MissingEnv(name))
}

// Tokens are used as-is, no whitespace trimming. Empty tokens are dropped so
// an empty variable parses to an empty set.
fn parse_id_set(name: &'static str, raw: &str) -> Result<HashSet<u64>, StartupError> {
    raw.split(',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u64>()
                .map_err(|_| StartupError::InvalidEnv(name, format!("`{}` is not a valid id", token)))
        })
        .collect()
}

fn parse_name_set(raw: &str) -> HashSet<String> {
    raw.split(',')
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_ids_parse_to_integers() {
        let ids = parse_id_set("OWNER_IDS", "1,2,3").unwrap();
        let expected: HashSet<u64> = [1, 2, 3].into_iter().collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn empty_id_list_is_an_empty_set() {
        assert!(parse_id_set("OWNER_IDS", "").unwrap().is_empty());
    }

    #[test]
    fn missing_variable_is_a_descriptive_error() {
        let err = required("COGBOT_THIS_VAR_IS_NEVER_SET").unwrap_err();
        assert!(matches!(
            err,
            StartupError::MissingEnv("COGBOT_THIS_VAR_IS_NEVER_SET")
        ));
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let err = parse_id_set("OWNER_IDS", "1,abc").unwrap_err();
        assert!(matches!(err, StartupError::InvalidEnv("OWNER_IDS", _)));
    }

    #[test]
    fn id_tokens_are_not_trimmed() {
        // " 2" is not a valid id, whitespace around tokens is the operator's problem
        assert!(parse_id_set("OWNER_IDS", "1, 2").is_err());
    }

    #[test]
    fn cog_names_parse_to_a_set() {
        let names = parse_name_set("foo,bar,foo");
        assert_eq!(names.len(), 2);
        assert!(names.contains("foo"));
        assert!(names.contains("bar"));
    }

    #[test]
    fn empty_cog_list_is_an_empty_set() {
        assert!(parse_name_set("").is_empty());
    }
}
