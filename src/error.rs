use std::{error, fmt, io};

use twilight_gateway::error::ReceiveMessageError;
use twilight_http::response::DeserializeBodyError;
use twilight_validate::message::MessageValidationError;

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug)]
pub enum StartupError {
    MissingEnv(&'static str),
    InvalidEnv(&'static str, String),
    Logger(flexi_logger::FlexiLoggerError),
    Twilight(twilight_http::Error),
    Deserialize(DeserializeBodyError),
    Sqlx(sqlx::Error),
    Migrate(sqlx::migrate::MigrateError),
    Gateway(ReceiveMessageError),
    Io(io::Error),
}

impl error::Error for StartupError {}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::MissingEnv(name) => {
                write!(f, "Required environment variable {} is not set", name)
            }
            StartupError::InvalidEnv(name, reason) => {
                write!(f, "Environment variable {} is invalid: {}", name, reason)
            }
            StartupError::Logger(e) => write!(f, "Failed to set up the logging system: {}", e),
            StartupError::Twilight(e) => write!(f, "Twilight error during startup, unable to continue: {}", e),
            StartupError::Deserialize(e) => write!(f, "Discord sent us a response we can't read: {}", e),
            StartupError::Sqlx(e) => write!(f, "Unable to create database pool: {:?}", e),
            StartupError::Migrate(e) => write!(f, "Failed to bring the database schema up to date: {}", e),
            StartupError::Gateway(e) => write!(f, "The gateway connection failed fatally: {}", e),
            StartupError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for StartupError {
    fn from(e: flexi_logger::FlexiLoggerError) -> Self {
        StartupError::Logger(e)
    }
}

impl From<twilight_http::Error> for StartupError {
    fn from(e: twilight_http::Error) -> Self {
        StartupError::Twilight(e)
    }
}

impl From<DeserializeBodyError> for StartupError {
    fn from(e: DeserializeBodyError) -> Self {
        StartupError::Deserialize(e)
    }
}

impl From<sqlx::Error> for StartupError {
    fn from(e: sqlx::Error) -> Self {
        StartupError::Sqlx(e)
    }
}

impl From<sqlx::migrate::MigrateError> for StartupError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        StartupError::Migrate(e)
    }
}

impl From<io::Error> for StartupError {
    fn from(e: io::Error) -> Self {
        StartupError::Io(e)
    }
}

#[derive(Debug)]
pub enum DatabaseError {
    Sqlx(sqlx::Error),
}

impl error::Error for DatabaseError {}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseError::Sqlx(e) => write!(f, "Database failure: {:?}", e),
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(e: sqlx::Error) -> Self {
        DatabaseError::Sqlx(e)
    }
}

#[derive(Debug)]
pub enum CogError {
    DuplicateCommand(String),
}

impl error::Error for CogError {}

impl fmt::Display for CogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CogError::DuplicateCommand(name) => {
                write!(f, "A command named {} is already registered", name)
            }
        }
    }
}

#[derive(Debug)]
pub enum CommandError {
    Twilight(twilight_http::Error),
    InvalidMessage(MessageValidationError),
}

impl error::Error for CommandError {}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Twilight(e) => {
                write!(f, "Failed to interact with the discord api: {}", e)
            }
            CommandError::InvalidMessage(e) => {
                write!(f, "Refused to build an invalid message: {}", e)
            }
        }
    }
}

impl From<twilight_http::Error> for CommandError {
    fn from(e: twilight_http::Error) -> Self {
        CommandError::Twilight(e)
    }
}

impl From<MessageValidationError> for CommandError {
    fn from(e: MessageValidationError) -> Self {
        CommandError::InvalidMessage(e)
    }
}

#[derive(Debug)]
pub enum EventHandlerError {
    Database(DatabaseError),
    Command(CommandError),
}

impl error::Error for EventHandlerError {}

impl fmt::Display for EventHandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventHandlerError::Database(e) => write!(f, "Database interaction failed: {}", e),
            EventHandlerError::Command(e) => write!(f, "Command execution failed: {}", e),
        }
    }
}

impl From<DatabaseError> for EventHandlerError {
    fn from(e: DatabaseError) -> Self {
        EventHandlerError::Database(e)
    }
}

impl From<CommandError> for EventHandlerError {
    fn from(e: CommandError) -> Self {
        EventHandlerError::Command(e)
    }
}
