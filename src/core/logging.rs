use flexi_logger::{Age, Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use log::error;
use once_cell::sync::OnceCell;

use crate::error::StartupError;

// The handle has to stay alive for the duration of the process, dropping it
// shuts the writers down.
static LOGGER_HANDLE: OnceCell<LoggerHandle> = OnceCell::new();

/// Sets up the process-wide logger: a daily-rotated file under `logs/` plus
/// a colored duplicate on stderr. The default level is info, overridable
/// through `RUST_LOG`.
pub fn initialize() -> Result<(), StartupError> {
    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(FileSpec::default().directory("logs").basename("cogbot"))
        .format_for_files(flexi_logger::detailed_format)
        .duplicate_to_stderr(Duplicate::Debug)
        .format_for_stderr(flexi_logger::colored_opt_format)
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogAndCompressedFiles(10, 30),
        )
        .start()?;

    if LOGGER_HANDLE.set(handle).is_err() {
        error!("The logging system was attempted to be initialized a second time!");
    }

    Ok(())
}
