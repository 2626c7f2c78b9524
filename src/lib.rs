use std::io::Write;

use clap::Parser;

pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::browser::{BrowserSession, Navigation, ToggleOutcome};
pub use services::explorer::metadata::{
    backup_status, modification_date, set_backup_excluded, size,
};
pub use services::explorer::{list_directory, BackupStatus, FileItem, FileType};

/// Entry point of the `sandbox-browser` binary.
pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = commands::ListArgs::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run_list(&args, &mut out)?;
    out.flush()?;
    Ok(())
}
