use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};

use crate::services::browser::format::detail_text;
use crate::services::browser::{BrowserSession, ToggleOutcome};
use crate::services::config::{BrowserSettings, ConfigService};
use crate::services::explorer::listing::scan_tree;
use crate::services::explorer::types::ListingOrder;
use crate::types::errors::BrowserError;

/// Command line of the `sandbox-browser` binary.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "sandbox-browser",
    version,
    about = "List a sandbox directory with type, date, size and backup status"
)]
pub struct ListArgs {
    /// Directory to list. Defaults to the home directory.
    #[arg(value_hint = ValueHint::DirPath)]
    pub path: Option<PathBuf>,

    /// Settings file; flags given here override it.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Show file sizes.
    #[arg(long = "sizes")]
    pub show_file_size: bool,

    /// Show backup exclusion status.
    #[arg(long = "backup")]
    pub show_backup_status: bool,

    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Recursive listing down to this depth instead of a single level.
    #[arg(long = "tree", value_name = "DEPTH")]
    pub tree_depth: Option<usize>,

    /// Entry whose backup flag is toggled before listing.
    #[arg(long, value_name = "NAME")]
    pub toggle: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// File system enumeration order
    Fs,
    Name,
    NameCi,
    DirsFirst,
}

impl From<SortArg> for ListingOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Fs => ListingOrder::FileSystem,
            SortArg::Name => ListingOrder::Name,
            SortArg::NameCi => ListingOrder::NameCaseInsensitive,
            SortArg::DirsFirst => ListingOrder::DirectoriesFirst,
        }
    }
}

impl ListArgs {
    /// Settings from the config file (if any) with command line flags on top.
    pub fn settings(&self) -> BrowserSettings {
        let mut settings = self
            .config
            .as_ref()
            .map(|path| ConfigService::new(path.clone()).get_settings())
            .unwrap_or_default();

        settings.show_file_size |= self.show_file_size;
        // Toggling is only offered while backup status is shown
        settings.show_backup_status |= self.show_backup_status || self.toggle.is_some();
        if let Some(sort) = self.sort {
            settings.order = sort.into();
        }
        settings
    }
}

/// Print one listing (or tree) to `out`.
pub fn run_list<W: Write>(args: &ListArgs, out: &mut W) -> anyhow::Result<()> {
    let settings = args.settings();
    let session = match &args.path {
        Some(path) => BrowserSession::new(path.clone(), settings),
        None => BrowserSession::home(settings)?,
    };

    if let Some(name) = &args.toggle {
        let index = session
            .items()
            .iter()
            .position(|item| &item.name == name)
            .ok_or_else(|| BrowserError::InvalidArgument(format!("no entry named {name}")))?;
        match session.toggle_backup(index) {
            ToggleOutcome::Applied { excluded } => {
                let state = if excluded { "excluded from" } else { "added to" };
                writeln!(out, "{name}: {state} backup")?;
            }
            ToggleOutcome::Failed => writeln!(out, "{name}: backup flag could not be changed")?,
            ToggleOutcome::Unavailable => {}
        }
    }

    if let Some(depth) = args.tree_depth {
        for item in scan_tree(session.root(), depth) {
            let relative = item.path.strip_prefix(session.root()).unwrap_or(&item.path);
            writeln!(out, "{:<9} {}", item.icon().as_str(), relative.display())?;
        }
        return Ok(());
    }

    writeln!(out, "== {} ==", session.title())?;
    for details in session.details_all() {
        let item = &details.item;
        let suffix = if item.is_directory() { "/" } else { "" };
        writeln!(
            out,
            "{:<9} {}{}  {}",
            item.icon().as_str(),
            item.name,
            suffix,
            detail_text(&details, session.settings())
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/list_cmds_tests.rs"]
mod tests;
