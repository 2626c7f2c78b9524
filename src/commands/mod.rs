//! Terminal front-end over the browsing core.

pub mod list_cmds;

pub use list_cmds::{run_list, ListArgs, SortArg};
