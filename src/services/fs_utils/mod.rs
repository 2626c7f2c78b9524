pub mod backup_flag;
pub mod path_utils;

pub use backup_flag::{BackupFlagStore, XattrFlagStore};
