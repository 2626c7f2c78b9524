pub mod browser;
pub mod config;
pub mod core;
pub mod explorer;
pub mod fs_utils;
