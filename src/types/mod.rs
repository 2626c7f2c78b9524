pub mod errors;

pub use errors::{BrowserError, BrowserResult};
