pub mod format;
pub mod session;

pub use session::{BrowserSession, Navigation, SelectionHandler, ToggleOutcome};
