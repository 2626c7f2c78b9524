pub mod path_lock;

pub use path_lock::{PathLockGuard, PathLocks};
