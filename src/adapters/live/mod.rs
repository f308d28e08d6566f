//! Live adapters for real external interactions.

pub mod clock;
pub mod filesystem;
pub mod shell;
pub mod test_runner;

pub use clock::LiveClock;
pub use filesystem::LiveFileSystem;
pub use shell::LiveShellExecutor;
pub use test_runner::{ShellTestRunner, SwiftTestRunner};
