//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (time, filesystem, shell, test runner). Implementations
//! live in `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod shell;
pub mod test_runner;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use shell::{ShellExecutor, ShellOutput};
pub use test_runner::{TestOutcome, TestRunner};
