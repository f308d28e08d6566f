//! Service context bundling all port trait objects.

use crate::adapters::live::{LiveClock, LiveFileSystem, LiveShellExecutor, ShellTestRunner, SwiftTestRunner};
use crate::manifest::Manifesto;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::shell::ShellExecutor;
use crate::ports::test_runner::TestRunner;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. A context is
/// constructed once per CLI invocation; there is no shared state between
/// invocations.
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// Shell executor for running acceptance commands.
    pub shell: Box<dyn ShellExecutor>,
    /// Test runner for the `test_passes` clause.
    pub tests: Box<dyn TestRunner>,
}

impl ServiceContext {
    /// Creates a live context with real adapters and the generic shell test
    /// runner.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            shell: Box::new(LiveShellExecutor),
            tests: Box::new(ShellTestRunner),
        }
    }

    /// Creates a live context with the test runner chosen from the
    /// manifesto's declared tech stack.
    ///
    /// Projects listing `swift` get the Swift package runner; everything
    /// else falls back to the generic shell runner.
    #[must_use]
    pub fn live_for(manifesto: &Manifesto) -> Self {
        let mut ctx = Self::live();
        if manifesto.uses_tech("swift") {
            ctx.tests = Box::new(SwiftTestRunner);
        }
        ctx
    }
}
