//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input type.

mod extract;
mod info;
mod init;
mod version;

pub use extract::{CopyTarget, ExtractInput, ExtractStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Contract shared by all command strategies.
///
/// Parsing is synchronous and in-memory, so strategies are plain blocking
/// calls.
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
