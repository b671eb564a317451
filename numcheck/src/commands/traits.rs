//! Command trait for the numcheck CLI.

use tracing::debug;

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all numcheck commands implement.
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// Create a command from its arguments and the loaded configuration.
    fn new(args: Self::Args, config: &Config) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<()>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Builds and executes a command.
pub fn run<C: Command>(args: C::Args, config: &Config) -> Result<()> {
    debug!(command = C::name(), "running command");
    C::new(args, config).execute()
}
