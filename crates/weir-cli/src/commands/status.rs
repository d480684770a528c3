//! Per-node object status command.

use std::io::Write;

use weir_client::Client;

use crate::error::CliError;
use crate::output::OutputFormat;

/// Executor for the status command.
pub struct StatusCommand<'a> {
    client: &'a Client,
}

impl<'a> StatusCommand<'a> {
    /// Create a new status command executor.
    #[must_use]
    pub const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Show the per-node status of one object.
    ///
    /// Nodes that report other objects are dropped by the client layer; an
    /// object reported by no node produces empty output, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or output fails.
    pub async fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        name: &str,
    ) -> Result<(), CliError> {
        let status = self.client.object_status(name).await?;
        format.write(writer, &status)?;
        Ok(())
    }
}
