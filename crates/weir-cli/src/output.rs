//! Output formatting for console commands.
//!
//! Supports table (human-readable), JSON, and YAML output.

use std::io::Write;

use serde::Serialize;
use weir_proto::{Objects, Status};

use crate::cli::Format;
use crate::error::CliError;

/// Output formatter dispatching on the selected format.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Get the current format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Write a value to the output in the selected format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Table => value.write_table(writer)?,
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
            }
            Format::Yaml => {
                let yaml = serde_yaml::to_string(value)
                    .map_err(|e| CliError::Format(format!("YAML serialization failed: {e}")))?;
                write!(writer, "{yaml}")?;
            }
        }
        Ok(())
    }

    /// Write a value to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string<T>(&self, value: &T) -> Result<String, CliError>
    where
        T: Serialize + TableDisplay,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as a human-readable table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

impl TableDisplay for Objects {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "Pipelines")?;
        writeln!(writer, "  {:<24} {:<8} {}", "NAME", "FILTERS", "FLOW STEPS")?;
        for pipeline in &self.pipelines {
            writeln!(
                writer,
                "  {:<24} {:<8} {}",
                pipeline.name,
                pipeline.filters.len(),
                pipeline.flow.len()
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "HTTP Servers")?;
        writeln!(writer, "  {:<24} {:<8} {}", "NAME", "PORT", "RULES")?;
        for server in &self.http_servers {
            writeln!(
                writer,
                "  {:<24} {:<8} {}",
                server.name,
                server.port,
                server.rules.len()
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "Other Objects")?;
        writeln!(writer, "  {:<24} {}", "NAME", "KIND")?;
        for object in &self.others {
            writeln!(writer, "  {:<24} {}", object.name, object.kind)?;
        }
        Ok(())
    }
}

impl TableDisplay for Status {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "  {:<24} {}", "NODE", "STATUS")?;
        for (node, status) in self {
            let status = serde_json::to_string(status)
                .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
            writeln!(writer, "  {node:<24} {status}")?;
        }
        Ok(())
    }
}
