//! Object lifecycle commands: list, create, update, delete.

use std::io::Write;
use std::path::Path;

use weir_client::{Client, yaml};

use crate::error::CliError;
use crate::output::OutputFormat;

/// Executor for object lifecycle commands.
pub struct ObjectCommand<'a> {
    client: &'a Client,
}

impl<'a> ObjectCommand<'a> {
    /// Create a new object command executor.
    #[must_use]
    pub const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List all objects, grouped by kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or output fails.
    pub async fn list<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
    ) -> Result<(), CliError> {
        let objects = self.client.objects().await?;
        format.write(writer, &objects)?;
        Ok(())
    }

    /// Create an object from a YAML spec file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable, the YAML invalid, or the
    /// request fails.
    pub async fn create<W: Write>(&self, writer: &mut W, file: &Path) -> Result<(), CliError> {
        let spec = std::fs::read_to_string(file)?;
        let object = yaml::object_from_yaml(&spec)?;
        self.client.create_object(&spec).await?;
        writeln!(writer, "{} {} created", object.kind, object.name)?;
        Ok(())
    }

    /// Replace an existing object with a YAML spec file.
    ///
    /// The spec must name an object that already exists on the cluster and
    /// must not change its kind; both are checked before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the guard fails or the request fails.
    pub async fn update<W: Write>(&self, writer: &mut W, file: &Path) -> Result<(), CliError> {
        let spec = std::fs::read_to_string(file)?;
        let edited = yaml::object_from_yaml(&spec)?;

        let objects = self.client.objects().await?;
        match objects.kind_of(&edited.name) {
            None => return Err(CliError::NotFound(edited.name)),
            Some(kind) if kind != edited.kind => {
                return Err(CliError::InvalidArgument(format!(
                    "cannot change kind of {} from {kind} to {}",
                    edited.name, edited.kind
                )));
            }
            Some(_) => {}
        }

        self.client.update_object(&edited, &spec).await?;
        writeln!(writer, "{} {} updated", edited.kind, edited.name)?;
        Ok(())
    }

    /// Delete an object by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete<W: Write>(&self, writer: &mut W, name: &str) -> Result<(), CliError> {
        self.client.delete_object(name).await?;
        writeln!(writer, "{name} deleted")?;
        Ok(())
    }
}
