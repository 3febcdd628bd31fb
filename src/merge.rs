//! Concatenating generated labels with an external PDF tool

use crate::Result;
use crate::constants::DEFAULT_MERGE_TOOL;
use crate::error::LabelError;
use std::path::Path;
use std::process::Command;
use tracing::{debug, instrument};

/// External program invoked as `<program> <input>... <destination>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeTool {
    pub program: String,
}

impl MergeTool {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Merge `inputs`, in order, into `destination`
    #[instrument(skip(self, inputs), fields(program = %self.program, inputs = inputs.len()))]
    pub fn merge<P: AsRef<Path>>(&self, inputs: &[P], destination: &Path) -> Result<()> {
        if inputs.is_empty() {
            return Err(LabelError::MergeError("no files to merge".to_string()));
        }

        let mut command = Command::new(&self.program);
        command
            .args(inputs.iter().map(AsRef::<Path>::as_ref))
            .arg(destination);
        debug!("Running {:?}", command);

        let output = command.output()?;
        if !output.status.success() {
            return Err(LabelError::MergeError(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(())
    }
}

impl Default for MergeTool {
    fn default() -> Self {
        Self::new(DEFAULT_MERGE_TOOL)
    }
}
