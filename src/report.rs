// Delivery strategies for batch diagnostics

use std::path::Path;

use tracing::debug;

use crate::dialog;
use crate::engine::EncodeError;

/// Where batch progress and diagnostics go: terminal streams for the
/// headless runner, modal dialogs for the interactive one. The underlying
/// classification and abort-on-first-failure policy is identical.
pub trait Reporter {
    /// A file is about to be handed to the encoder.
    fn file_started(&self, input: &Path, output: &Path);

    /// The batch finished without an aborting failure.
    fn batch_done(&self, encoded: usize);

    /// The batch aborted; `err` is the classified failure.
    fn batch_failed(&self, err: &EncodeError);
}

/// Text-stream delivery for headless runs.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn file_started(&self, input: &Path, output: &Path) {
        println!("Encoding: {} -> {}", input.display(), output.display());
    }

    fn batch_done(&self, encoded: usize) {
        println!("Done. {encoded} file(s) encoded.");
    }

    fn batch_failed(&self, err: &EncodeError) {
        match err {
            EncodeError::DirectoryAccess { .. } => {
                eprintln!("Directory access error: {err}");
            }
            EncodeError::ToolNotInstalled(_)
            | EncodeError::EncodeFailed { .. }
            | EncodeError::PresetListFailed { .. } => {
                eprintln!("HandBrake error: {err}");
            }
            EncodeError::Unclassified(_) => {
                eprintln!("Error: {err:?}");
            }
        }
    }
}

/// Modal-dialog delivery for interactive runs. Per-file progress stays out
/// of the user's face and goes to the log instead.
pub struct DialogReporter;

impl Reporter for DialogReporter {
    fn file_started(&self, input: &Path, output: &Path) {
        debug!(input = %input.display(), output = %output.display(), "encoding");
    }

    fn batch_done(&self, encoded: usize) {
        dialog::show_info(&format!("Done. {encoded} file(s) encoded."));
    }

    fn batch_failed(&self, err: &EncodeError) {
        let message = match err {
            EncodeError::DirectoryAccess { .. } => {
                format!("Directory access error: {err}")
            }
            EncodeError::ToolNotInstalled(_)
            | EncodeError::EncodeFailed { .. }
            | EncodeError::PresetListFailed { .. } => {
                format!("HandBrake error: {err}")
            }
            EncodeError::Unclassified(_) => format!("Error: {err:?}"),
        };
        dialog::show_error(&message);
    }
}
