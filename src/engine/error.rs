use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failures surfaced by the batch pipeline.
///
/// Nothing is caught or retried per file; the first error aborts the batch
/// and is delivered once at the runner boundary.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("HandBrakeCLI not installed at {0}; install it or point HBBATCH_TOOL at it")]
    ToolNotInstalled(PathBuf),

    #[error("directory access failed for {path}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HandBrakeCLI failed on {input} ({status}): {stderr_tail}")]
    EncodeFailed {
        input: PathBuf,
        status: ExitStatus,
        stderr_tail: String,
    },

    #[error("HandBrakeCLI --preset-list exited with {status}")]
    PresetListFailed { status: ExitStatus },

    #[error(transparent)]
    Unclassified(#[from] anyhow::Error),
}

impl EncodeError {
    pub(crate) fn dir_access(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::DirectoryAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}
