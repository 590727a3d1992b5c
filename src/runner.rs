// Shared enumerate-then-encode pipeline for both front ends

use std::fs;
use std::path::Path;

use tracing::info;

use crate::engine::{self, EncodeError, HandBrake};
use crate::report::Reporter;

/// Exit code for any runtime failure during a batch.
pub const EXIT_FAILURE: i32 = 1;

/// Run one batch: create the output directory, enumerate the inputs, and
/// encode them sequentially in enumeration order. The first failure of any
/// kind aborts the remaining files; there is no per-file retry.
pub fn run_batch(
    tool: &HandBrake,
    in_dir: &Path,
    out_dir: &Path,
    recursive: bool,
    preset: &str,
    reporter: &dyn Reporter,
) -> i32 {
    match encode_all(tool, in_dir, out_dir, recursive, preset, reporter) {
        Ok(encoded) => {
            reporter.batch_done(encoded);
            0
        }
        Err(err) => {
            reporter.batch_failed(&err);
            EXIT_FAILURE
        }
    }
}

fn encode_all(
    tool: &HandBrake,
    in_dir: &Path,
    out_dir: &Path,
    recursive: bool,
    preset: &str,
    reporter: &dyn Reporter,
) -> Result<usize, EncodeError> {
    fs::create_dir_all(out_dir).map_err(|source| EncodeError::dir_access(out_dir, source))?;

    let files = engine::enumerate_files(in_dir, recursive)?;
    info!(count = files.len(), root = %in_dir.display(), "enumerated input files");

    for input in &files {
        let output = engine::derive_output_path(input, out_dir);
        reporter.file_started(input, &output);
        engine::encode_file(tool, input, out_dir, preset)?;
    }

    Ok(files.len())
}
