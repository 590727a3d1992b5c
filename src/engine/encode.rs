// Output naming and synchronous HandBrakeCLI invocation

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use tracing::debug;

use super::error::EncodeError;
use super::tool::HandBrake;

/// Fixed output container extension.
const OUTPUT_EXTENSION: &str = "m4v";

/// Number of trailing basename characters replaced by the output extension.
/// Fixed width, not extension-aware; output names must stay bit-exact with
/// the original tool's naming.
const SUFFIX_WIDTH: usize = 4;

/// How many trailing stderr lines to keep in an encode failure.
const STDERR_TAIL_LINES: usize = 5;

/// Derive the output path for `input` inside `out_dir`.
///
/// The input's base name loses its last four characters and gains `.m4v`:
/// `movie.mp4` becomes `movie.m4v`. The strip is per character, never
/// per byte, so multi-byte names cannot be split mid-sequence.
pub fn derive_output_path(input: &Path, out_dir: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let kept = name.chars().count().saturating_sub(SUFFIX_WIDTH);
    let stem: String = name.chars().take(kept).collect();
    out_dir.join(format!("{stem}.{OUTPUT_EXTENSION}"))
}

/// Encode one file with the given preset, blocking until HandBrakeCLI exits.
///
/// A non-zero exit from the tool is a first-class failure carrying the exit
/// status and the tail of its stderr.
pub fn encode_file(
    tool: &HandBrake,
    input: &Path,
    out_dir: &Path,
    preset: &str,
) -> Result<(), EncodeError> {
    tool.ensure_installed()?;

    let output_path = derive_output_path(input, out_dir);
    debug!(
        input = %input.display(),
        output = %output_path.display(),
        preset,
        "spawning HandBrakeCLI",
    );

    let output = Command::new(tool.path())
        .arg("-Z")
        .arg(preset)
        .arg("-i")
        .arg(input)
        .arg("-o")
        .arg(&output_path)
        .output()
        .with_context(|| format!("failed to run {}", tool.path().display()))?;

    if !output.status.success() {
        return Err(EncodeError::EncodeFailed {
            input: input.to_path_buf(),
            status: output.status,
            stderr_tail: stderr_tail(&output.stderr),
        });
    }

    Ok(())
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let skip = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[skip..].join(" | ")
}
