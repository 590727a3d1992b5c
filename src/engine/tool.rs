// HandBrakeCLI discovery and preset listing

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use regex::Regex;
use tracing::debug;

use super::error::EncodeError;
use crate::config::Config;

/// Historical install location, used when no override is configured.
pub const DEFAULT_TOOL_PATH: &str = "/Applications/HandBrakeCLI";

/// Environment override for the HandBrakeCLI location, highest priority.
pub const TOOL_ENV_VAR: &str = "HBBATCH_TOOL";

/// Handle to the external HandBrakeCLI executable.
#[derive(Debug, Clone)]
pub struct HandBrake {
    path: PathBuf,
}

impl HandBrake {
    /// Wrap an explicit executable path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the tool location: `HBBATCH_TOOL`, then the `tool.path`
    /// config key, then the default install path.
    pub fn locate(config: &Config) -> Self {
        let path = std::env::var_os(TOOL_ENV_VAR)
            .map(PathBuf::from)
            .or_else(|| config.tool.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOOL_PATH));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fail before spawning anything when the executable is missing.
    pub(crate) fn ensure_installed(&self) -> Result<(), EncodeError> {
        if self.path.is_file() {
            Ok(())
        } else {
            Err(EncodeError::ToolNotInstalled(self.path.clone()))
        }
    }

    /// Ask the tool for its preset catalogue and parse the names out of it.
    pub fn list_presets(&self) -> Result<Vec<String>, EncodeError> {
        self.ensure_installed()?;

        let output = Command::new(&self.path)
            .arg("--preset-list")
            .output()
            .with_context(|| format!("failed to run {} --preset-list", self.path.display()))?;

        if !output.status.success() {
            return Err(EncodeError::PresetListFailed {
                status: output.status,
            });
        }

        let presets = parse_preset_list(&String::from_utf8_lossy(&output.stdout));
        debug!(count = presets.len(), "parsed preset list");
        Ok(presets)
    }
}

/// Extract preset names from `--preset-list` output.
///
/// Preset lines look like `    + Normal: ...`; a name is any run of word
/// characters and whitespace between `+ ` and the colon.
pub fn parse_preset_list(output: &str) -> Vec<String> {
    let pattern = Regex::new(r"\+ ([\w\s]+):").expect("preset pattern is valid");
    pattern
        .captures_iter(output)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_LISTING: &str = "\
< Devices
    + Universal:  -e x264  -q 20.0 -r 30
    + AppleTV:  -e x264  -q 20.0 -r 30
< Regular
    + Normal:  -e x264  -q 20.0
    + High Profile:  -e x264  -q 20.0
";

    #[test]
    fn parses_preset_names() {
        let presets = parse_preset_list(SAMPLE_LISTING);
        assert_eq!(presets, ["Universal", "AppleTV", "Normal", "High Profile"]);
    }

    #[test]
    fn keeps_multi_word_names_intact() {
        let presets = parse_preset_list("    + Very Fast 1080p30:  -e x264\n");
        assert_eq!(presets, ["Very Fast 1080p30"]);
    }

    #[test]
    fn ignores_lines_without_preset_markers() {
        let presets = parse_preset_list("HandBrake 1.0\n< Devices\nno presets here\n");
        assert!(presets.is_empty());
    }

    #[test]
    fn locate_prefers_explicit_path() {
        let tool = HandBrake::new("/opt/HandBrakeCLI");
        assert_eq!(tool.path(), Path::new("/opt/HandBrakeCLI"));
    }

    #[test]
    fn missing_tool_is_reported_before_spawn() {
        let tool = HandBrake::new("/nonexistent/HandBrakeCLI");
        let err = tool.list_presets().unwrap_err();
        assert!(matches!(err, EncodeError::ToolNotInstalled(_)));
    }

    #[cfg(unix)]
    mod with_stub_tool {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        fn stub_tool(dir: &Path, body: &str) -> HandBrake {
            let path = dir.join("HandBrakeCLI");
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            HandBrake::new(path)
        }

        #[test]
        fn lists_presets_from_tool_output() {
            let tmp = TempDir::new().unwrap();
            let tool = stub_tool(
                tmp.path(),
                "printf '    + Universal:  -e x264\\n    + AppleTV:  -e x264\\n'",
            );

            let presets = tool.list_presets().unwrap();
            assert_eq!(presets, ["Universal", "AppleTV"]);
        }

        #[test]
        fn non_zero_listing_exit_is_an_error() {
            let tmp = TempDir::new().unwrap();
            let tool = stub_tool(tmp.path(), "exit 4");

            let err = tool.list_presets().unwrap_err();
            match err {
                EncodeError::PresetListFailed { status } => {
                    assert_eq!(status.code(), Some(4));
                }
                other => panic!("expected PresetListFailed, got {other:?}"),
            }
        }
    }
}
