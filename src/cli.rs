use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hbbatch")]
#[command(about = "Batch encode a directory of video files using HandBrake presets", long_about = None)]
pub struct Cli {
    /// Input directory. Both -i and -o are needed to run headless
    #[arg(long = "in-directory", short = 'i', value_name = "DIR")]
    pub in_directory: Option<PathBuf>,

    /// Output directory, created if missing. Both -i and -o are needed to run headless
    #[arg(long = "out-directory", short = 'o', value_name = "DIR")]
    pub out_directory: Option<PathBuf>,

    /// DISABLE recursive scanning of the input directory
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// HandBrake preset to use (defaults to the configured preset, normally "Universal")
    #[arg(long, short = 'p', value_name = "NAME")]
    pub preset: Option<String>,

    /// List available presets and quit
    #[arg(long = "list-presets", short = 'l')]
    pub list_presets: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headless_flags() {
        let cli = Cli::try_parse_from([
            "hbbatch", "-i", "/videos", "-o", "/encoded", "-p", "AppleTV", "-r",
        ])
        .unwrap();

        assert_eq!(cli.in_directory, Some(PathBuf::from("/videos")));
        assert_eq!(cli.out_directory, Some(PathBuf::from("/encoded")));
        assert_eq!(cli.preset.as_deref(), Some("AppleTV"));
        assert!(cli.recursive, "-r sets the disable-recursion flag");
        assert!(!cli.list_presets);
    }

    #[test]
    fn defaults_leave_directories_unset() {
        let cli = Cli::try_parse_from(["hbbatch"]).unwrap();

        assert!(cli.in_directory.is_none());
        assert!(cli.out_directory.is_none());
        assert!(cli.preset.is_none());
        assert!(!cli.recursive);
    }

    #[test]
    fn long_flags_match_short_flags() {
        let cli = Cli::try_parse_from([
            "hbbatch",
            "--in-directory",
            "in",
            "--out-directory",
            "out",
            "--list-presets",
        ])
        .unwrap();

        assert_eq!(cli.in_directory, Some(PathBuf::from("in")));
        assert_eq!(cli.out_directory, Some(PathBuf::from("out")));
        assert!(cli.list_presets);
    }
}
