use crate::cli::Cli;
use hbbatch::config::Config;
use hbbatch::engine::HandBrake;
use hbbatch::report::{ConsoleReporter, DialogReporter};
use hbbatch::{dialog, runner};

/// Exit status for a preset name the tool does not advertise.
const EXIT_BAD_PRESET: i32 = 9;

pub fn run(cli: Cli) -> i32 {
    let config = Config::load().unwrap_or_default();
    let tool = HandBrake::locate(&config);

    // The preset catalogue is fetched once per run and handed down
    // explicitly; it is never refreshed.
    let presets = match tool.list_presets() {
        Ok(presets) => presets,
        Err(err) => {
            eprintln!("Could not read the preset list: {err}");
            return runner::EXIT_FAILURE;
        }
    };

    if cli.list_presets {
        print_presets(&presets);
        return 0;
    }

    let preset = cli
        .preset
        .clone()
        .unwrap_or_else(|| config.defaults.preset.clone());

    if !presets.iter().any(|name| name == &preset) {
        println!("\"{preset}\" is not in the valid preset list");
        print_presets(&presets);
        return EXIT_BAD_PRESET;
    }

    // The -r flag disables the default recursive scan.
    let recursive = !cli.recursive;

    match (cli.in_directory, cli.out_directory) {
        (Some(in_dir), Some(out_dir)) => runner::run_batch(
            &tool,
            &in_dir,
            &out_dir,
            recursive,
            &preset,
            &ConsoleReporter,
        ),
        _ => run_interactive(&tool, recursive, &preset),
    }
}

fn run_interactive(tool: &HandBrake, recursive: bool, preset: &str) -> i32 {
    let in_dir = dialog::pick_input_directory();
    let out_dir = dialog::pick_output_directory();

    let (Some(in_dir), Some(out_dir)) = (in_dir, out_dir) else {
        dialog::show_error("You have to select both in and out directories");
        return runner::EXIT_FAILURE;
    };

    runner::run_batch(tool, &in_dir, &out_dir, recursive, preset, &DialogReporter)
}

fn print_presets(presets: &[String]) {
    println!("Available presets: {}.", presets.join(", "));
    println!("Please check HandBrake for more information.");
}
