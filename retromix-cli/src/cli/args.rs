//! CLI argument definitions for `retromix-cli`.

use clap::{Arg, ArgAction, Command};

/// Build the CLI argument parser and command definitions.
pub fn build_cli() -> Command {
    Command::new("Retromix")
        .version("0.1")
        .about("Mix preloaded samples and looped music from an asset directory")
        .arg_required_else_help(true)
        .arg(
            Arg::new("ASSETS")
                .required(true)
                .help("Directory the audio assets are resolved against"),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .short('s')
                .value_name("FILE")
                .action(ArgAction::Append)
                .help("Sample file to preload and play (repeatable, up to 8)"),
        )
        .arg(
            Arg::new("music")
                .long("music")
                .short('m')
                .value_name("FILE")
                .help("Music file to preload and loop"),
        )
        .arg(
            Arg::new("volume")
                .long("volume")
                .short('v')
                .value_name("LEVEL")
                .default_value("128")
                .help("Music volume (0-128)"),
        )
        .arg(
            Arg::new("duration")
                .long("duration")
                .short('d')
                .value_name("SECONDS")
                .default_value("2.0")
                .help("How long to keep the mix running"),
        )
        .arg(
            Arg::new("settings-json")
                .long("settings-json")
                .value_name("PATH")
                .help("Path to a JSON file containing DeviceSettings"),
        )
        .arg(
            Arg::new("detached")
                .long("detached")
                .action(ArgAction::SetTrue)
                .help("Run without opening an output device"),
        )
}
