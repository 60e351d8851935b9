//! # Retromix
//!
//! A command-line front end for the retromix playback layer: preload a few
//! samples and a music track from an asset directory and mix them.

use log::error;

mod cli;
mod runner;

fn main() {
    env_logger::init();
    let args = cli::args::build_cli().get_matches();

    let code = match runner::run(&args) {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err);
            -1
        }
    };

    std::process::exit(code)
}
