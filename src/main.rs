#![deny(clippy::all, clippy::pedantic)]
//! civetw entrypoint.

use civetw::catalog::civet_catalog;
use civetw::cli::Cli;
use civetw::commands;

fn main() {
    let catalog = civet_catalog();
    let cli = Cli::parse_with(&catalog);

    match commands::dispatch(cli, &catalog) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("civetw: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
