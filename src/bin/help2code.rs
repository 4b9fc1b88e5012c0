#![deny(clippy::all, clippy::pedantic)]
//! help2code — regenerate the committed flag catalog from the pipeline's
//! own help output:
//!
//! ```text
//! CIVET_Processing_Pipeline -help | help2code > src/catalog/flags.rs
//! ```

use std::io::Read;

use anyhow::{Context, ensure};

use civetw::helpgen::{codegen, parse_help};

fn main() -> anyhow::Result<()> {
    let mut help = String::new();
    std::io::stdin()
        .read_to_string(&mut help)
        .context("reading pipeline help text from stdin")?;

    let options = parse_help(&help);
    ensure!(
        !options.is_empty(),
        "no options found; is this `CIVET_Processing_Pipeline -help` output?"
    );

    print!("{}", codegen::emit_catalog(&options));
    Ok(())
}
