/// Default command: assemble the argument line and launch the pipeline.
use std::path::Path;

use crate::assemble::assemble;
use crate::catalog::{Catalog, ResolvedArgs};
use crate::errors::CivetError;
use crate::exec;

/// Banner printed before a pipeline run.
const TITLE: &str = r"
 _____ _____ _   _ _____ _____
/  __ \_   _| | | |  ___|_   _|
| /  \/ | | | | | | |__   | |
| |     | | | | | |  __|  | |
| \__/\_| |_\ \_/ / |___  | |
 \____/\___/ \___/\____/  \_/
";

/// Run the pipeline, or just print the command line with `--dry-run`.
///
/// # Errors
///
/// Returns `CivetError` if assembly fails or the pipeline cannot be
/// launched or exits nonzero.
pub fn run(
    catalog: &Catalog,
    resolved: ResolvedArgs,
    input_dir: &Path,
    output_dir: &Path,
    dry_run: bool,
) -> Result<(), CivetError> {
    let arg_line = assemble(catalog, resolved, input_dir, output_dir)?;

    if dry_run {
        println!("{} {arg_line}", exec::pipeline_path().display());
        return Ok(());
    }

    println!("{TITLE}");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    exec::run_pipeline(&arg_line)
}
