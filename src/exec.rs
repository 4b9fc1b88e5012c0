/// Process invocation: locating and launching the pipeline executable.
///
/// The wrapper's whole contract with the pipeline is "run the given command
/// line synchronously and observe the exit status". No timeout, no retry,
/// no cancellation; concurrent runs are the business of the queueing flags
/// passed straight through to the pipeline.
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::errors::CivetError;

/// Installed location used when the environment does not say otherwise.
pub const DEFAULT_PIPELINE: &str =
    "/opt/CIVET/Linux-x86_64/CIVET-2.1.1/CIVET_Processing_Pipeline";

/// Environment variable naming the CIVET installation base directory.
pub const BASEDIR_ENV: &str = "CIVET_BASEDIR";

/// Environment variable naming the installed CIVET version.
pub const VERSION_ENV: &str = "CIVET_VERSION";

/// Resolve the pipeline executable path from the environment.
#[must_use]
pub fn pipeline_path() -> PathBuf {
    path_from(
        env::var(BASEDIR_ENV).ok().as_deref(),
        env::var(VERSION_ENV).ok().as_deref(),
    )
}

/// Both pieces present selects `<basedir>/CIVET-<version>/CIVET_Processing_Pipeline`;
/// anything else falls back to [`DEFAULT_PIPELINE`].
#[must_use]
pub fn path_from(basedir: Option<&str>, version: Option<&str>) -> PathBuf {
    match (basedir, version) {
        (Some(base), Some(version)) => Path::new(base)
            .join(format!("CIVET-{version}"))
            .join("CIVET_Processing_Pipeline"),
        _ => PathBuf::from(DEFAULT_PIPELINE),
    }
}

/// Launch the pipeline with the assembled argument line and wait for it.
///
/// The line is whitespace-tokenized exactly as the assembler produced it;
/// no shell is involved.
///
/// # Errors
///
/// Returns [`CivetError::Launch`] if the process cannot be spawned and
/// [`CivetError::PipelineFailed`] with the child's exit code when it exits
/// nonzero.
pub fn run_pipeline(arg_line: &str) -> Result<(), CivetError> {
    launch(arg_line.split_whitespace())
}

/// Launch `<pipeline> -help`: the `--man` page is the pipeline's own help.
///
/// # Errors
///
/// Same conditions as [`run_pipeline`].
pub fn show_help() -> Result<(), CivetError> {
    launch(["-help"])
}

fn launch<I, S>(args: I) -> Result<(), CivetError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let path = pipeline_path();
    let status = Command::new(&path)
        .args(args)
        .status()
        .map_err(|source| CivetError::Launch {
            path: path.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(CivetError::PipelineFailed {
            code: status.code().unwrap_or(1),
        })
    }
}
