/// Command dispatch: routes a parsed invocation to its handler.
pub mod list_flags;
pub mod man;
pub mod meta;
pub mod run;

use crate::catalog::Catalog;
use crate::cli::Cli;
use crate::errors::CivetError;

/// Dispatch a parsed invocation.
///
/// The informational flags (`--meta`, `--man`, `--list-flags`) win over a
/// pipeline run; otherwise the positional directories are present and the
/// pipeline is assembled and launched.
///
/// # Errors
///
/// Returns `CivetError` on any command failure.
///
/// # Panics
///
/// Panics if called without the positional directories for a pipeline run;
/// [`Cli::parse_with`] never produces such an invocation.
pub fn dispatch(cli: Cli, catalog: &Catalog) -> Result<(), CivetError> {
    if cli.meta {
        return meta::run();
    }
    if cli.man {
        return man::run();
    }
    if cli.list_flags {
        return list_flags::run(catalog);
    }

    let (Some(input_dir), Some(output_dir)) = (cli.input_dir, cli.output_dir) else {
        // the parser requires both positionals for a pipeline run
        unreachable!("positional directories enforced by clap");
    };
    run::run(catalog, cli.resolved, &input_dir, &output_dir, cli.dry_run)
}
