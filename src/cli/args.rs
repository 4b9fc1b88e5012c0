/// CLI argument definitions: the static wrapper surface via clap derive,
/// extended at parse time with every catalog flag.
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::catalog::{Catalog, ResolvedArgs};

/// civetw — run the CIVET processing pipeline as a workflow plugin.
#[derive(Debug, Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "civetw",
    about = "Run the CIVET MRI processing pipeline on a directory of MINC volumes",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Directory containing the source volumes (becomes -sourcedir).
    #[arg(value_name = "INPUT_DIR", required_unless_present_any = ["meta", "man", "list_flags"])]
    pub input_dir: Option<PathBuf>,

    /// Directory where processed data will be placed (becomes -targetdir).
    #[arg(value_name = "OUTPUT_DIR", required_unless_present_any = ["meta", "man", "list_flags"])]
    pub output_dir: Option<PathBuf>,

    /// Print plugin metadata as JSON and exit.
    #[arg(long)]
    pub meta: bool,

    /// Show the pipeline executable's own help text and exit.
    #[arg(long)]
    pub man: bool,

    /// List every recognized pipeline flag and exit.
    #[arg(long)]
    pub list_flags: bool,

    /// Print the assembled pipeline command line instead of running it.
    #[arg(long)]
    pub dry_run: bool,

    /// Values supplied for catalog-declared pipeline flags.
    #[arg(skip)]
    pub resolved: ResolvedArgs,
}

impl Cli {
    /// Parse the process arguments against the static surface plus `catalog`.
    ///
    /// Exits the process with clap's usual diagnostics on bad input.
    #[must_use]
    pub fn parse_with(catalog: &Catalog) -> Self {
        match Self::try_parse_with(catalog, std::env::args_os()) {
            Ok(cli) => cli,
            Err(err) => err.exit(),
        }
    }

    /// Like [`Cli::parse_with`], but from an explicit argument iterator.
    ///
    /// # Errors
    ///
    /// Returns a `clap::Error` for unknown flags, missing directories, or
    /// wrong value counts.
    pub fn try_parse_with<I, T>(catalog: &Catalog, itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = catalog.augment(Self::command()).try_get_matches_from(itr)?;
        let mut cli = Self::from_arg_matches(&matches)?;
        cli.resolved = ResolvedArgs::from_matches(catalog, &matches);
        Ok(cli)
    }
}
