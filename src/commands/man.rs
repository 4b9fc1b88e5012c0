/// `--man`: the man page is the pipeline executable's own help text.
use crate::errors::CivetError;
use crate::exec;

/// Run `civetw --man`.
///
/// # Errors
///
/// Returns `CivetError` if the pipeline executable cannot be launched.
pub fn run() -> Result<(), CivetError> {
    exec::show_help()
}
