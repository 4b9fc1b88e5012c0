/// `--meta`: print the plugin descriptor as JSON.
use crate::errors::CivetError;
use crate::types::PluginMeta;

/// Run `civetw --meta`.
///
/// # Errors
///
/// Cannot currently fail; serialization problems are reported on stderr.
pub fn run() -> Result<(), CivetError> {
    match serde_json::to_string_pretty(&PluginMeta::civet()) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
    Ok(())
}
