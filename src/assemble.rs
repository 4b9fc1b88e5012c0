/// Flag assembler: produces the single argument string handed to the
/// pipeline executable.
///
/// No flag semantics are interpreted here. Each supplied flag is emitted in
/// catalog order, after the two directory flags forced from the platform's
/// own input/output directories.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, FlagValue, ResolvedArgs};
use crate::errors::CivetError;

/// Token of the identifier-file flag the assembler may synthesize.
pub const ID_FILE_FLAG: &str = "-id-file";

/// Suffix identifying T1 source volumes in the input directory.
pub const T1_SUFFIX: &str = "_t1.mnc";

/// Assemble the pipeline argument string.
///
/// `-sourcedir` always comes first, then `-targetdir`, each exactly once,
/// taken from the platform-supplied directories regardless of anything the
/// user passed. Remaining flags follow in catalog order: bare token for a
/// switch, `flag value` for a single value, space-joined for a list. When
/// no identifier file was supplied, one is synthesized from the input
/// directory contents.
///
/// # Errors
///
/// Returns [`CivetError::InputScan`] if the input directory cannot be read
/// and [`CivetError::IdFile`] if the identifier file cannot be written.
pub fn assemble(
    catalog: &Catalog,
    mut resolved: ResolvedArgs,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<String, CivetError> {
    // sourcedir must come first
    let mut fragments = vec![
        format!("-sourcedir {}", input_dir.display()),
        format!("-targetdir {}", output_dir.display()),
    ];

    if resolved.get(ID_FILE_FLAG).is_none() {
        let id_file = synthesize_id_file(input_dir)?;
        resolved.set(ID_FILE_FLAG, FlagValue::One(id_file.display().to_string()));
    }

    for entry in catalog.entries() {
        match resolved.get(entry.token) {
            None => {}
            Some(FlagValue::Switch) => fragments.push(entry.token.to_owned()),
            Some(FlagValue::One(value)) => fragments.push(format!("{} {value}", entry.token)),
            Some(FlagValue::Many(values)) => {
                fragments.push(format!("{} {}", entry.token, values.join(" ")));
            }
        }
    }

    Ok(fragments.join(" "))
}

/// Scan `input_dir` for `*_t1.mnc` files and write their identifiers into a
/// fresh temporary file, one per line.
///
/// The file is deliberately not removed afterwards: the pipeline reads it
/// after assembly, so its lifecycle is left to the host's temp-file policy.
/// Identifier order is whatever the filesystem returns for the scan.
///
/// # Errors
///
/// Returns [`CivetError::InputScan`] if the directory cannot be read and
/// [`CivetError::IdFile`] if the file cannot be created or written.
pub fn synthesize_id_file(input_dir: &Path) -> Result<PathBuf, CivetError> {
    let entries = fs::read_dir(input_dir).map_err(|source| CivetError::InputScan {
        path: input_dir.to_path_buf(),
        source,
    })?;

    let mut ids = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CivetError::InputScan {
            path: input_dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if let Some(id) = name.strip_suffix(T1_SUFFIX) {
            ids.push(id.to_owned());
        }
    }

    let mut file = tempfile::Builder::new()
        .prefix("civet-ids-")
        .suffix(".txt")
        .tempfile()
        .map_err(CivetError::IdFile)?;
    for id in &ids {
        writeln!(file, "{id}").map_err(CivetError::IdFile)?;
    }
    let (_, path) = file.keep().map_err(|err| CivetError::IdFile(err.error))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::civet_catalog;
    use tempfile::TempDir;

    fn occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    fn dirs_with_t1_volumes() -> (TempDir, TempDir) {
        let input = TempDir::new().unwrap();
        fs::write(input.path().join("00100_t1.mnc"), b"").unwrap();
        fs::write(input.path().join("00200_t1.mnc"), b"").unwrap();
        let output = TempDir::new().unwrap();
        (input, output)
    }

    #[test]
    fn test_directory_flags_once_and_in_order() {
        let (input, output) = dirs_with_t1_volumes();
        let catalog = civet_catalog();

        let line = assemble(&catalog, ResolvedArgs::default(), input.path(), output.path()).unwrap();

        assert_eq!(occurrences(&line, "-sourcedir"), 1);
        assert_eq!(occurrences(&line, "-targetdir"), 1);
        assert!(line.starts_with(&format!("-sourcedir {}", input.path().display())));
        assert!(line.find("-sourcedir").unwrap() < line.find("-targetdir").unwrap());
        assert!(line.contains(&format!("-targetdir {}", output.path().display())));
    }

    #[test]
    fn test_assembles_each_value_shape() {
        let (input, output) = dirs_with_t1_volumes();
        let catalog = civet_catalog();

        let mut resolved = ResolvedArgs::default();
        resolved.set("-N3-distance", FlagValue::One("200".to_owned()));
        resolved.set("-resample-surfaces", FlagValue::Switch);
        resolved.set(
            "-thickness",
            FlagValue::Many(vec!["tlaplace:tfs:tlink".to_owned(), "30:20".to_owned()]),
        );

        let line = assemble(&catalog, resolved, input.path(), output.path()).unwrap();

        assert!(line.contains("-N3-distance 200"));
        assert!(line.contains("-thickness tlaplace:tfs:tlink 30:20"));

        // a switch is a bare token: end of line or another flag next
        let idx = line.find("-resample-surfaces").unwrap();
        let after = &line[idx + "-resample-surfaces".len()..];
        assert!(
            after.is_empty() || after.starts_with(" -"),
            "-resample-surfaces was given a value: {after:?}"
        );
    }

    #[test]
    fn test_absent_flags_do_not_appear() {
        let (input, output) = dirs_with_t1_volumes();
        let catalog = civet_catalog();

        let mut resolved = ResolvedArgs::default();
        resolved.set(ID_FILE_FLAG, FlagValue::One("/ids.txt".to_owned()));
        resolved.set("-run", FlagValue::Switch);

        let line = assemble(&catalog, resolved, input.path(), output.path()).unwrap();

        assert!(line.ends_with(" -run"));
        assert!(!line.contains("-spawn"));
        assert!(!line.contains("-VBM"));
        assert!(!line.contains("-reset-all"));
    }

    #[test]
    fn test_flags_follow_catalog_order() {
        let (input, output) = dirs_with_t1_volumes();
        let catalog = civet_catalog();

        let mut resolved = ResolvedArgs::default();
        resolved.set(ID_FILE_FLAG, FlagValue::One("/ids.txt".to_owned()));
        resolved.set("-run", FlagValue::Switch);
        resolved.set("-queue", FlagValue::One("long.q".to_owned()));
        resolved.set("-model", FlagValue::One("colin27".to_owned()));

        let line = assemble(&catalog, resolved, input.path(), output.path()).unwrap();

        let queue = line.find("-queue").unwrap();
        let model = line.find("-model").unwrap();
        let run = line.find("-run").unwrap();
        assert!(queue < model && model < run);
    }

    #[test]
    fn test_supplied_id_file_is_passed_through() {
        let (input, output) = dirs_with_t1_volumes();
        let catalog = civet_catalog();

        let mut resolved = ResolvedArgs::default();
        resolved.set(ID_FILE_FLAG, FlagValue::One("/ids.txt".to_owned()));

        let line = assemble(&catalog, resolved, input.path(), output.path()).unwrap();

        assert_eq!(occurrences(&line, ID_FILE_FLAG), 1);
        assert!(line.contains("-id-file /ids.txt"));
    }

    #[test]
    fn test_synthesizes_id_file_when_missing() {
        let (input, output) = dirs_with_t1_volumes();
        fs::write(input.path().join("notes.txt"), b"not a volume").unwrap();
        let catalog = civet_catalog();

        let line = assemble(&catalog, ResolvedArgs::default(), input.path(), output.path()).unwrap();

        let idx = line.find("-id-file ").unwrap() + "-id-file ".len();
        let path = line[idx..].split(' ').next().unwrap();
        let mut ids: Vec<String> = fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect();
        ids.sort();
        assert_eq!(ids, ["00100", "00200"]);
    }

    #[test]
    fn test_empty_input_directory_yields_empty_id_file() {
        let input = TempDir::new().unwrap();
        let path = synthesize_id_file(input.path()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_missing_input_directory_is_a_scan_error() {
        let input = TempDir::new().unwrap();
        let gone = input.path().join("never-made");
        let err = synthesize_id_file(&gone).unwrap_err();
        assert!(matches!(err, CivetError::InputScan { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
