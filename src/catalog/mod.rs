/// Flag catalog: the ordered table of recognized pipeline flags.
///
/// The catalog is built once at startup by [`civet_catalog`] and passed by
/// reference to the parser and the assembler. It is append-only and keeps
/// declaration order; no process-wide state.
pub mod flags;
pub mod resolved;

pub use flags::civet_catalog;
pub use resolved::{FlagValue, ResolvedArgs};

use clap::{Arg, ArgAction, Command};

/// The two directory flags are never declared in the catalog; the assembler
/// forces them from the platform's own input/output directories.
pub const RESERVED_FLAGS: [&str; 2] = ["-sourcedir", "-targetdir"];

/// What a flag expects after its token on the pipeline command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Bare boolean token, e.g. `-resample-surfaces`.
    None,
    /// One value, e.g. `-N3-distance <dist>`.
    Single {
        /// Display placeholder for the value, as the pipeline help spells it.
        placeholder: &'static str,
    },
    /// Exactly two values, e.g. `-thickness T:T:T N:N`.
    Pair {
        /// Space-separated placeholders for both values.
        placeholder: &'static str,
    },
}

/// One recognized pipeline flag.
#[derive(Debug, Clone, Copy)]
pub struct FlagEntry {
    /// Dash-prefixed token as the pipeline spells it, e.g. `-N3-distance`.
    pub token: &'static str,
    /// Value expectation.
    pub kind: ValueKind,
    /// Help text scraped from the pipeline's own `-help` output.
    pub help: &'static str,
    /// Help section the flag was declared under.
    pub section: &'static str,
}

impl FlagEntry {
    ///Clap argument id and long name: the token without its leading dash.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.token.trim_start_matches('-')
    }
}

/// Ordered, append-only collection of recognized flags.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<FlagEntry>,
    section: &'static str,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new help section; subsequent entries are filed under it.
    pub fn section(&mut self, name: &'static str) {
        self.section = name;
    }

    /// Declare a bare boolean flag.
    pub fn flag(&mut self, token: &'static str, help: &'static str) {
        self.push(token, ValueKind::None, help);
    }

    /// Declare a flag taking one value.
    pub fn valued(&mut self, token: &'static str, placeholder: &'static str, help: &'static str) {
        self.push(token, ValueKind::Single { placeholder }, help);
    }

    /// Declare a flag taking exactly two values.
    pub fn paired(&mut self, token: &'static str, placeholder: &'static str, help: &'static str) {
        self.push(token, ValueKind::Pair { placeholder }, help);
    }

    fn push(&mut self, token: &'static str, kind: ValueKind, help: &'static str) {
        debug_assert!(
            !RESERVED_FLAGS.contains(&token),
            "directory flags are force-assigned, not declared"
        );
        self.entries.push(FlagEntry {
            token,
            kind,
            help,
            section: self.section,
        });
    }

    /// Entries in declared order.
    #[must_use]
    pub fn entries(&self) -> &[FlagEntry] {
        &self.entries
    }

    /// Look up an entry by its dash-prefixed token.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&FlagEntry> {
        self.entries.iter().find(|e| e.token == token)
    }

    /// Register every entry on a clap command, in the host platform's
    /// double-dash spelling (`-N3-distance` is accepted as `--N3-distance`).
    #[must_use]
    pub fn augment(&self, mut cmd: Command) -> Command {
        for entry in self.entries() {
            let arg = Arg::new(entry.id()).long(entry.id()).help(entry.help);
            let arg = match entry.kind {
                ValueKind::None => arg.action(ArgAction::SetTrue),
                ValueKind::Single { placeholder } => arg
                    .action(ArgAction::Set)
                    .value_name(placeholder)
                    .allow_hyphen_values(true),
                ValueKind::Pair { placeholder } => arg
                    .action(ArgAction::Set)
                    .num_args(2)
                    .value_names(placeholder.split_whitespace())
                    .allow_hyphen_values(true),
            };
            cmd = cmd.arg(arg);
        }
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.section("Test options");
        catalog.flag("-run", "Run the pipeline.");
        catalog.valued("-queue", "queue", "Which queue to use");
        catalog.paired("-thickness", "T:T:T N:N", "compute cortical thickness and blur");
        catalog
    }

    #[test]
    fn test_entries_keep_declaration_order() {
        let catalog = small_catalog();
        let tokens: Vec<&str> = catalog.entries().iter().map(|e| e.token).collect();
        assert_eq!(tokens, ["-run", "-queue", "-thickness"]);
    }

    #[test]
    fn test_get_by_token() {
        let catalog = small_catalog();
        let entry = catalog.get("-queue").unwrap();
        assert_eq!(entry.kind, ValueKind::Single { placeholder: "queue" });
        assert_eq!(entry.section, "Test options");
        assert!(catalog.get("-missing").is_none());
    }

    #[test]
    fn test_id_strips_the_leading_dash() {
        let catalog = small_catalog();
        assert_eq!(catalog.get("-thickness").unwrap().id(), "thickness");
    }

    #[test]
    fn test_augment_accepts_double_dash_spelling() {
        let catalog = small_catalog();
        let cmd = catalog.augment(Command::new("test"));
        let matches = cmd
            .try_get_matches_from([
                "test",
                "--run",
                "--queue",
                "long.q",
                "--thickness",
                "tlink",
                "30",
            ])
            .unwrap();

        assert!(matches.get_flag("run"));
        assert_eq!(matches.get_one::<String>("queue").unwrap(), "long.q");
        let pair: Vec<&String> = matches.get_many::<String>("thickness").unwrap().collect();
        assert_eq!(pair, ["tlink", "30"]);
    }

    #[test]
    fn test_augment_rejects_unknown_flags() {
        let catalog = small_catalog();
        let cmd = catalog.augment(Command::new("test"));
        assert!(cmd.try_get_matches_from(["test", "--no-such-flag"]).is_err());
    }

    #[test]
    fn test_civet_catalog_never_declares_directory_flags() {
        let catalog = civet_catalog();
        for token in RESERVED_FLAGS {
            assert!(catalog.get(token).is_none(), "{token} must stay reserved");
        }
    }

    #[test]
    fn test_civet_catalog_shape() {
        let catalog = civet_catalog();
        assert_eq!(catalog.entries().len(), 72);

        let n3 = catalog.get("-N3-distance").unwrap();
        assert_eq!(n3.kind, ValueKind::Single { placeholder: "dist" });
        assert_eq!(n3.section, "CIVET options");

        let thickness = catalog.get("-thickness").unwrap();
        assert_eq!(thickness.kind, ValueKind::Pair { placeholder: "T:T:T N:N" });

        let run = catalog.get("-run").unwrap();
        assert_eq!(run.kind, ValueKind::None);
        assert_eq!(run.section, "Pipeline control");
    }

    #[test]
    fn test_valued_flags_accept_hyphen_values() {
        let mut catalog = Catalog::new();
        catalog.valued("-qopts", "opts", "Extra options to queuing system");
        let cmd = catalog.augment(Command::new("test"));
        let matches = cmd
            .try_get_matches_from(["test", "--qopts", "-l vf=2G"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("qopts").unwrap(), "-l vf=2G");
    }
}
