/// Code generation: render parsed help options as the committed catalog
/// module (`src/catalog/flags.rs`).
use std::fmt::Write;

use super::ParsedOption;

/// Directory flags are force-assigned by the assembler and never declared.
const RESERVED: [&str; 2] = ["-sourcedir", "-targetdir"];

const HEADER: &str = "\
// @generated by help2code from `CIVET_Processing_Pipeline -help`.
// Regenerate:
//     CIVET_Processing_Pipeline -help | help2code > src/catalog/flags.rs

use super::Catalog;

/// Every recognized pipeline flag, in the order `-help` lists them.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn civet_catalog() -> Catalog {
    let mut catalog = Catalog::new();
";

const FOOTER: &str = "
    catalog
}
";

/// Flags whose help formatting is too odd for mechanical emission.
/// `-thickness` takes two values but its help spells them inline.
fn edge_case(token: &str) -> Option<(&'static str, &'static str)> {
    match token {
        "-thickness" => Some(("paired", "T:T:T N:N")),
        _ => None,
    }
}

/// Render the Rust source of the committed `civet_catalog()` module.
#[must_use]
pub fn emit_catalog(options: &[ParsedOption]) -> String {
    let mut out = String::from(HEADER);
    let mut section = "";

    for opt in options {
        if RESERVED.contains(&opt.token.as_str()) {
            continue;
        }
        if opt.section != section {
            section = &opt.section;
            let _ = write!(out, "\n    catalog.section(\"{}\");\n", escape(section));
        }

        let help = escape(&opt.help.join(" "));
        if let Some((method, placeholder)) = edge_case(&opt.token) {
            let _ = writeln!(
                out,
                "    catalog.{method}(\"{}\", \"{placeholder}\", \"{help}\");",
                opt.token
            );
        } else if let Some(placeholder) = &opt.placeholder {
            let _ = writeln!(
                out,
                "    catalog.valued(\"{}\", \"{}\", \"{help}\");",
                opt.token,
                escape(placeholder)
            );
        } else {
            let _ = writeln!(out, "    catalog.flag(\"{}\", \"{help}\");", opt.token);
        }
    }

    out.push_str(FOOTER);
    out
}

/// Escape a scraped string for use inside a Rust string literal.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
