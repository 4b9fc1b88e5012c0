/// Help-text parser: turns `CIVET_Processing_Pipeline -help` output into a
/// structured option list.
///
/// The pipeline's help format is the only contract here, so the interface
/// stays deliberately narrow: text in, `Vec<ParsedOption>` out. Everything
/// downstream (the committed catalog module) goes through
/// [`codegen::emit_catalog`].
pub mod codegen;

/// Line that opens the option listing in the pipeline's help output.
pub const SUMMARY_MARKER: &str = "Summary of options:";

/// Line that ends the option listing.
pub const USAGE_MARKER: &str = "USAGE:";

/// Option lines are indented exactly this way.
const OPTION_INDENT: &str = "   -";

/// One option scraped from the help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOption {
    /// Dash-prefixed flag token, e.g. `-N3-distance`.
    pub token: String,
    /// Bracketed value placeholder, if the flag takes one.
    pub placeholder: Option<String>,
    /// Help text, one entry per wrapped source line.
    pub help: Vec<String>,
    /// Title of the `-- Section ----` block the option appeared under.
    pub section: String,
}

/// Parse the pipeline's `-help` output.
///
/// Everything before the [`SUMMARY_MARKER`] line is skipped, everything
/// from the [`USAGE_MARKER`] line on is ignored. Within the listing,
/// `-- Title ----` lines open a section, lines indented `   -` open an
/// option, and any other non-empty line continues the current option's
/// help text.
#[must_use]
pub fn parse_help(text: &str) -> Vec<ParsedOption> {
    let mut lines = text.lines();
    for line in lines.by_ref() {
        if line.starts_with(SUMMARY_MARKER) {
            break;
        }
    }

    let mut options = Vec::new();
    let mut section = String::new();
    let mut current: Option<ParsedOption> = None;

    for line in lines {
        if line.starts_with(USAGE_MARKER) {
            break;
        }

        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        if let Some(title) = line.strip_prefix("-- ") {
            if let Some(opt) = current.take() {
                options.push(opt);
            }
            section = title.trim_end_matches('-').trim_end().to_owned();
            continue;
        }

        if line.starts_with(OPTION_INDENT) {
            if let Some(opt) = current.take() {
                options.push(opt);
            }
            current = Some(parse_option_line(line.trim_start(), &section));
        } else if let Some(opt) = current.as_mut() {
            opt.help.push(line.trim_start().to_owned());
        }
    }

    if let Some(opt) = current.take() {
        options.push(opt);
    }
    options
}

/// Split an option line into token, optional `<placeholder>`, and the first
/// help fragment.
fn parse_option_line(body: &str, section: &str) -> ParsedOption {
    let (token, rest) = body.split_once(' ').unwrap_or((body, ""));
    let rest = rest.trim_start();

    let (placeholder, rest) = match rest.strip_prefix('<') {
        Some(bracketed) => match bracketed.split_once('>') {
            Some((placeholder, tail)) => (Some(placeholder.to_owned()), tail),
            None => (None, rest),
        },
        None => (None, rest),
    };

    let mut help = Vec::new();
    let rest = rest.trim();
    if !rest.is_empty() {
        help.push(rest.to_owned());
    }

    ParsedOption {
        token: token.to_owned(),
        placeholder,
        help,
        section: section.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
CIVET Processing Pipeline (2.1.1)

   -fake-preamble-flag does not count, the listing has not started

Summary of options:

-- Execution control -----------------------------------------------------------
   -spawn          Use the perl system interface to spawn jobs [default: use local
                   host scheduler DEFAULT]
   -queue <queue>  Which queue to use
-- File options ----------------------------------------------------------------
   -sourcedir <dir> Directory containing the source files.
   -id-file <file> A text file that contains all the subject id's
USAGE: CIVET_Processing_Pipeline [options] <ids>
   -ghost          appears after the usage line and must be ignored
";

    #[test]
    fn test_parses_option_blocks() {
        let options = parse_help(SAMPLE);
        let tokens: Vec<&str> = options.iter().map(|o| o.token.as_str()).collect();
        assert_eq!(tokens, ["-spawn", "-queue", "-sourcedir", "-id-file"]);
    }

    #[test]
    fn test_sections_are_tracked() {
        let options = parse_help(SAMPLE);
        assert_eq!(options[0].section, "Execution control");
        assert_eq!(options[3].section, "File options");
    }

    #[test]
    fn test_placeholders() {
        let options = parse_help(SAMPLE);
        assert_eq!(options[0].placeholder, None);
        assert_eq!(options[1].placeholder.as_deref(), Some("queue"));
        assert_eq!(options[2].placeholder.as_deref(), Some("dir"));
    }

    #[test]
    fn test_continuation_lines_extend_help() {
        let options = parse_help(SAMPLE);
        assert_eq!(
            options[0].help.join(" "),
            "Use the perl system interface to spawn jobs [default: use local host scheduler DEFAULT]"
        );
    }

    #[test]
    fn test_preamble_and_trailer_are_ignored() {
        let options = parse_help(SAMPLE);
        assert!(options.iter().all(|o| o.token != "-fake-preamble-flag"));
        assert!(options.iter().all(|o| o.token != "-ghost"));
    }

    #[test]
    fn test_no_marker_means_no_options() {
        assert!(parse_help("just some text\nwith no listing\n").is_empty());
    }

    #[test]
    fn test_option_without_help_text() {
        let text = "Summary of options:\n   -run\nUSAGE:\n";
        let options = parse_help(text);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].token, "-run");
        assert!(options[0].help.is_empty());
        assert_eq!(options[0].placeholder, None);
    }
}
