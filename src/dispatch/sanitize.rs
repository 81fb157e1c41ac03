use regex::Regex;
use std::sync::LazyLock;

static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Trims the reply and collapses three or more newlines into a single blank line.
pub fn sanitize(text: &str) -> String {
    BLANK_RUNS.replace_all(text.trim(), "\n\n").into_owned()
}
