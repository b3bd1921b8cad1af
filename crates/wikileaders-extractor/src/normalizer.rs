//! Text cleanup for selected paragraphs

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Numeric footnote markers: `[1]`, `[12]`
static FOOTNOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d+\]").expect("valid regex"));

/// Reference markers. Same digit-only pattern as FOOTNOTE; lettered markers
/// such as `[a]` are left in place.
static REFERENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d+\]").expect("valid regex"));

/// Parenthesized asides containing at least one IPA character
static PHONETIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*[ˈʃʒɡɲʁðŋ][^)]*\)").expect("valid regex"));

/// Clean a selected paragraph
///
/// Stages, in order: collapse whitespace runs to one space, drop `[<digits>]`
/// footnote markers, drop `[<digits>]` reference markers, drop parenthesized
/// phonetic transcriptions. Removals can leave double spaces behind or
/// expose new markers, so the result is collapsed and trimmed again and the
/// pass repeats until nothing changes. Reapplying to the output is a no-op.
///
/// # Examples
///
/// ```
/// use wikileaders_extractor::normalize;
///
/// assert_eq!(normalize("Hello   world [12] (ˈsʌm) end"), "Hello world end");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let mut current = normalize_pass(text);
    loop {
        let next = normalize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_pass(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    let without_footnotes = FOOTNOTE.replace_all(&collapsed, "");
    let without_references = REFERENCE.replace_all(&without_footnotes, "");
    let without_phonetics = PHONETIC.replace_all(&without_references, "");
    WHITESPACE
        .replace_all(&without_phonetics, " ")
        .trim()
        .to_string()
}
