//! Compiled patterns for the slide markdown mini-format.

use regex::Regex;
use std::sync::LazyLock;

/// Speaker note line: `Note: text`. Captures the text up to end of line.
pub static NOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^Note:[ \t]?([^\r\n]+)").expect("Invalid note regex")
});

/// Local image reference: `./<folder>/<path>.<ext>`, not preceded by a
/// path character (so `../x/a.png` is skipped).
/// Group 1 is the preceding character, group 2 `<path>.<ext>`, group 3 the
/// file stem.
pub static LOCAL_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^.\w/])\./[\w-]+/((?:[\w-]+/)*([\w-]+)\.[a-z]{2,4})")
        .expect("Invalid image regex")
});

/// Slide directive comment: `<!-- .slide: ... -->`. Group 1 is the body.
pub static DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--\s*\.slide:\s*(.*?)\s*-->").expect("Invalid directive regex")
});

/// One `key="value"` or `key='value'` pair inside a directive body.
pub static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([\w-]+)=(?:"([^"]*)"|'([^']*)')"#).expect("Invalid attribute regex")
});

/// Markdown ATX heading line. Group 1 is the hashes, group 2 the text.
pub static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(#{1,6})[ \t]+([^\r\n]+?)[ \t#]*\r?$").expect("Invalid heading regex")
});
