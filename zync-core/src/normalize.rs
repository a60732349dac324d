//! Name sanitization for collection names, authors, and titles.
//!
//! Downstream tools use these strings as path segments and filenames, so
//! every rule here is pure and total. Three rules have existed over time:
//!
//! - [`NameRule::AllowList`]: keep ASCII letters, digits, and spaces, trim,
//!   optionally turn spaces into underscores. This is the canonical rule.
//! - [`NameRule::Structural`]: trim and turn spaces into underscores. Used for
//!   collection names, which are structural and keep their punctuation.
//! - [`NameRule::Legacy`]: trim, strip surrounding periods, turn spaces and
//!   periods into underscores. Kept so older exports can be reproduced.

/// Marker Zotero prepends to attachment paths stored inside its data directory.
pub const STORAGE_MARKER: &str = "storage:";

/// A named normalization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    AllowList { replace_space: bool },
    Structural,
    Legacy,
}

impl NameRule {
    /// Rule applied to author names and titles.
    pub const CANONICAL: NameRule = NameRule::AllowList {
        replace_space: true,
    };

    pub fn apply(self, text: &str) -> String {
        match self {
            NameRule::AllowList { replace_space } => normalize(text, replace_space),
            NameRule::Structural => text.trim().replace(' ', "_"),
            NameRule::Legacy => text.trim().trim_matches('.').replace([' ', '.'], "_"),
        }
    }
}

/// Strip everything outside `[A-Za-z0-9 ]`, trim, and optionally replace
/// spaces with underscores.
///
/// Underscores survive when `replace_space` is set, so that normalizing an
/// already-normalized string is a no-op.
///
/// # Examples
///
/// ```
/// use zync_core::normalize::normalize;
///
/// assert_eq!(normalize(" O'Brien ", true), "OBrien");
/// assert_eq!(normalize("Deep Learning: A Review", true), "Deep_Learning_A_Review");
/// assert_eq!(normalize("Deep Learning: A Review", false), "Deep Learning A Review");
/// ```
pub fn normalize(text: &str, replace_space: bool) -> String {
    let kept: String = text
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || c == ' ' || (replace_space && c == '_'))
        .collect();
    let trimmed = kept.trim();
    if replace_space {
        trimmed.replace(' ', "_")
    } else {
        trimmed.to_string()
    }
}

/// Title-case `text` the way Zotero exports expect: the first cased
/// character after an uncased one is title-cased, every other cased
/// character is lowercased.
///
/// Digits, punctuation, and scripts without case (CJK, for example) all
/// start a new word, so `"o'neil"` becomes `"O'Neil"`, `"2nd edition"`
/// becomes `"2Nd Edition"`, and `"深度学习transformer"` becomes
/// `"深度学习Transformer"`. Characters whose uppercase form expands take
/// their title form: `"ß"` becomes `"Ss"` and `"ﬁ"` becomes `"Fi"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for c in text.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            push_title(&mut out, c);
        }
        prev_cased = is_cased(c);
    }
    out
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}

// Title form: first character of the uppercase mapping, the rest lowercased.
fn push_title(out: &mut String, c: char) {
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    for rest in upper {
        out.extend(rest.to_lowercase());
    }
}

/// Drop everything up to and including the last [`STORAGE_MARKER`].
///
/// Paths without the marker are returned unchanged.
pub fn strip_storage_prefix(path: &str) -> &str {
    match path.rfind(STORAGE_MARKER) {
        Some(idx) => &path[idx + STORAGE_MARKER.len()..],
        None => path,
    }
}
