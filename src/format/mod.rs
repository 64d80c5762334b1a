//! Meson fragment rendering
//!
//! ```text
//! sources += [
//!   'src/bar.c',
//!   'src/foo.cpp',
//! ]
//! ```

use std::borrow::Cow;

/// Default list variable the fragment appends to
pub const DEFAULT_VARIABLE: &str = "sources";

/// Renders the fragment for already sorted entries.
///
/// Entries are written verbatim unless `escape_quotes` is set, in which case
/// `'` and `\` are backslash-escaped.
pub fn render_manifest(variable: &str, sources: &[String], escape_quotes: bool) -> String {
    let mut out = String::with_capacity(
        variable.len() + 8 + sources.iter().map(|s| s.len() + 6).sum::<usize>(),
    );
    out.push_str(variable);
    out.push_str(" += [\n");
    for source in sources {
        out.push_str("  '");
        if escape_quotes {
            out.push_str(&escape_meson_string(source));
        } else {
            out.push_str(source);
        }
        out.push_str("',\n");
    }
    out.push_str("]\n");
    out
}

/// Escapes the characters that would end or corrupt a single-quoted Meson string.
fn escape_meson_string(s: &str) -> Cow<'_, str> {
    if !s.contains(['\\', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        if matches!(c, '\\' | '\'') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}
