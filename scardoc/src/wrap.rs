//! Description reflow used for function records.
//!
//! The viewer expects descriptions pre-broken into lines of roughly
//! `MAX_LINE_LEN` characters. Breaks are only inserted between words and the
//! counter ignores newlines already present in the text, so lines following
//! an embedded `<BR/>` may run past the limit. Consumers rely on the exact
//! output, quirks included.

/// Accumulated word length at which a line break is inserted.
pub const MAX_LINE_LEN: usize = 70;

/// Joins `short` and `ext` with a blank line and reflows the result.
pub fn wrap_description(short: &str, ext: &str) -> String {
    let full = format!("{short}\n\n{ext}");
    wrap_text(&full)
}

/// Reflow `text`, splitting on single spaces.
///
/// Every word (including the empty words produced by consecutive spaces) is
/// emitted followed by one space. Once the summed word lengths reach
/// `MAX_LINE_LEN`, `"\n "` is appended and the counter restarts.
pub fn wrap_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / MAX_LINE_LEN * 2 + 1);
    let mut line_len = 0usize;

    for word in text.split(' ') {
        out.push_str(word);
        out.push(' ');
        line_len += word.chars().count();
        if line_len >= MAX_LINE_LEN {
            out.push_str("\n ");
            line_len = 0;
        }
    }

    out
}
