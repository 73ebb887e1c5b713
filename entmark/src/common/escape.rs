//! Backslash escaping by character set.
//!
//! Escaping is a single pass over the text with no re-scan, so a character is escaped at most
//! once and existing backslashes are left alone unless the set itself contains `\`.

/// A set of characters that must be preceded by a backslash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharSet {
    chars: &'static [char],
}

impl CharSet {
    pub const fn new(chars: &'static [char]) -> Self {
        Self { chars }
    }

    pub fn chars(&self) -> &'static [char] {
        self.chars
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}

/// Markup significant characters of plain and emphasised text.
pub static COMMON: CharSet = CharSet::new(&[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
]);

/// Inside code and pre blocks only the fence and the escape character itself are special.
pub static CODE: CharSet = CharSet::new(&['`', '\\']);

/// Label text of link-rendered entities: [`COMMON`] plus `\`.
pub static LINK: CharSet = CharSet::new(&[
    ')', '\\', '_', '*', '[', ']', '(', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
]);

/// The url between the parentheses of a link.
pub static LINK_TARGET: CharSet = CharSet::new(&[')', '\\']);

/// Escape every character of `text` that belongs to `charset`.
pub fn escape_chars(text: &str, charset: &CharSet) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    escape_into(&mut escaped, text, charset);
    escaped
}

/// Same as [`escape_chars`], appending to `out`.
pub fn escape_into(out: &mut String, text: &str, charset: &CharSet) {
    for ch in text.chars() {
        if charset.contains(ch) {
            out.push('\\');
        }
        out.push(ch);
    }
}

pub fn escape_common_chars(text: &str) -> String {
    escape_chars(text, &COMMON)
}

pub fn escape_code_chars(text: &str) -> String {
    escape_chars(text, &CODE)
}

pub fn escape_link_chars(text: &str) -> String {
    escape_chars(text, &LINK)
}
