use serde::{Deserialize, Serialize};
use std::fmt;

/// How a glyph attaches to the one before it in a hieroglyphic encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Joiner {
    /// `-` or whitespace: next in reading order.
    Sequence,
    /// `:` placed below the previous sign.
    Stack,
    /// `*` side by side within one quadrat.
    Group,
    /// `&` ligature.
    Ligature,
}

impl Joiner {
    const fn from_separator(ch: char) -> Option<Self> {
        match ch {
            '-' | '!' => Some(Self::Sequence),
            ':' => Some(Self::Stack),
            '*' => Some(Self::Group),
            '&' => Some(Self::Ligature),
            c if c.is_ascii_whitespace() => Some(Self::Sequence),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    /// Sign code, e.g. `G17` or `Z1`.
    pub code: String,
    /// `None` for the first glyph of a sequence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joiner: Option<Joiner>,
}

/// A structured glyph sequence parsed from a Manuel-de-Codage style string.
///
/// The raw encoding is kept in `mdc` for display; `signs` preserves reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub mdc: String,
    pub signs: Vec<Glyph>,
}

impl Glyphs {
    /// Parses an optional raw encoding; absent or blank input yields an empty sequence.
    #[must_use]
    pub fn of(raw: Option<&str>) -> Self {
        raw.map_or_else(Self::default, Self::parse)
    }

    /// Parses a raw encoding such as `"G17-Z1:D21"`.
    ///
    /// Parentheses only group visually and are skipped. Separators without a following
    /// sign are dropped; between two signs the last non-whitespace separator wins.
    /// Input made only of separators and parentheses (`"-"`, `"()"`) names no sign and is
    /// treated like an absent encoding: the result is empty.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mdc = raw.trim();
        let mut signs: Vec<Glyph> = Vec::new();
        let mut code = String::new();
        let mut pending: Option<Joiner> = None;

        for ch in mdc.chars() {
            if ch == '(' || ch == ')' {
                push_sign(&mut code, &mut pending, &mut signs);
                continue;
            }
            match Joiner::from_separator(ch) {
                Some(joiner) => {
                    push_sign(&mut code, &mut pending, &mut signs);
                    if !(ch.is_ascii_whitespace() && pending.is_some()) {
                        pending = Some(joiner);
                    }
                },
                None => code.push(ch),
            }
        }
        push_sign(&mut code, &mut pending, &mut signs);

        Self { mdc: mdc.to_owned(), signs }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.signs.len()
    }

    /// Sign codes in reading order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.signs.iter().map(|glyph| glyph.code.as_str())
    }
}

fn push_sign(code: &mut String, pending: &mut Option<Joiner>, signs: &mut Vec<Glyph>) {
    if code.is_empty() {
        return;
    }
    let joiner = if signs.is_empty() { None } else { Some(pending.unwrap_or(Joiner::Sequence)) };
    signs.push(Glyph { code: std::mem::take(code), joiner });
    *pending = None;
}

impl From<&str> for Glyphs {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for Glyphs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mdc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_blank_is_empty() {
        assert!(Glyphs::of(None).is_empty());
        assert!(Glyphs::of(Some("")).is_empty());
        assert!(Glyphs::parse("  \t ").is_empty());
    }

    #[test]
    fn keeps_order_and_joiners() {
        let glyphs = Glyphs::parse("G17-Z1:D21*X1&N35");
        assert_eq!(glyphs.codes().collect::<Vec<_>>(), ["G17", "Z1", "D21", "X1", "N35"]);
        let joiners: Vec<_> = glyphs.signs.iter().map(|g| g.joiner).collect();
        assert_eq!(
            joiners,
            [
                None,
                Some(Joiner::Sequence),
                Some(Joiner::Stack),
                Some(Joiner::Group),
                Some(Joiner::Ligature)
            ]
        );
        assert_eq!(glyphs.to_string(), "G17-Z1:D21*X1&N35");
    }

    #[test]
    fn whitespace_does_not_override_explicit_joiner() {
        let glyphs = Glyphs::parse("M17 : Q3");
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs.signs[1].joiner, Some(Joiner::Stack));
    }

    #[test]
    fn skips_parentheses_and_dangling_separators() {
        let glyphs = Glyphs::parse("-(N35:N35)-");
        assert_eq!(glyphs.codes().collect::<Vec<_>>(), ["N35", "N35"]);
        assert_eq!(glyphs.signs[0].joiner, None);
        assert_eq!(glyphs.signs[1].joiner, Some(Joiner::Stack));
    }

    #[test]
    fn separators_alone_name_no_sign() {
        assert!(Glyphs::parse("-").is_empty());
        assert!(Glyphs::parse("()").is_empty());
        assert!(Glyphs::of(Some(" : ")).is_empty());
        assert_eq!(Glyphs::parse("(-)A1").len(), 1);
    }
}
