use crate::converters::FieldConverter;
use scriba_domain::model::Glyphs;

/// Raw hieroglyph encoding to a structured [`Glyphs`] sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlyphConverter;

impl FieldConverter for GlyphConverter {
    type Source = String;
    type Target = Glyphs;

    fn convert(&self, source: Option<String>) -> Glyphs {
        Glyphs::of(source.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn absent_input_is_an_empty_sequence() {
        assert!(GlyphConverter.convert(None).is_empty());
        assert!(GlyphConverter.convert(Some(String::new())).is_empty());
    }

    proptest! {
        #[test]
        fn preserves_glyph_order(
            codes in prop::collection::vec("[A-Z][0-9]{1,2}[a-z]?", 1..12),
            joiners in prop::collection::vec(prop::sample::select(vec!["-", ":", "*", "&", " "]), 12),
        ) {
            let mut raw = String::new();
            for (i, code) in codes.iter().enumerate() {
                if i > 0 {
                    raw.push_str(joiners[i]);
                }
                raw.push_str(code);
            }

            let glyphs = GlyphConverter.convert(Some(raw.clone()));
            prop_assert!(!glyphs.is_empty());
            prop_assert_eq!(glyphs.codes().collect::<Vec<_>>(), codes.iter().map(String::as_str).collect::<Vec<_>>());
            prop_assert_eq!(glyphs.mdc, raw);
        }
    }
}
