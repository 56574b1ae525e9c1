//! Field converters for transfer-object fields that do not copy 1:1 onto the model.
//!
//! A converter is a pure, typed function from the source field (absent or `null` becomes
//! `None`) to the target field's value. The engine erases the types so converters can be
//! stored side by side in a [`TypeMap`](crate::TypeMap).

mod glyphs;
mod references;

pub use glyphs::GlyphConverter;
pub use references::ExternalReferenceConverter;

use serde::Serialize;
use serde::de::{Deserialize, DeserializeOwned};
use serde_json::Value;

/// A deterministic, side-effect-free transform for one field.
pub trait FieldConverter: Send + Sync + 'static {
    type Source: DeserializeOwned;
    type Target: Serialize;

    /// Called even when the source field is absent, so converters can supply a default.
    fn convert(&self, source: Option<Self::Source>) -> Self::Target;
}

/// Type-erased converter as stored inside a type map.
pub(crate) trait ErasedConverter: Send + Sync {
    fn apply(&self, source: Option<&Value>) -> Result<Value, serde_json::Error>;

    fn type_name(&self) -> &'static str;
}

impl<C: FieldConverter> ErasedConverter for C {
    fn apply(&self, source: Option<&Value>) -> Result<Value, serde_json::Error> {
        let typed = match source {
            None | Some(Value::Null) => None,
            Some(value) => Some(C::Source::deserialize(value)?),
        };
        serde_json::to_value(self.convert(typed))
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<C>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Upper;

    impl FieldConverter for Upper {
        type Source = String;
        type Target = String;

        fn convert(&self, source: Option<String>) -> String {
            source.unwrap_or_default().to_uppercase()
        }
    }

    #[test]
    fn erased_converter_treats_null_as_absent() {
        assert_eq!(Upper.apply(None).expect("absent"), json!(""));
        assert_eq!(Upper.apply(Some(&Value::Null)).expect("null"), json!(""));
        assert_eq!(Upper.apply(Some(&json!("nfr"))).expect("value"), json!("NFR"));
    }

    #[test]
    fn erased_converter_reports_wrong_shape() {
        assert!(Upper.apply(Some(&json!([1, 2]))).is_err());
    }
}
