use std::borrow::Cow;

/// Errors raised while registering model types or converting transfer objects.
#[scriba_derive::scriba_error]
pub enum MappingError {
    /// The discriminant has no registered model type; nothing partial is returned.
    #[error("Unknown discriminant '{eclass}'{}", format_context(.context))]
    UnknownType { eclass: String, context: Option<Cow<'static, str>> },

    /// Invalid registration, detected while the mapper is built.
    #[error("Registration error{}: {message}", format_context(.context))]
    Registration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A field could not be copied or converted into the model's shape.
    #[error("Malformed transfer object{}: {source}", format_context(.context))]
    Malformed { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Expected '{expected}' but the transfer object is '{found}'{}", format_context(.context))]
    TypeMismatch { expected: &'static str, found: String, context: Option<Cow<'static, str>> },
}

impl MappingError {
    pub(crate) fn unknown_type(eclass: impl Into<String>) -> Self {
        Self::UnknownType { eclass: eclass.into(), context: None }
    }

    pub(crate) fn registration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Registration { message: message.into(), context: None }
    }
}
