use scriba_derive::scriba_error;
use std::borrow::Cow;

#[scriba_error]
pub enum LookupError {
    #[error("Malformed payload{}: {source}", format_context(.context))]
    Malformed {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown discriminant{}: {message}", format_context(.context))]
    UnknownType { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, LookupError> {
    raw.parse::<u32>().context("Parsing page number")
}

fn main() {
    let err = parse("x").unwrap_err();
    assert!(err.is_malformed());
    assert!(!err.is_unknown_type());
    assert!(err.to_string().contains("(Parsing page number)"));

    let internal: LookupError = "boom".into();
    assert!(internal.is_internal());
}
