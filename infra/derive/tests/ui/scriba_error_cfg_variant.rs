use scriba_derive::scriba_error;
use std::borrow::Cow;

#[scriba_error]
pub enum FeatureError {
    #[cfg(any())]
    #[error("Disabled{}: {message}", format_context(.context))]
    Disabled { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: Result<(), FeatureError> =
        Err(FeatureError::NotFound { message: "lemma 10070".into(), context: None });
    let err = err.context("retrieve").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Not found (retrieve): lemma 10070");
}
