use scriba_domain::model::{Annotation, Complete, Lemma, ModelClass, Object, ThsEntry};
use serde_json::json;

#[test]
fn discriminants_are_unique() {
    let mut eclasses = [Annotation::ECLASS, Lemma::ECLASS, ThsEntry::ECLASS];
    eclasses.sort_unstable();
    let before = eclasses.len();
    let mut deduped = eclasses.to_vec();
    deduped.dedup();
    assert_eq!(deduped.len(), before);
}

#[test]
fn absent_fields_fall_back_to_zero_values() {
    let lemma: Lemma = serde_json::from_value(json!({ "id": "10070" })).expect("lemma");
    assert_eq!(lemma.id(), "10070");
    assert!(lemma.words.is_empty());
    assert!(lemma.external_references.is_empty());
    assert!(lemma.edited_by.is_none());
    assert!(lemma.passport.as_value().is_null());
}

#[test]
fn boxed_objects_downcast_to_their_model() {
    let annotation: Annotation =
        serde_json::from_value(json!({ "id": "a1", "name": "n", "body": "b", "type": "lemma" }))
            .expect("annotation");
    assert_eq!(annotation.kind.as_deref(), Some("lemma"));
    assert!(annotation.is_complete());

    let boxed: Box<dyn Object> = Box::new(annotation.clone());
    assert!(boxed.downcast_ref::<Lemma>().is_none());
    let back = boxed.downcast::<Annotation>().expect("same type");
    assert_eq!(back, annotation);

    let boxed: Box<dyn Object> = Box::new(annotation);
    let other = boxed.downcast::<Lemma>().expect_err("different type");
    assert!(other.is::<Annotation>());
}
