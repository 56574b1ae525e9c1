use scriba_domain::model::{ModelClass, Object};
use scriba_domain::model_class;

/// A model without a `name` field.
#[model_class(eclass = "BTSTextCorpus")]
pub struct Corpus {
    pub id: String,
    pub size: u32,
}

#[model_class(eclass = "BTSSentence")]
pub struct Sentence {
    pub id: String,
    pub name: Option<String>,
    pub token_count: u32,
}

fn main() {
    assert_eq!(Corpus::ECLASS, "BTSTextCorpus");

    let corpus: Corpus = serde_json::from_value(serde_json::json!({ "id": "c1" })).unwrap();
    assert_eq!(corpus.size, 0);
    assert_eq!(Object::name(&corpus), None);

    let sentence: Sentence =
        serde_json::from_value(serde_json::json!({ "id": "s1", "name": "s", "tokenCount": 4 }))
            .unwrap();
    assert_eq!(sentence.token_count, 4);

    let boxed: Box<dyn Object> = Box::new(sentence.clone());
    assert_eq!(boxed.eclass(), "BTSSentence");
    assert_eq!(boxed.downcast_ref::<Sentence>(), Some(&sentence));
    assert!(boxed.downcast::<Corpus>().is_err());
}
