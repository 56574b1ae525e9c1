use scriba_domain::model_class;

/// A model that forgot its discriminant.
#[model_class]
pub struct Untagged {
    pub id: String,
}

fn main() {}
