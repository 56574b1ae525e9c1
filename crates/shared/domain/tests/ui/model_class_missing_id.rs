use scriba_domain::model_class;

#[model_class(eclass = "BTSText")]
pub struct Text {
    pub name: Option<String>,
}

fn main() {}
