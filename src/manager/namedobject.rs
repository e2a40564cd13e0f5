use serde::{
    Serialize,
    Deserialize
};

/// The `name` key every managed JSON object carries; other keys are ignored.
#[derive(Clone, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String
}


impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
