use serde::{Deserialize, Serialize};

/// A name/value directive that steers how the writer creates a dataset or a
/// layer, as opposed to metadata that ends up in the output itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationOption {
    pub name: String,
    pub value: String,
}

impl CreationOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
