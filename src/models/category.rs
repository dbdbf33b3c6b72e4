use serde::{Deserialize, Serialize};

/// A stored category, as returned by list, get and create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Body of category create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryInput {
    #[serde(default)]
    pub name: String,
}

impl Category {
    pub fn from_input(id: i32, input: CategoryInput) -> Self {
        Self {
            id,
            name: input.name,
        }
    }
}
