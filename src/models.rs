use serde::Serialize;
use serde_json::Value;

/// One exported row. `name` always comes from the listing, not the detail
/// response; every other field is whatever the detail endpoint supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonRecord {
    pub id: Option<u64>,
    pub name: String,
    pub height: Option<u64>,
    pub weight: Option<u64>,
    pub experience: Option<u64>,
    pub is_default: Option<bool>,
}

impl PokemonRecord {
    pub fn from_detail(name: &str, detail: &Value) -> Self {
        PokemonRecord {
            id: detail.get("id").and_then(|v| v.as_u64()),
            name: name.to_string(),
            height: detail.get("height").and_then(|v| v.as_u64()),
            weight: detail.get("weight").and_then(|v| v.as_u64()),
            experience: detail.get("base_experience").and_then(|v| v.as_u64()),
            is_default: detail.get("is_default").and_then(|v| v.as_bool()),
        }
    }
}
