use serde::{Deserialize, Serialize};

// Data model representing a Task item
//
// The backend speaks Portuguese on the wire (`descricao`, `concluido`);
// the English names are accepted when decoding.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    #[serde(rename = "descricao", alias = "description")]
    pub description: String,
    #[serde(rename = "concluido", alias = "completed")]
    pub completed: bool,
}
