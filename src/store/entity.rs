use serde::Serialize;
use tokio_postgres::Row;

/// Name of the table holding entities
pub const TABLE_NAME: &str = "testentity";

/// The single persisted record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    /// Assigned by the database on insert, never reused
    pub id: i32,
    pub value: String,
}

impl Entity {
    pub fn new(id: i32, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

impl From<&Row> for Entity {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            value: row.get("value"),
        }
    }
}
