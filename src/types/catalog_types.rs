use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Datatype {
    #[serde(rename = "INT")]
    Int, // signed decimal integer, stored as text
    #[serde(rename = "TEXT")]
    Text, // arbitrary string
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Datatype::Int => "INT",
            Datatype::Text => "TEXT",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub column_name: String,
    #[serde(rename = "type")]
    pub datatype: Datatype,
}

/// A table's name plus its ordered column definitions. Column order is
/// significant: it defines the physical field order inside records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub table_name: String,
    pub column_definitions: Vec<ColumnDefinition>,
}

impl TableSchema {
    pub fn column_index(&self, column_name: &str) -> Option<usize> {
        self.column_definitions
            .iter()
            .position(|c| c.column_name == column_name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.column_definitions
            .iter()
            .map(|c| c.column_name.clone())
            .collect()
    }
}
