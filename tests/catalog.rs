use simpledb::catalog::Catalog;
use simpledb::errors::catalog_error::CatalogError;
use simpledb::types::catalog_types::{ColumnDefinition, Datatype, TableSchema};
use std::fs;
use tempfile::tempdir;

fn users_schema() -> TableSchema {
    TableSchema {
        table_name: "users".to_string(),
        column_definitions: vec![
            ColumnDefinition {
                column_name: "id".to_string(),
                datatype: Datatype::Int,
            },
            ColumnDefinition {
                column_name: "name".to_string(),
                datatype: Datatype::Text,
            },
        ],
    }
}

#[test]
fn test_initialize_without_file_is_empty() {
    let dir = tempdir().unwrap();
    let catalog = Catalog::initialize(dir.path()).unwrap();
    assert!(catalog.get_all_schemas().is_empty());
    assert!(!catalog.table_exists("users"));
}

#[test]
fn test_add_table_visible_in_memory_and_after_reload() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::initialize(dir.path()).unwrap();
    catalog.add_table(users_schema()).unwrap();

    assert!(catalog.table_exists("users"));
    assert_eq!(catalog.get_schema("users"), Some(&users_schema()));

    let reloaded = Catalog::initialize(dir.path()).unwrap();
    assert!(reloaded.table_exists("users"));
    assert_eq!(reloaded.get_schema("users"), Some(&users_schema()));
}

#[test]
fn test_add_duplicate_table_rejected() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::initialize(dir.path()).unwrap();
    catalog.add_table(users_schema()).unwrap();

    assert!(matches!(
        catalog.add_table(users_schema()),
        Err(CatalogError::DuplicateTable(name)) if name == "users"
    ));
    assert_eq!(catalog.get_all_schemas().len(), 1);
}

#[test]
fn test_add_table_with_duplicate_columns_rejected() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::initialize(dir.path()).unwrap();

    let schema = TableSchema {
        table_name: "t".to_string(),
        column_definitions: vec![
            ColumnDefinition {
                column_name: "id".to_string(),
                datatype: Datatype::Int,
            },
            ColumnDefinition {
                column_name: "id".to_string(),
                datatype: Datatype::Text,
            },
        ],
    };
    assert!(matches!(
        catalog.add_table(schema),
        Err(CatalogError::Corrupt(_))
    ));
    assert!(catalog.get_all_schemas().is_empty());
}

#[test]
fn test_remove_table_gone_in_memory_and_after_reload() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::initialize(dir.path()).unwrap();
    catalog.add_table(users_schema()).unwrap();

    catalog.remove_table("users").unwrap();
    assert!(!catalog.table_exists("users"));

    let reloaded = Catalog::initialize(dir.path()).unwrap();
    assert!(!reloaded.table_exists("users"));
}

#[test]
fn test_remove_missing_table_rejected() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::initialize(dir.path()).unwrap();
    assert!(matches!(
        catalog.remove_table("nope"),
        Err(CatalogError::UnknownTable(name)) if name == "nope"
    ));
}

#[test]
fn test_schemas_keep_insertion_order() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::initialize(dir.path()).unwrap();
    for name in ["zebra", "apple", "mango"] {
        catalog
            .add_table(TableSchema {
                table_name: name.to_string(),
                column_definitions: vec![ColumnDefinition {
                    column_name: "id".to_string(),
                    datatype: Datatype::Int,
                }],
            })
            .unwrap();
    }

    let names: Vec<&str> = catalog
        .get_all_schemas()
        .iter()
        .map(|s| s.table_name.as_str())
        .collect();
    assert_eq!(names, vec!["zebra", "apple", "mango"]);

    let reloaded = Catalog::initialize(dir.path()).unwrap();
    let names: Vec<&str> = reloaded
        .get_all_schemas()
        .iter()
        .map(|s| s.table_name.as_str())
        .collect();
    assert_eq!(names, vec!["zebra", "apple", "mango"]);
}

#[test]
fn test_catalog_file_shape() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::initialize(dir.path()).unwrap();
    catalog.add_table(users_schema()).unwrap();

    let text = fs::read_to_string(dir.path().join("catalog.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {
                "table_name": "users",
                "column_definitions": [
                    { "column_name": "id", "type": "INT" },
                    { "column_name": "name", "type": "TEXT" }
                ]
            }
        ])
    );
}

#[test]
fn test_malformed_catalog_is_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("catalog.json"), "{ this is not valid json").unwrap();
    assert!(Catalog::initialize(dir.path()).is_err());
}

#[test]
fn test_empty_catalog_file_is_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("catalog.json"), "").unwrap();
    assert!(Catalog::initialize(dir.path()).is_err());
}

#[test]
fn test_wrong_structure_is_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("catalog.json"), r#"{"key1": "value1"}"#).unwrap();
    assert!(Catalog::initialize(dir.path()).is_err());
}

#[test]
fn test_valid_empty_array_is_empty_catalog() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("catalog.json"), "[]").unwrap();
    let catalog = Catalog::initialize(dir.path()).unwrap();
    assert!(catalog.get_all_schemas().is_empty());
}

#[test]
fn test_duplicate_tables_on_disk_are_fatal() {
    let dir = tempdir().unwrap();
    let entry = r#"{"table_name": "t", "column_definitions": [{"column_name": "id", "type": "INT"}]}"#;
    fs::write(
        dir.path().join("catalog.json"),
        format!("[{entry}, {entry}]"),
    )
    .unwrap();
    assert!(Catalog::initialize(dir.path()).is_err());
}

#[test]
fn test_reinitialize_same_path_is_noop() {
    let dir = tempdir().unwrap();
    let mut catalog = Catalog::initialize(dir.path()).unwrap();
    catalog.add_table(users_schema()).unwrap();

    catalog.reinitialize(dir.path()).unwrap();
    assert!(catalog.table_exists("users"));
}

#[test]
fn test_reinitialize_different_path_resets_state() {
    let dir = tempdir().unwrap();
    let other = tempdir().unwrap();
    let mut catalog = Catalog::initialize(dir.path()).unwrap();
    catalog.add_table(users_schema()).unwrap();

    catalog.reinitialize(other.path()).unwrap();
    assert!(!catalog.table_exists("users"));
    assert_eq!(catalog.catalog_path(), other.path().join("catalog.json"));
}
