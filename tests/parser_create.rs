use simpledb::parser::parse_sql;
use simpledb::types::catalog_types::Datatype;
use simpledb::types::command_types::Command;

#[test]
fn test_create_table() {
    let cmd = parse_sql("CREATE TABLE users (id INT, name TEXT)").unwrap();
    let Command::CreateTable(cmd) = cmd else {
        panic!("unexpected command: {cmd:?}");
    };
    assert_eq!(cmd.table_name, "users");
    assert_eq!(cmd.column_definitions.len(), 2);
    assert_eq!(cmd.column_definitions[0].column_name, "id");
    assert_eq!(cmd.column_definitions[0].datatype, Datatype::Int);
    assert_eq!(cmd.column_definitions[1].column_name, "name");
    assert_eq!(cmd.column_definitions[1].datatype, Datatype::Text);
}

#[test]
fn test_keywords_and_types_are_case_insensitive() {
    let cmd = parse_sql("create table t (a int, b text);").unwrap();
    let Command::CreateTable(cmd) = cmd else {
        panic!("unexpected command: {cmd:?}");
    };
    assert_eq!(cmd.column_definitions[0].datatype, Datatype::Int);
    assert_eq!(cmd.column_definitions[1].datatype, Datatype::Text);
}

#[test]
fn test_quoted_identifiers() {
    let cmd = parse_sql(r#"CREATE TABLE "my table" ("the ""id"" col" INT)"#).unwrap();
    let Command::CreateTable(cmd) = cmd else {
        panic!("unexpected command: {cmd:?}");
    };
    assert_eq!(cmd.table_name, "my table");
    assert_eq!(cmd.column_definitions[0].column_name, r#"the "id" col"#);
}

#[test]
fn test_single_column() {
    let cmd = parse_sql("CREATE TABLE t (id INT);").unwrap();
    let Command::CreateTable(cmd) = cmd else {
        panic!("unexpected command: {cmd:?}");
    };
    assert_eq!(cmd.column_definitions.len(), 1);
}

#[test]
fn test_unknown_type_rejected() {
    assert!(parse_sql("CREATE TABLE t (id FLOAT)").is_err());
}

#[test]
fn test_missing_parens_rejected() {
    assert!(parse_sql("CREATE TABLE t id INT").is_err());
    assert!(parse_sql("CREATE TABLE t (id INT").is_err());
}

#[test]
fn test_empty_column_list_rejected() {
    assert!(parse_sql("CREATE TABLE t ()").is_err());
}

#[test]
fn test_drop_table() {
    let cmd = parse_sql("DROP TABLE users;").unwrap();
    let Command::DropTable(cmd) = cmd else {
        panic!("unexpected command: {cmd:?}");
    };
    assert_eq!(cmd.table_name, "users");
}

#[test]
fn test_show_tables() {
    assert_eq!(parse_sql("SHOW TABLES").unwrap(), Command::ShowTables);
    assert_eq!(parse_sql("show tables;").unwrap(), Command::ShowTables);
}

#[test]
fn test_unrecognized_command() {
    assert!(parse_sql("EXPLAIN SELECT * FROM t").is_err());
    assert!(parse_sql("").is_err());
}
