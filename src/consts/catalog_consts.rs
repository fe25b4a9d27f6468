pub const CATALOG_FILE: &str = "catalog.json";
