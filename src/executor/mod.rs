mod create;
mod drop;
mod insert;
mod select;
mod show_tables;

pub use create::execute_create_table;
pub use drop::execute_drop_table;
pub use insert::execute_insert;
pub use select::execute_select;
pub use show_tables::execute_show_tables;
