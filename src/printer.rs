use crate::types::result_types::{ExecutionResult, ResultSet};

/// Render a result set as one tab-separated header line followed by one
/// tab-separated line per row. No trailing separators, no quoting.
pub fn format_result_set(result_set: &ResultSet) -> String {
    let mut out = result_set.headers.join("\t");
    for row in &result_set.rows {
        out.push('\n');
        out.push_str(&row.join("\t"));
    }
    out
}

pub fn print_result(result: &ExecutionResult) {
    if let Some(message) = result.message() {
        println!("{message}");
    }
    if let Some(data) = result.data() {
        println!("{}", format_result_set(data));
    }
}
