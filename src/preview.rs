use crate::table::RecordTable;

/// Render the first `rows` records of `table` as an aligned text grid.
///
/// ```text
/// communication_type | other
/// -------------------+------
/// 0                  | x
/// ```
pub fn render(table: &RecordTable, rows: usize) -> String {
    let head = table.head(rows);
    let mut widths: Vec<usize> = head.columns().iter().map(|c| c.chars().count()).collect();
    let body: Vec<Vec<String>> = head
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    for row in &body {
        for (w, value) in widths.iter_mut().zip(row) {
            *w = (*w).max(value.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, head.columns(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &body {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, values: &[String], widths: &[usize]) {
    let padded: Vec<String> = values
        .iter()
        .zip(widths)
        .map(|(v, w)| format!("{v:<w$}", w = *w))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
