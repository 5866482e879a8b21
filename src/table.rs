use comfy_table::{presets::UTF8_FULL, Table};
use indexmap::IndexSet;
use serde_json::Value;

const INDEX_HEADER: &str = "(index)";
const VALUES_HEADER: &str = "Values";

/// Renders an array or object of rows as a table. Each row contributes its
/// keys as columns, in first-seen order; scalar rows go in a `Values`
/// column. Returns `None` for data that has no rows to tabulate.
pub fn render_table(data: &Value) -> Option<String> {
    let rows: Vec<(String, &Value)> = match data {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        _ => return None,
    };

    let mut columns: IndexSet<String> = IndexSet::new();
    let mut has_values = false;
    for (_, row) in &rows {
        match row {
            Value::Object(fields) => columns.extend(fields.keys().cloned()),
            Value::Array(items) => columns.extend((0..items.len()).map(|i| i.to_string())),
            _ => has_values = true,
        }
    }

    let mut header = vec![INDEX_HEADER.to_string()];
    header.extend(columns.iter().cloned());
    if has_values {
        header.push(VALUES_HEADER.to_string());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);

    for (index, row) in &rows {
        let mut cells = vec![index.clone()];
        for column in &columns {
            let cell = match row {
                Value::Object(fields) => fields.get(column).map(cell_text),
                Value::Array(items) => column
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| items.get(i))
                    .map(cell_text),
                _ => None,
            };
            cells.push(cell.unwrap_or_default());
        }
        if has_values {
            let value = match row {
                Value::Object(_) | Value::Array(_) => String::new(),
                scalar => cell_text(scalar),
            };
            cells.push(value);
        }
        table.add_row(cells);
    }

    Some(table.to_string())
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        other => other.to_string(),
    }
}
