use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

pub const TOPICS_PER_ROW: usize = 4;

const TITLE: &str = "Are You Smarter than a Junior Developer?";

pub fn render_banner() -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![Cell::new(format!("Welcome to '{}'!", TITLE))
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Center)]);
    table.add_row(vec![Cell::new(
        "Name the keyboard shortcut for each task. Ctrl+C or Ctrl+D quits.",
    )
    .set_alignment(CellAlignment::Center)]);

    format!("\n{}\n", table)
}

/// "code folding" -> "Code Folding"
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Topic labels in a grid, `TOPICS_PER_ROW` per row.
pub fn render_topics(topics: &[String]) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for chunk in topics.chunks(TOPICS_PER_ROW) {
        let cells: Vec<Cell> = chunk
            .iter()
            .map(|t| Cell::new(title_case(t)).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    table.to_string()
}
