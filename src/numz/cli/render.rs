use colored::Colorize;
use comfy_table::{presets, Cell, CellAlignment, Table};
use numz::api::{CmdMessage, MessageLevel};
use numz::model::Entry;

const TABLE_TITLE: &str = "Generated Numbers";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

pub fn print_entries(entries: &[Entry]) {
    if entries.is_empty() {
        return;
    }
    println!("{}", render_entries(entries));
}

pub fn render_entries(entries: &[Entry]) -> String {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_header(vec!["Number", "Date Created"]);

    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.number).set_alignment(CellAlignment::Right),
            Cell::new(entry.date_created.format("%Y-%m-%d")),
        ]);
    }

    format!("{}\n{}", TABLE_TITLE, table)
}
