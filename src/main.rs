use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use pipegrid::cli::{CliArgs, RunConfig};
use pipegrid::config::TableConfig;
use pipegrid::messages::TableMsg;
use pipegrid::model::{AppModel, Document};
use pipegrid::table::{find_cell_at_cursor, find_table_at_cursor, Alignment, CellAddress, TableInfo};
use pipegrid::update::update_table;

/// JSON shape printed by `pipegrid inspect`
#[derive(Serialize)]
struct InspectReport<'a> {
    cursor: usize,
    cell: Option<CellAddress>,
    columns: usize,
    alignments: Vec<Alignment>,
    table: &'a TableInfo,
}

fn main() -> Result<()> {
    pipegrid::tracing::init();

    let args = CliArgs::parse();
    let run = args.into_config().map_err(anyhow::Error::msg)?;

    let config = match &run.config_path {
        Some(path) => TableConfig::load_from(path),
        None => TableConfig::load(),
    };

    let document = Document::from_file(run.file.clone())
        .with_context(|| format!("Failed to read {}", run.file.display()))?;
    let text = document.text();
    let cursor = run.cursor.resolve(&text).map_err(anyhow::Error::msg)?;

    match run.action.table_msg() {
        Some(msg) => run_table_command(&run, document, config, cursor, msg),
        None => inspect(&text, cursor),
    }
}

fn run_table_command(
    run: &RunConfig,
    mut document: Document,
    config: TableConfig,
    cursor: usize,
    msg: TableMsg,
) -> Result<()> {
    document.set_cursor_byte_offset(cursor);
    let mut model = AppModel::new(document, config);

    let changed = update_table(&mut model, msg);
    let status = model.status_text().unwrap_or_default().to_string();
    if !changed {
        bail!("{}", status);
    }

    let (line, column) = model.document.offset_to_cursor(model.document.cursor);
    if msg.is_edit() {
        if run.write {
            model
                .document
                .save()
                .with_context(|| format!("Failed to write {}", run.file.display()))?;
        } else {
            print!("{}", model.document.text());
        }
    }

    let offset = model.document.cursor_byte_offset();
    if status.is_empty() {
        eprintln!("cursor {} (line {}, column {})", offset, line + 1, column + 1);
    } else {
        eprintln!(
            "{}: cursor {} (line {}, column {})",
            status,
            offset,
            line + 1,
            column + 1
        );
    }
    Ok(())
}

fn inspect(text: &str, cursor: usize) -> Result<()> {
    let Some(table) = find_table_at_cursor(text, cursor) else {
        bail!("Not in a table");
    };

    let report = InspectReport {
        cursor,
        cell: find_cell_at_cursor(&table, cursor),
        columns: table.column_count(),
        alignments: table.column_alignments(text),
        table: &table,
    };
    let json = serde_json::to_string_pretty(&report).context("Failed to encode table")?;
    println!("{}", json);
    Ok(())
}
