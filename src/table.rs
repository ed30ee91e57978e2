use crate::data::{ClassName, ClassRoster, RoomAssignment, Roster};
use crate::error::{Error, Result};
use log::trace;
use std::collections::HashMap;
use std::io;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Builds a roster from a table whose first row names the classes and whose following
/// rows hold one student per class column. Ragged rows and blank cells are allowed.
pub fn parse_roster(rows: &[Vec<String>]) -> Result<Roster> {
    let (headers, body) = rows.split_first().ok_or(Error::EmptyInput)?;

    let mut classes: Vec<ClassRoster> = Vec::new();
    // duplicate headers share the class at their first position
    let mut column_to_class = Vec::with_capacity(headers.len());
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (col_idx, header) in headers.iter().enumerate() {
        let name = if col_idx == 0 {
            header.trim_start_matches(BYTE_ORDER_MARK)
        } else {
            header.as_str()
        };
        let class_idx = *seen.entry(name).or_insert_with(|| {
            classes.push(ClassRoster {
                name: name.to_string(),
                students: Vec::new(),
            });
            classes.len() - 1
        });
        column_to_class.push(class_idx);
    }

    for row in body {
        for (cell, &class_idx) in row.iter().zip(&column_to_class) {
            let name = cell.trim();
            if !name.is_empty() {
                classes[class_idx].students.push(name.to_string());
            }
        }
    }

    trace!(
        "Parsed {} classes from {} header columns and {} rows.",
        classes.len(),
        headers.len(),
        body.len()
    );
    Ok(Roster { classes })
}

/// Lays rooms out as columns under a header row of room names, padding shorter rooms
/// with empty cells up to the longest room.
pub fn render_table(class_order: &[ClassName], rooms: &[RoomAssignment]) -> Vec<Vec<String>> {
    let rows = rooms.iter().map(|r| r.placements.len()).max().unwrap_or(0);
    let by_name: HashMap<&str, &RoomAssignment> =
        rooms.iter().map(|r| (r.name.as_str(), r)).collect();

    let mut table = Vec::with_capacity(rows + 1);
    table.push(class_order.to_vec());
    for i in 0..rows {
        let row = class_order
            .iter()
            .map(|room_name| {
                by_name
                    .get(room_name.as_str())
                    .and_then(|room| room.placements.get(i))
                    .map(|p| p.to_string())
                    .unwrap_or_default()
            })
            .collect();
        table.push(row);
    }
    table
}

pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

pub fn write_csv<W: io::Write>(writer: W, rows: &[Vec<String>]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    for row in rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn read_csv_file(path: &Path) -> Result<Vec<Vec<String>>> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

pub fn write_csv_file(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(file, rows)
}
