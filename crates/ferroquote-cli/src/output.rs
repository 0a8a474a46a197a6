use std::io::{self, Write};

use ferroquote_core::domain::date::format_date;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;
use time::Date;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// One value in a [`Report`] row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Date(Date),
    Float(f64),
    Int(u64),
    Text(String),
}

impl Cell {
    /// Non-finite floats become `null` in JSON.
    fn to_json(&self) -> Value {
        match self {
            Self::Date(date) => Value::String(format_date(*date)),
            Self::Float(value) => Value::from(*value),
            Self::Int(value) => Value::from(*value),
            Self::Text(text) => Value::String(text.clone()),
        }
    }

    fn to_text(&self) -> String {
        match self {
            Self::Date(date) => format_date(*date),
            Self::Float(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Column-oriented command result.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Report {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }
}

/// Rows serialize as objects whose keys keep the header order.
impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&JsonRow {
                headers: &self.headers,
                cells: row,
            })?;
        }
        seq.end()
    }
}

struct JsonRow<'a> {
    headers: &'a [&'static str],
    cells: &'a [Cell],
}

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (header, cell) in self.headers.iter().zip(self.cells) {
            map.serialize_entry(header, &cell.to_json())?;
        }
        map.end()
    }
}

pub fn render(report: &Report, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), report, format, pretty)
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &Report,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Csv => write_csv(out, report)?,
        OutputFormat::Table => write_table(out, report)?,
    }
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, report: &Report) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(&report.headers)?;
    for row in &report.rows {
        writer.write_record(row.iter().map(Cell::to_text))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let cells: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| row.iter().map(Cell::to_text).collect())
        .collect();

    let widths: Vec<usize> = report
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(String::len)
                .fold(header.len(), usize::max)
        })
        .collect();

    let header: Vec<String> = report
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{h:<w$}"))
        .collect();
    writeln!(out, "{}", header.join("  ").trim_end())?;

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{cell:>w$}"))
            .collect();
        writeln!(out, "{}", line.join("  ").trim_end())?;
    }
    Ok(())
}
