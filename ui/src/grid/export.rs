//! Serializes the displayed part of the grid to downloadable files.

use std::io::Cursor;

use api::transaction_record::TransactionRecord;
use quick_xml::events::BytesDecl;
use quick_xml::events::BytesText;
use quick_xml::events::Event;
use quick_xml::Writer;
use thiserror::Error;

use super::column::ColumnDef;
use super::column::FilterKind;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet serialization failed: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("could not write export buffer: {0}")]
    Io(#[from] std::io::Error),
}

/// A serialized export, ready to be handed to the platform's save mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

pub const CSV_FILE_NAME: &str = "export.csv";
pub const SPREADSHEET_FILE_NAME: &str = "export.xml";

/// Header row then one line per row, every field quoted.
pub fn to_csv(columns: &[&ColumnDef], rows: &[&TransactionRecord]) -> Result<ExportFile, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(columns.iter().map(|c| c.header))?;
    for row in rows {
        writer.write_record(columns.iter().map(|c| row.get(c.field)))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(ExportFile {
        file_name: CSV_FILE_NAME,
        mime_type: "text/csv;charset=utf-8",
        bytes,
    })
}

/// A single-sheet SpreadsheetML 2003 workbook with a bold header row.
///
/// Number-column cells a spreadsheet double holds exactly are typed `Number`;
/// everything else, including most wei amounts, stays `String`.
pub fn to_spreadsheet(
    columns: &[&ColumnDef],
    rows: &[&TransactionRecord],
) -> Result<ExportFile, ExportError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::PI(BytesText::from_escaped(
        r#"mso-application progid="Excel.Sheet""#,
    )))?;

    writer
        .create_element("Workbook")
        .with_attribute(("xmlns", "urn:schemas-microsoft-com:office:spreadsheet"))
        .with_attribute(("xmlns:ss", "urn:schemas-microsoft-com:office:spreadsheet"))
        .write_inner_content(|w| {
            w.create_element("Styles").write_inner_content(|w| {
                w.create_element("Style")
                    .with_attribute(("ss:ID", "header"))
                    .write_inner_content(|w| {
                        w.create_element("Font")
                            .with_attribute(("ss:Bold", "1"))
                            .write_empty()?;
                        Ok::<(), quick_xml::Error>(())
                    })?;
                Ok::<(), quick_xml::Error>(())
            })?;

            w.create_element("Worksheet")
                .with_attribute(("ss:Name", "Sheet1"))
                .write_inner_content(|w| {
                    w.create_element("Table").write_inner_content(|w| {
                        w.create_element("Row").write_inner_content(|w| {
                            for column in columns {
                                write_cell(w, "String", column.header, Some("header"))?;
                            }
                            Ok::<(), quick_xml::Error>(())
                        })?;

                        for row in rows {
                            w.create_element("Row").write_inner_content(|w| {
                                for column in columns {
                                    let value = row.get(column.field);
                                    write_cell(w, cell_type(column.filter, value), value, None)?;
                                }
                                Ok::<(), quick_xml::Error>(())
                            })?;
                        }
                        Ok::<(), quick_xml::Error>(())
                    })?;
                    Ok::<(), quick_xml::Error>(())
                })?;
            Ok::<(), quick_xml::Error>(())
        })?;

    Ok(ExportFile {
        file_name: SPREADSHEET_FILE_NAME,
        mime_type: "application/vnd.ms-excel",
        bytes: writer.into_inner().into_inner(),
    })
}

/// Largest magnitude below which every integer is exact in an f64.
const MAX_EXACT_DOUBLE: u64 = 1 << 53;

fn cell_type(kind: FilterKind, value: &str) -> &'static str {
    let exact = |v: &str| {
        v.trim()
            .parse::<i64>()
            .is_ok_and(|n| n.unsigned_abs() <= MAX_EXACT_DOUBLE)
    };
    match kind {
        FilterKind::Number if exact(value) => "Number",
        _ => "String",
    }
}

fn write_cell(
    w: &mut Writer<Cursor<Vec<u8>>>,
    data_type: &str,
    value: &str,
    style: Option<&str>,
) -> Result<(), quick_xml::Error> {
    let mut cell = w.create_element("Cell");
    if let Some(style) = style {
        cell = cell.with_attribute(("ss:StyleID", style));
    }
    cell.write_inner_content(|w| {
        w.create_element("Data")
            .with_attribute(("ss:Type", data_type))
            .write_text_content(BytesText::new(value))?;
        Ok::<(), quick_xml::Error>(())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::column::TRANSACTION_COLUMNS;

    fn record(block: &str, hash: &str, function_name: &str) -> TransactionRecord {
        TransactionRecord {
            block_number: block.into(),
            hash: hash.into(),
            function_name: function_name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn csv_quotes_every_field() {
        let columns = [&TRANSACTION_COLUMNS[0], &TRANSACTION_COLUMNS[7]];
        let r = record("100", "0xabc", "approve(address spender, uint256 \"amount\")");
        let file = to_csv(&columns, &[&r]).unwrap();

        assert_eq!(file.file_name, "export.csv");
        assert_eq!(
            String::from_utf8(file.bytes).unwrap(),
            "\"Block Number\",\"Function Name\"\n\
             \"100\",\"approve(address spender, uint256 \"\"amount\"\")\"\n"
        );
    }

    #[test]
    fn csv_without_rows_is_header_only() {
        let columns: Vec<&ColumnDef> = TRANSACTION_COLUMNS.iter().collect();
        let file = to_csv(&columns, &[]).unwrap();
        let text = String::from_utf8(file.bytes).unwrap();

        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("\"Block Number\",\"Hash\",\"To\""));
    }

    #[test]
    fn spreadsheet_types_and_escapes_cells() {
        let columns = [&TRANSACTION_COLUMNS[0], &TRANSACTION_COLUMNS[1], &TRANSACTION_COLUMNS[3]];
        let r = TransactionRecord {
            block_number: "100".into(),
            hash: "0x<&>".into(),
            value: "1000000000000000000000".into(),
            ..Default::default()
        };
        let file = to_spreadsheet(&columns, &[&r]).unwrap();
        let xml = String::from_utf8(file.bytes).unwrap();

        assert_eq!(file.file_name, "export.xml");
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<?mso-application progid=\"Excel.Sheet\"?>"));
        assert!(xml.contains("<Data ss:Type=\"String\">Block Number</Data>"));
        assert!(xml.contains("<Data ss:Type=\"Number\">100</Data>"));
        assert!(xml.contains("<Data ss:Type=\"String\">0x&lt;&amp;&gt;</Data>"));
        assert!(xml.contains("<Data ss:Type=\"String\">1000000000000000000000</Data>"));
        assert_eq!(xml.matches("<Row>").count(), 2);
    }

    #[test]
    fn spreadsheet_keeps_wei_amounts_exact() {
        let columns = [&TRANSACTION_COLUMNS[3]];
        let big = TransactionRecord {
            value: "1234567890123456789".into(),
            ..Default::default()
        };
        let edge = TransactionRecord {
            value: "9007199254740992".into(),
            ..Default::default()
        };
        let past_edge = TransactionRecord {
            value: "9007199254740993".into(),
            ..Default::default()
        };
        let file = to_spreadsheet(&columns, &[&big, &edge, &past_edge]).unwrap();
        let xml = String::from_utf8(file.bytes).unwrap();

        assert!(xml.contains("<Data ss:Type=\"String\">1234567890123456789</Data>"));
        assert!(xml.contains("<Data ss:Type=\"Number\">9007199254740992</Data>"));
        assert!(xml.contains("<Data ss:Type=\"String\">9007199254740993</Data>"));
    }
}
