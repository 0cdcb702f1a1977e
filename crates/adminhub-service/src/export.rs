//! XLSX workbook writer for export downloads.

use std::io::Write;

use rust_xlsxwriter::{Format, Workbook};

use adminhub_core::error::{AppError, ErrorKind};
use adminhub_core::result::AppResult;
use adminhub_core::traits::export::{CellValue, ExportRow};

/// Serialize the rows into an XLSX workbook written to `sink`.
///
/// The first worksheet row holds the column headers in bold; every record
/// becomes one row below it. The whole workbook is assembled in memory
/// before a single write to the sink.
pub fn write_xlsx<R: ExportRow>(
    rows: &[R],
    sheet_name: &str,
    sink: &mut dyn Write,
) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).map_err(xlsx_err)?;

    for (col, name) in R::columns().iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *name, &header_format)
            .map_err(xlsx_err)?;
    }

    for (i, record) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, cell) in record.cells().into_iter().enumerate() {
            let col = col as u16;
            match cell {
                CellValue::Text(v) => {
                    worksheet.write_string(row, col, v).map_err(xlsx_err)?;
                }
                CellValue::Integer(v) => {
                    worksheet
                        .write_number(row, col, v as f64)
                        .map_err(xlsx_err)?;
                }
                CellValue::Float(v) => {
                    worksheet.write_number(row, col, v).map_err(xlsx_err)?;
                }
                CellValue::Boolean(v) => {
                    worksheet.write_boolean(row, col, v).map_err(xlsx_err)?;
                }
                CellValue::Timestamp(v) => {
                    worksheet
                        .write_string(row, col, v.to_rfc3339())
                        .map_err(xlsx_err)?;
                }
                CellValue::Empty => {}
            }
        }
    }

    let buffer = workbook.save_to_buffer().map_err(xlsx_err)?;
    sink.write_all(&buffer)?;
    Ok(())
}

fn xlsx_err(e: rust_xlsxwriter::XlsxError) -> AppError {
    AppError::with_source(ErrorKind::Serialization, format!("XLSX write error: {e}"), e)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use super::*;

    /// Unpack the worksheet and shared-strings XML from a workbook buffer.
    fn workbook_xml(buffer: &[u8]) -> (String, String) {
        let mut archive = zip::ZipArchive::new(Cursor::new(buffer)).unwrap();
        let mut sheet = String::new();
        archive
            .by_name("xl/worksheets/sheet1.xml")
            .unwrap()
            .read_to_string(&mut sheet)
            .unwrap();
        let mut strings = String::new();
        if let Ok(mut file) = archive.by_name("xl/sharedStrings.xml") {
            file.read_to_string(&mut strings).unwrap();
        }
        (sheet, strings)
    }

    struct Row {
        name: &'static str,
        count: i64,
    }

    impl ExportRow for Row {
        fn columns() -> &'static [&'static str] {
            &["Name", "Count"]
        }

        fn cells(&self) -> Vec<CellValue> {
            vec![
                CellValue::Text(self.name.to_string()),
                CellValue::Integer(self.count),
            ]
        }
    }

    #[test]
    fn test_writes_header_and_one_row_per_record() {
        let rows = vec![
            Row {
                name: "alpha",
                count: 1,
            },
            Row {
                name: "beta",
                count: 2,
            },
        ];
        let mut sink = Vec::new();
        write_xlsx(&rows, "export", &mut sink).unwrap();

        // XLSX files are ZIP archives.
        assert!(sink.starts_with(b"PK\x03\x04"));

        let (sheet, strings) = workbook_xml(&sink);
        assert_eq!(sheet.matches("<row").count(), 3);

        let text = format!("{sheet}{strings}");
        assert!(text.contains("Name"));
        assert!(text.contains("Count"));
        assert!(text.contains("alpha"));
        assert!(text.contains("beta"));
        assert!(sheet.contains("<v>2</v>"));
    }

    #[test]
    fn test_empty_row_set_still_writes_headers() {
        let rows: Vec<Row> = Vec::new();
        let mut sink = Vec::new();
        write_xlsx(&rows, "export", &mut sink).unwrap();

        let (sheet, strings) = workbook_xml(&sink);
        assert_eq!(sheet.matches("<row").count(), 1);
        let text = format!("{sheet}{strings}");
        assert!(text.contains("Name"));
        assert!(text.contains("Count"));
    }
}
