//! CSV exchange format for a single worksheet.
//!
//! Export writes a byte-order mark, a fixed header and one fully quoted data
//! row. Import reads the second line of a file with a field pattern that
//! accepts either a quoted span (with `""` escapes) or a bare run of
//! non-comma, non-quote, non-whitespace characters, each of which must be
//! followed by optional whitespace and then a comma or the end of the line.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::{QuadrantRecord, Worksheet};

/// Header row written on export.
pub const CSV_HEADER: &str = "Theme,KeepPros,KeepCons,ChangeCons,ChangePros,AI Analysis";

/// Fields an import row must provide: theme plus the four quadrants.
pub const REQUIRED_IMPORT_FIELDS: usize = 5;

const BYTE_ORDER_MARK: char = '\u{feff}';

static FIELD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""(?:[^"]|"")*"|[^",\s]+"#).unwrap());

/// Reasons a CSV file cannot be imported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("CSV must contain a header line and a data line, found {found} line(s)")]
    TooFewLines { found: usize },

    #[error("CSV data row has {found} field(s), expected at least {REQUIRED_IMPORT_FIELDS}")]
    TooFewFields { found: usize },
}

impl ImportError {
    /// Corrective message for the person who picked the file.
    pub fn user_message(&self) -> &'static str {
        match self {
            ImportError::TooFewLines { .. } => "The CSV format does not look right.",
            ImportError::TooFewFields { .. } => {
                "Some data seems to be missing. List the columns in the order \
                 Theme, KeepPros, KeepCons, ChangeCons, ChangePros."
            }
        }
    }
}

/// Theme and quadrants read from an import file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedRow {
    pub theme: String,
    pub record: QuadrantRecord,
}

impl ImportedRow {
    /// Converts the row into a worksheet without analysis.
    pub fn into_worksheet(self) -> Worksheet {
        Worksheet::with_record(self.theme, self.record)
    }
}

/// A rendered export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

impl CsvExport {
    /// Renders `worksheet` as an export file dated `date`.
    pub fn for_worksheet(worksheet: &Worksheet, date: NaiveDate) -> Self {
        Self {
            file_name: export_file_name(date),
            content: export_csv(worksheet),
        }
    }

    /// UTF-8 bytes of the file, byte-order mark included.
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

/// Renders the worksheet as CSV text, byte-order mark first.
pub fn export_csv(worksheet: &Worksheet) -> String {
    let record = &worksheet.record;
    let row = [
        worksheet.theme.as_str(),
        record.keep_pros.as_str(),
        record.keep_cons.as_str(),
        record.change_cons.as_str(),
        record.change_pros.as_str(),
        worksheet.analysis.as_deref().unwrap_or(""),
    ]
    .iter()
    .map(|field| quote_field(field))
    .collect::<Vec<_>>()
    .join(",");

    format!("{BYTE_ORDER_MARK}{CSV_HEADER}\n{row}")
}

/// Download name for an export made on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("conflict_management_{}.csv", date.format("%Y-%m-%d"))
}

/// Parses the data row (line 2) of an import file.
///
/// Line 1 is assumed to be a header and is ignored. Columns beyond the
/// fifth (such as an exported analysis) are ignored too.
pub fn parse_import(raw: &str) -> Result<ImportedRow, ImportError> {
    let lines = split_lines(raw);
    if lines.len() < 2 {
        return Err(ImportError::TooFewLines { found: lines.len() });
    }

    let fields = tokenize(lines[1]);
    if fields.len() < REQUIRED_IMPORT_FIELDS {
        return Err(ImportError::TooFewFields {
            found: fields.len(),
        });
    }

    let mut fields = fields.into_iter();
    let mut next = || fields.next().unwrap_or_default();
    let theme = next();
    let record = QuadrantRecord::new(next(), next(), next(), next());

    Ok(ImportedRow { theme, record })
}

fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Splits on `\n`, except inside a quoted span, dropping a trailing `\r`.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '\n' if !in_quotes => {
                lines.push(strip_carriage_return(&text[start..idx]));
                start = idx + 1;
            }
            _ => {}
        }
    }
    lines.push(strip_carriage_return(&text[start..]));

    lines
}

fn strip_carriage_return(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn tokenize(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let Some(found) = FIELD_PATTERN.find_at(line, pos) else {
            break;
        };

        if ends_at_field_boundary(&line[found.end()..]) {
            fields.push(unwrap_field(found.as_str()));
            pos = found.end();
        } else {
            // Not followed by a separator: rescan from the next character.
            let step = line[found.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            pos = found.start() + step;
        }
    }

    if fields.is_empty() {
        return line.split(',').map(str::to_string).collect();
    }
    fields
}

fn ends_at_field_boundary(rest: &str) -> bool {
    let rest = rest.trim_start();
    rest.is_empty() || rest.starts_with(',')
}

fn unwrap_field(token: &str) -> String {
    let inner = token.strip_prefix('"').unwrap_or(token);
    let inner = inner.strip_suffix('"').unwrap_or(inner);
    inner.replace("\"\"", "\"")
}
