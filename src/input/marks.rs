use std::io::BufRead;

use crate::input::InputError;
use crate::model::Entry;

/// Parses tab-separated `name<TAB>score...` rows.
///
/// The first non-comment line is skipped when `is_header` accepts it. Blank
/// lines and `#` comments are skipped, as are empty trailing columns.
/// Subject-count checks are left to `RankingTable::new`.
pub fn parse_marks<R: BufRead>(mut reader: R) -> Result<Vec<Entry>, InputError> {
    let mut buf = String::new();
    let mut entries = Vec::new();
    let mut line_no = 0usize;
    let mut seen_content = false;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            tracing::debug!(line = line_no, "skipping blank or comment line");
            continue;
        }

        let cols = split_columns(line);
        if !seen_content {
            seen_content = true;
            if is_header(&cols) {
                tracing::debug!(line = line_no, "skipping header line");
                continue;
            }
        }
        let name = cols[0];
        if name.is_empty() {
            return Err(InputError::Parse {
                line: line_no,
                msg: "empty name column".to_string(),
            });
        }

        let mut scores = Vec::with_capacity(cols.len() - 1);
        for &col in &cols[1..] {
            let score = col.parse::<u32>().map_err(|_| InputError::Parse {
                line: line_no,
                msg: format!("invalid score '{}' for {}", col, name),
            })?;
            scores.push(score);
        }
        entries.push(Entry::new(name, scores));
    }

    if entries.is_empty() {
        return Err(InputError::Parse {
            line: line_no,
            msg: "marks file has no data rows".to_string(),
        });
    }

    Ok(entries)
}

/// Splits a row on tabs, dropping empty trailing columns left by a trailing tab.
/// Always returns at least the name column.
fn split_columns(line: &str) -> Vec<&str> {
    let mut cols = line.split('\t').map(str::trim).collect::<Vec<_>>();
    while cols.len() > 1 && cols.last().is_some_and(|c| c.is_empty()) {
        cols.pop();
    }
    cols
}

/// A header names its first column `name` and has at least one non-numeric
/// subject column, so a student called "Name" is still read as data.
pub fn is_header(cols: &[&str]) -> bool {
    let Some((first, rest)) = cols.split_first() else {
        return false;
    };
    first.eq_ignore_ascii_case("name") && rest.iter().any(|c| c.parse::<u32>().is_err())
}
