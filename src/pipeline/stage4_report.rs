use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::model::{RankingTable, SortOrder};
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{SummaryData, ranked_rows, subject_means, total_stats};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub table: &'a RankingTable,
    pub input_label: String,
    pub order: SortOrder,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn build_summary(input: &Stage4Input<'_>) -> SummaryData {
    let ranking = ranked_rows(input.table);
    SummaryData {
        tool_name: input.tool_name.clone(),
        tool_version: input.tool_version.clone(),
        input: input.input_label.clone(),
        order: input.order.as_str().to_string(),
        n_entries: input.table.len(),
        n_subjects: input.table.n_subjects(),
        totals: total_stats(input.table),
        subject_means: subject_means(input.table),
        top: ranking.first().cloned(),
        bottom: ranking.last().cloned(),
        ranking,
    }
}

pub fn write_reports(input: &Stage4Input<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let ranking_path = out_dir.join("ranking.tsv");
    write_ranking_tsv(input.table, &ranking_path)?;

    let summary = build_summary(input);
    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(&summary)?)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(input.table, &summary))?;

    tracing::info!(out = %out_dir.display(), "wrote reports");
    Ok(())
}

fn write_ranking_tsv(table: &RankingTable, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let mut header = vec!["rank".to_string(), "name".to_string()];
    for s in 0..table.n_subjects() {
        header.push(format!("s{}", s + 1));
    }
    header.push("total".to_string());
    writeln!(w, "{}", header.join("\t"))?;

    for (i, entry) in table.entries().iter().enumerate() {
        write!(w, "{}\t{}", i + 1, entry.name)?;
        for score in &entry.scores {
            write!(w, "\t{}", score)?;
        }
        writeln!(w, "\t{}", entry.total)?;
    }
    w.flush()
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
