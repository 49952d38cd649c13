pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::RankingTable;

#[derive(Debug, Clone, Serialize)]
pub struct TotalStats {
    pub min: u32,
    pub max: u32,
    pub median: u32,
    pub p10: u32,
    pub p90: u32,
    pub mean: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedRow {
    pub rank: usize,
    pub name: String,
    pub scores: Vec<u32>,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool_name: String,
    pub tool_version: String,
    pub input: String,
    pub order: String,

    pub n_entries: usize,
    pub n_subjects: usize,

    pub totals: Option<TotalStats>,
    pub subject_means: Vec<f32>,

    pub top: Option<RankedRow>,
    pub bottom: Option<RankedRow>,
    pub ranking: Vec<RankedRow>,
}

pub fn ranked_rows(table: &RankingTable) -> Vec<RankedRow> {
    table
        .entries()
        .iter()
        .enumerate()
        .map(|(i, e)| RankedRow {
            rank: i + 1,
            name: e.name.clone(),
            scores: e.scores.clone(),
            total: e.total,
        })
        .collect()
}

pub fn total_stats(table: &RankingTable) -> Option<TotalStats> {
    let totals = table.totals();
    let min = *totals.iter().min()?;
    let max = *totals.iter().max()?;
    Some(TotalStats {
        min,
        max,
        median: median(&totals),
        p10: p10(&totals),
        p90: p90(&totals),
        mean: mean(&totals),
    })
}

pub fn subject_means(table: &RankingTable) -> Vec<f32> {
    let mut sums = vec![0f64; table.n_subjects()];
    for entry in table.entries() {
        for (s, &v) in entry.scores.iter().enumerate() {
            sums[s] += v as f64;
        }
    }
    let n = table.len();
    sums.into_iter()
        .map(|s| if n == 0 { 0.0 } else { (s / n as f64) as f32 })
        .collect()
}

pub fn format_f32_2(v: f32) -> String {
    format!("{:.2}", v)
}

/// Nearest-rank quantile over integer totals, rounding the rank up.
/// Empty input yields 0.
pub fn quantile_indexed(values: &[u32], p: f64) -> u32 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    match sorted.len() {
        0 => 0,
        n => sorted[((n - 1) as f64 * p).ceil() as usize],
    }
}

pub fn median(values: &[u32]) -> u32 {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[u32]) -> u32 {
    quantile_indexed(values, 0.10)
}

pub fn p90(values: &[u32]) -> u32 {
    quantile_indexed(values, 0.90)
}

pub fn mean(values: &[u32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: u64 = values.iter().map(|&v| v as u64).sum();
    (sum as f64 / values.len() as f64) as f32
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
