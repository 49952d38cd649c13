use crate::model::RankingTable;
use crate::report::{SummaryData, format_f32_2};

/// Dumps marks, totals and names as three parallel lists in table order.
pub fn render_views(table: &RankingTable) -> String {
    let marks = table
        .marks()
        .iter()
        .map(|row| format!("[{}]", join_nums(row)))
        .collect::<Vec<_>>()
        .join(", ");
    let names = table
        .names()
        .iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    out.push_str(&format!("\n MARKS:  [{}]\n", marks));
    out.push_str(&format!("\n TOTAL:  [{}]\n", join_nums(&table.totals())));
    out.push_str(&format!("\n NAMES:  [{}]\n", names));
    out
}

pub fn render_ranked_table(table: &RankingTable) -> String {
    let name_width = table
        .names()
        .iter()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .max("name".len());

    let mut out = String::new();
    out.push_str(&format!("{:>4}  {:<width$}", "rank", "name", width = name_width));
    for s in 0..table.n_subjects() {
        out.push_str(&format!("  {:>4}", format!("s{}", s + 1)));
    }
    out.push_str("  total\n");

    for (i, entry) in table.entries().iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<width$}",
            i + 1,
            entry.name,
            width = name_width
        ));
        for score in &entry.scores {
            out.push_str(&format!("  {:>4}", score));
        }
        out.push_str(&format!("  {:>5}\n", entry.total));
    }
    out
}

pub fn render_report_text(table: &RankingTable, summary: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Marks Ranking Report\n");
    out.push_str("====================\n\n");

    out.push_str(&format!("Input: {}\n", summary.input));
    out.push_str(&format!("Order: {}\n", summary.order));
    out.push_str(&format!(
        "Entries: {}\nSubjects: {}\n",
        summary.n_entries, summary.n_subjects
    ));
    if let Some(stats) = &summary.totals {
        out.push_str(&format!(
            "Total range: {}..{}\nTotal median: {}\nTotal mean: {}\n",
            stats.min,
            stats.max,
            stats.median,
            format_f32_2(stats.mean)
        ));
    }
    if !summary.subject_means.is_empty() {
        let means = summary
            .subject_means
            .iter()
            .map(|&m| format_f32_2(m))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("Subject means: {}\n", means));
    }
    out.push('\n');

    out.push_str(&render_ranked_table(table));
    out.push_str(&render_views(table));
    out
}

fn join_nums(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
