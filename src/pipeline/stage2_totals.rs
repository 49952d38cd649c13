use crate::model::RankingTable;

pub fn run_stage2(table: &mut RankingTable) {
    table.compute_totals();
    tracing::info!(entries = table.len(), "computed totals");
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_totals.rs"]
mod tests;
