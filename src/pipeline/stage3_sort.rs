use crate::model::{RankingTable, SortOrder};

pub fn run_stage3(table: &mut RankingTable, order: SortOrder) {
    match order {
        SortOrder::Descending => table.sort_descending_by_total(),
        SortOrder::Ascending => table.sort_ascending_by_total(),
    }

    if table.is_empty() {
        tracing::info!(order = order.as_str(), "sorted empty table");
        return;
    }
    let entries = table.entries();
    let (first, last) = (&entries[0], &entries[entries.len() - 1]);
    tracing::info!(
        order = order.as_str(),
        first = %first.name,
        first_total = first.total,
        last = %last.name,
        last_total = last.total,
        "sorted by total"
    );
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_sort.rs"]
mod tests;
