use crate::input::{InputError, InputSource, load_input};
use crate::model::RankingTable;

pub fn run_stage1(source: &InputSource) -> Result<RankingTable, InputError> {
    let table = load_input(source)?;
    tracing::info!(
        input = %source.label(),
        entries = table.len(),
        subjects = table.n_subjects(),
        "loaded marks table"
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
