use super::*;
use crate::input::sample::sample_table;

#[test]
fn test_sample_totals() {
    let mut table = sample_table().unwrap();
    run_stage2(&mut table);
    let totals = table.totals();
    assert_eq!(
        totals,
        vec![
            235, 248, 214, 247, 191, 255, 158, 237, 235, 176, 280, 189, 236, 211, 240, 215, 191,
            268, 181, 282, 143, 206, 239, 186, 277, 234, 172, 266, 224, 203,
        ]
    );
    for entry in table.entries() {
        assert_eq!(entry.total, entry.scores.iter().sum::<u32>());
    }
}
