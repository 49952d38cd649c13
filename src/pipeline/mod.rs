pub mod stage1_load;
pub mod stage2_totals;
pub mod stage3_sort;
pub mod stage4_report;
