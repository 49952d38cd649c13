pub mod entry;
pub mod order;

pub use entry::{Entry, RankingTable, TableError};
pub use order::SortOrder;
