#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Descending,
    Ascending,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Descending => "descending",
            SortOrder::Ascending => "ascending",
        }
    }

    fn out_of_order<K: Ord>(self, left: &K, right: &K) -> bool {
        match self {
            SortOrder::Descending => left < right,
            SortOrder::Ascending => left > right,
        }
    }
}

/// Bubble sort over whole items keyed by `key`.
///
/// Adjacent items are swapped only when strictly out of order, so items with
/// equal keys keep their input order. Stops early once a pass makes no swap.
pub fn adjacent_swap_sort<T, K, F>(items: &mut [T], order: SortOrder, key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let n = items.len();
    for pass in 0..n {
        let mut swapped = false;
        for y in 0..(n - pass).saturating_sub(1) {
            if order.out_of_order(&key(&items[y]), &key(&items[y + 1])) {
                items.swap(y, y + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/order.rs"]
mod tests;
