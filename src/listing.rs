//! Client-side shaping of lists that were already fetched.

use std::cmp::Ordering;

use crate::models::{Expense, ExpenseId, SummaryEntry};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Ascending => "▲",
            SortOrder::Descending => "▼",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SummarySort {
    #[default]
    Period,
    Category,
    Amount,
}

/// Stable: entries that compare equal keep their fetched order in both
/// directions.
pub fn sort_summary(entries: &mut [SummaryEntry], key: SummarySort, order: SortOrder) {
    entries.sort_by(|a, b| {
        let ordering = match key {
            SummarySort::Period => (a.year, a.month).cmp(&(b.year, b.month)),
            SummarySort::Category => a
                .category
                .name
                .to_lowercase()
                .cmp(&b.category.name.to_lowercase()),
            SummarySort::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
        };
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryFilter {
    pub category: String,
    pub year: Option<i32>,
}

impl SummaryFilter {
    pub fn matches(&self, entry: &SummaryEntry) -> bool {
        let needle = self.category.trim().to_lowercase();
        (needle.is_empty() || entry.category.name.to_lowercase().contains(&needle))
            && self.year.map_or(true, |year| entry.year == year)
    }
}

/// Filters, then sorts, a copy of `entries`.
pub fn arrange_summary(
    entries: &[SummaryEntry],
    filter: &SummaryFilter,
    key: SummarySort,
    order: SortOrder,
) -> Vec<SummaryEntry> {
    let mut shown: Vec<SummaryEntry> = entries
        .iter()
        .filter(|entry| filter.matches(entry))
        .cloned()
        .collect();
    sort_summary(&mut shown, key, order);
    shown
}

/// Number of pages for `len` items; an empty list still has one page.
pub fn page_count(len: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    len.div_ceil(per_page).max(1)
}

/// Items on zero-based `page`; pages past the end clamp to the last one.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    let page = page.min(page_count(items.len(), per_page) - 1);
    let start = page * per_page;
    let end = (start + per_page).min(items.len());
    &items[start.min(items.len())..end]
}

/// Removes the expense with `id` and nothing else. Returns whether it was found.
pub fn remove_expense(expenses: &mut Vec<Expense>, id: ExpenseId) -> bool {
    let before = expenses.len();
    expenses.retain(|expense| expense.id != id);
    expenses.len() != before
}

/// Position in a list browsed one item at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.len == 0 || self.index + 1 >= self.len
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1).min(self.len.saturating_sub(1)),
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryRef;

    fn entry(id: i64, category: &str, year: i32, month: u32, amount: f64) -> SummaryEntry {
        SummaryEntry {
            id,
            category: CategoryRef {
                id,
                name: category.to_string(),
            },
            year,
            month,
            amount,
        }
    }

    fn sample() -> Vec<SummaryEntry> {
        vec![
            entry(1, "Food", 2024, 6, 50.0),
            entry(2, "Transport", 2024, 5, 20.0),
            entry(3, "food", 2023, 12, 50.0),
            entry(4, "Utilities", 2024, 6, 80.0),
            entry(5, "Food", 2024, 6, 10.0),
        ]
    }

    fn ids(entries: &[SummaryEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn sort_by_amount_is_stable_both_ways() {
        let mut entries = sample();
        sort_summary(&mut entries, SummarySort::Amount, SortOrder::Ascending);
        assert_eq!(ids(&entries), [5, 2, 1, 3, 4]);

        let mut entries = sample();
        sort_summary(&mut entries, SummarySort::Amount, SortOrder::Descending);
        assert_eq!(ids(&entries), [4, 1, 3, 2, 5]);
    }

    #[test]
    fn sort_by_period_keeps_fetch_order_within_a_month() {
        let mut entries = sample();
        sort_summary(&mut entries, SummarySort::Period, SortOrder::Ascending);
        assert_eq!(ids(&entries), [3, 2, 1, 4, 5]);
    }

    #[test]
    fn sort_by_category_ignores_case() {
        let mut entries = sample();
        sort_summary(&mut entries, SummarySort::Category, SortOrder::Ascending);
        assert_eq!(ids(&entries), [1, 3, 5, 2, 4]);
    }

    #[test]
    fn filter_by_category_and_year() {
        let filter = SummaryFilter {
            category: " FOO ".into(),
            year: Some(2024),
        };
        let shown = arrange_summary(&sample(), &filter, SummarySort::Amount, SortOrder::Ascending);
        assert_eq!(ids(&shown), [5, 1]);
    }

    #[test]
    fn pages_cover_every_item_exactly_once() {
        let items: Vec<usize> = (0..23).collect();
        for per_page in [1, 4, 5, 10, 23, 50] {
            let pages = page_count(items.len(), per_page);
            let seen: Vec<usize> = (0..pages)
                .flat_map(|page| page_slice(&items, page, per_page).iter().copied())
                .collect();
            assert_eq!(seen, items, "per_page = {per_page}");
        }
    }

    #[test]
    fn page_past_the_end_clamps_to_last_page() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(page_count(items.len(), 2), 3);
        assert_eq!(page_slice(&items, 9, 2), &[5]);
        assert_eq!(page_count(0, 10), 1);
        assert!(page_slice::<u8>(&[], 0, 10).is_empty());
    }

    fn expense(id: i64) -> Expense {
        Expense {
            id,
            amount: id as f64,
            category: CategoryRef::default(),
            date: None,
            year: None,
            month: None,
            description: format!("expense {id}"),
        }
    }

    #[test]
    fn removing_an_expense_keeps_the_rest_in_order() {
        let mut expenses: Vec<Expense> = [10, 11, 12, 13].into_iter().map(expense).collect();
        assert!(remove_expense(&mut expenses, 12));
        let left: Vec<i64> = expenses.iter().map(|e| e.id).collect();
        assert_eq!(left, [10, 11, 13]);

        assert!(!remove_expense(&mut expenses, 99));
        assert_eq!(expenses.len(), 3);
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let cursor = Cursor::new(3);
        assert!(cursor.at_start());
        assert_eq!(cursor.prev().index(), 0);
        let last = cursor.next().next().next();
        assert_eq!(last.index(), 2);
        assert!(last.at_end());

        let empty = Cursor::new(0);
        assert!(empty.is_empty());
        assert_eq!(empty.next().index(), 0);
    }
}
