//! Pure derived-view computations over a ledger snapshot.
//!
//! Every function here takes the ledger by reference and returns plain data;
//! rendering belongs to whichever front end consumes these views.

use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::ledger::{Category, ExpenseRecord, Ledger};

/// Category filter for list views; `All` is the UI's `"all"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = crate::ledger::UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            value.parse().map(CategoryFilter::Only)
        }
    }
}

/// Rounds to 2 decimal places. Applied at every aggregation boundary so
/// repeated add/remove cycles do not accumulate visible float drift.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Returns the records matching the filter, in ledger order, as an
/// independent snapshot.
pub fn filter_by_category(ledger: &Ledger, filter: CategoryFilter) -> Vec<ExpenseRecord> {
    ledger
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Stable sort: `date` descending, then `created_at` descending. Records with
/// identical keys keep their relative insertion order.
pub fn sorted_view(records: &[ExpenseRecord]) -> Vec<ExpenseRecord> {
    let mut view = records.to_vec();
    view.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
    view
}

/// Sum of amounts for records dated exactly `day`.
pub fn daily_total(ledger: &Ledger, day: NaiveDate) -> f64 {
    round_currency(
        ledger
            .iter()
            .filter(|record| record.date == day)
            .map(|record| record.amount)
            .sum(),
    )
}

/// Sum of amounts within the given calendar month and year. Calendar
/// boundaries, not a rolling 30-day window.
pub fn monthly_total(ledger: &Ledger, month: u32, year: i32) -> f64 {
    round_currency(
        ledger
            .iter()
            .filter(|record| record.date.month() == month && record.date.year() == year)
            .map(|record| record.amount)
            .sum(),
    )
}

/// Per-category totals. Every category of the fixed set is present, zero sums
/// included; hiding zero bars is a presentation decision, not made here.
pub fn category_totals(ledger: &Ledger) -> BTreeMap<Category, f64> {
    let mut totals: BTreeMap<Category, f64> = Category::ALL
        .into_iter()
        .map(|category| (category, 0.0))
        .collect();
    for record in ledger.iter() {
        *totals.entry(record.category).or_insert(0.0) += record.amount;
    }
    for total in totals.values_mut() {
        *total = round_currency(*total);
    }
    totals
}

/// The category with the largest positive total, with its total. Ties go to
/// the earlier category in the fixed order; `None` when every total is zero.
pub fn highest_category(ledger: &Ledger) -> Option<(Category, f64)> {
    let totals = category_totals(ledger);
    let mut best: Option<(Category, f64)> = None;
    for category in Category::ALL {
        let total = totals[&category];
        if total > 0.0 && best.map_or(true, |(_, amount)| total > amount) {
            best = Some((category, total));
        }
    }
    best
}

/// Grand total divided by the number of *distinct* expense dates — not by
/// record count, and not by elapsed calendar days. Zero for an empty ledger.
pub fn average_daily_spend(ledger: &Ledger) -> f64 {
    if ledger.is_empty() {
        return 0.0;
    }
    let total: f64 = ledger.iter().map(|record| record.amount).sum();
    let distinct_dates: HashSet<NaiveDate> = ledger.iter().map(|record| record.date).collect();
    round_currency(total / distinct_dates.len() as f64)
}

pub fn record_count(ledger: &Ledger) -> usize {
    ledger.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ValidatedExpenseInput;
    use chrono::NaiveDateTime;

    fn record(
        title: &str,
        amount: f64,
        category: Category,
        date: &str,
        created_at: &str,
    ) -> ExpenseRecord {
        let mut record = ExpenseRecord::new(ValidatedExpenseInput {
            title: title.into(),
            amount,
            category,
            date: date.parse().unwrap(),
        });
        record.created_at = NaiveDateTime::parse_from_str(created_at, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc();
        record
    }

    fn sample_ledger() -> Ledger {
        Ledger::from_records(vec![
            record("Groceries", 30.0, Category::Food, "2024-01-12", "2024-01-12 18:00:00"),
            record("Coffee", 4.5, Category::Food, "2024-01-10", "2024-01-10 08:00:00"),
            record("Train", 12.0, Category::Travel, "2024-01-10", "2024-01-10 09:00:00"),
            record("Electric", 85.0, Category::Bills, "2023-12-28", "2023-12-28 12:00:00"),
        ])
    }

    #[test]
    fn filter_all_returns_everything_in_ledger_order() {
        let ledger = sample_ledger();
        let view = filter_by_category(&ledger, CategoryFilter::All);
        assert_eq!(view.len(), 4);
        assert_eq!(view[0].title, "Groceries");
    }

    #[test]
    fn filter_by_single_category_is_exact() {
        let ledger = sample_ledger();
        let food = filter_by_category(&ledger, CategoryFilter::Only(Category::Food));
        assert_eq!(food.len(), 2);
        assert!(food.iter().all(|r| r.category == Category::Food));
    }

    #[test]
    fn filter_parses_the_all_sentinel() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Travel".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Travel))
        );
        assert!("breakfast".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn sorted_view_orders_by_date_then_capture_time() {
        let ledger = sample_ledger();
        let view = sorted_view(ledger.records());
        let titles: Vec<&str> = view.iter().map(|r| r.title.as_str()).collect();
        // 2024-01-10 appears twice; Train was captured after Coffee.
        assert_eq!(titles, ["Groceries", "Train", "Coffee", "Electric"]);
    }

    #[test]
    fn sorted_view_is_stable_for_identical_keys() {
        let twin_a = record("first", 1.0, Category::Other, "2024-01-10", "2024-01-10 08:00:00");
        let twin_b = record("second", 2.0, Category::Other, "2024-01-10", "2024-01-10 08:00:00");
        let records = vec![twin_a, twin_b];
        let view = sorted_view(&records);
        assert_eq!(view[0].title, "first");
        assert_eq!(view[1].title, "second");
    }

    #[test]
    fn daily_total_sums_one_day_only() {
        let ledger = sample_ledger();
        let day = "2024-01-10".parse().unwrap();
        assert_eq!(daily_total(&ledger, day), 16.5);
    }

    #[test]
    fn monthly_total_respects_calendar_boundaries() {
        let ledger = sample_ledger();
        assert_eq!(monthly_total(&ledger, 1, 2024), 46.5);
        assert_eq!(monthly_total(&ledger, 12, 2023), 85.0);
        assert_eq!(monthly_total(&ledger, 2, 2024), 0.0);
    }

    #[test]
    fn category_totals_always_covers_the_fixed_set() {
        let empty = Ledger::new();
        let totals = category_totals(&empty);
        assert_eq!(totals.len(), Category::ALL.len());
        assert!(totals.values().all(|&v| v == 0.0));

        let totals = category_totals(&sample_ledger());
        assert_eq!(totals[&Category::Food], 34.5);
        assert_eq!(totals[&Category::Travel], 12.0);
        assert_eq!(totals[&Category::Bills], 85.0);
        assert_eq!(totals[&Category::Shopping], 0.0);
        assert_eq!(totals[&Category::Other], 0.0);
    }

    #[test]
    fn highest_category_ignores_zero_totals() {
        assert_eq!(highest_category(&Ledger::new()), None);
        assert_eq!(
            highest_category(&sample_ledger()),
            Some((Category::Bills, 85.0))
        );
    }

    #[test]
    fn highest_category_ties_go_to_fixed_order() {
        let ledger = Ledger::from_records(vec![
            record("shirt", 20.0, Category::Shopping, "2024-01-10", "2024-01-10 10:00:00"),
            record("lunch", 20.0, Category::Food, "2024-01-10", "2024-01-10 12:00:00"),
        ]);
        assert_eq!(highest_category(&ledger), Some((Category::Food, 20.0)));
    }

    #[test]
    fn average_daily_spend_divides_by_distinct_dates() {
        assert_eq!(average_daily_spend(&Ledger::new()), 0.0);

        // Three records across two distinct dates in January, one in December.
        let ledger = sample_ledger();
        // (30 + 4.5 + 12 + 85) / 3 distinct dates
        assert_eq!(average_daily_spend(&ledger), 43.83);
    }

    #[test]
    fn aggregates_round_at_the_boundary() {
        let ledger = Ledger::from_records(vec![
            record("a", 0.1, Category::Food, "2024-01-10", "2024-01-10 08:00:00"),
            record("b", 0.2, Category::Food, "2024-01-10", "2024-01-10 08:01:00"),
        ]);
        let day = "2024-01-10".parse().unwrap();
        assert_eq!(daily_total(&ledger, day), 0.3);
        assert_eq!(category_totals(&ledger)[&Category::Food], 0.3);
    }
}
