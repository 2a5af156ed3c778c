use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// Placeholder title substituted for empty or whitespace-only input.
pub const UNTITLED_TITLE: &str = "Untitled Expense";

/// One logged expense event. Immutable once created; corrections are
/// delete-and-recreate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub category: Category,
    /// Calendar date the expense occurred, distinct from `created_at`.
    pub date: NaiveDate,
    /// Capture timestamp; breaks ties between records sharing a `date`.
    #[serde(rename = "timestamp", alias = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl ExpenseRecord {
    pub fn new(input: ValidatedExpenseInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            amount: input.amount,
            category: input.category,
            date: input.date,
            created_at: Utc::now(),
        }
    }
}

/// Candidate input that already passed the validation rules. Constructing one
/// by hand is fine in tests; production flows go through `validate`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedExpenseInput {
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> ValidatedExpenseInput {
        ValidatedExpenseInput {
            title: "Morning Coffee".into(),
            amount: 4.5,
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        }
    }

    #[test]
    fn new_records_get_distinct_ids() {
        let a = ExpenseRecord::new(sample_input());
        let b = ExpenseRecord::new(sample_input());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn wire_format_uses_timestamp_field() {
        let record = ExpenseRecord::new(sample_input());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"timestamp\""));
        assert!(json.contains("\"2024-01-10\""));

        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn accepts_created_at_alias_on_load() {
        let json = r#"{
            "id": "4f5bdf51-9b73-4b42-9077-30d8e9c9d5f5",
            "title": "Uber Ride",
            "amount": 12.0,
            "category": "Travel",
            "date": "2024-01-10",
            "createdAt": "2024-01-10T08:30:00Z"
        }"#;
        let record: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, Category::Travel);
    }
}
