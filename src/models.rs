use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type ExpenseId = i64;
pub type CategoryId = i64;
pub type StudentId = i64;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub passwd: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: CategoryId,
    #[serde(default)]
    pub name: String,
}

pub type Category = CategoryRef;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: f64,
    #[serde(alias = "expenseCategory", default)]
    pub category: CategoryRef,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Period label, taken from the full date when the backend sent one.
    pub fn period(&self) -> String {
        match (self.date, self.year, self.month) {
            (Some(date), _, _) => date.format("%Y-%m-%d").to_string(),
            (None, Some(year), Some(month)) => format!("{year}-{month:02}"),
            _ => "-".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub amount: f64,
    pub description: String,
    pub category: CategoryRef,
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryEntry {
    #[serde(default)]
    pub id: i64,
    #[serde(alias = "expenseCategory", default)]
    pub category: CategoryRef,
    pub year: i32,
    pub month: u32,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailQuery {
    pub year: i32,
    pub month: u32,
    pub category_id: CategoryId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub month: u32,
    pub year: i32,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GoalDraft {
    pub month: u32,
    pub year: i32,
    pub amount: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StudentId>,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    #[serde(default)]
    pub description: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewStudent {
    #[serde(flatten)]
    pub profile: Student,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_accepts_either_category_key() {
        let a: Expense = serde_json::from_str(
            r#"{"id": 1, "amount": 12.5, "category": {"id": 3, "name": "Food"}, "date": "2024-06-02"}"#,
        )
        .unwrap();
        let b: Expense = serde_json::from_str(
            r#"{"id": 1, "amount": 12.5, "expenseCategory": {"id": 3, "name": "Food"}, "year": 2024, "month": 6}"#,
        )
        .unwrap();
        assert_eq!(a.category, b.category);
        assert_eq!(a.period(), "2024-06-02");
        assert_eq!(b.period(), "2024-06");
    }

    #[test]
    fn detail_query_uses_camel_case() {
        let query = DetailQuery {
            year: 2024,
            month: 6,
            category_id: 1,
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["categoryId"], 1);
    }

    #[test]
    fn new_student_flattens_profile() {
        let student = NewStudent {
            profile: Student {
                firstname: "Ana".into(),
                lastname: "Quispe".into(),
                email: "ana@example.com".into(),
                phone: "999".into(),
                age: 20,
                ..Student::default()
            },
            password: "secret".into(),
        };
        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(value["firstname"], "Ana");
        assert_eq!(value["password"], "secret");
        assert!(value.get("id").is_none());
    }
}
