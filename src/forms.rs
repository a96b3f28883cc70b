//! Turning raw form input into request payloads.

use chrono::{Datelike, NaiveDate};

use crate::error::FormError;
use crate::models::{Category, CategoryRef, Credentials, GoalDraft, NewExpense, NewStudent, Student};

/// Splits an `<input type="date">` value into its year and month.
pub fn split_date(raw: &str) -> Result<(NaiveDate, i32, u32), FormError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| FormError::InvalidDate)?;
    Ok((date, date.year(), date.month()))
}

pub fn parse_month(raw: &str) -> Result<u32, FormError> {
    match raw.trim().parse::<u32>() {
        Ok(month @ 1..=12) => Ok(month),
        _ => Err(FormError::InvalidMonth),
    }
}

pub fn parse_number<N: std::str::FromStr>(raw: &str, field: &'static str) -> Result<N, FormError> {
    raw.trim()
        .parse()
        .map_err(|_| FormError::InvalidNumber { field })
}

pub fn parse_amount(raw: &str) -> Result<f64, FormError> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(FormError::InvalidAmount),
    }
}

pub fn login_form(email: &str, password: &str) -> Result<Credentials, FormError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(FormError::MissingFields);
    }
    Ok(Credentials {
        email: email.trim().to_string(),
        passwd: password.to_string(),
    })
}

pub fn signup_form(email: &str, password: &str, min_len: usize) -> Result<Credentials, FormError> {
    let credentials = login_form(email, password)?;
    if password.chars().count() < min_len {
        return Err(FormError::PasswordTooShort { min: min_len });
    }
    Ok(credentials)
}

/// Raw values of the add-expense form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseInput {
    pub amount: String,
    pub description: String,
    pub category_id: String,
    pub date: String,
}

impl ExpenseInput {
    pub fn validate(&self, categories: &[Category]) -> Result<NewExpense, FormError> {
        if self.amount.trim().is_empty() || self.date.trim().is_empty() {
            return Err(FormError::MissingFields);
        }
        let amount = parse_amount(&self.amount)?;
        let category = self
            .category_id
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|id| categories.iter().find(|c| c.id == id))
            .cloned()
            .ok_or(FormError::MissingCategory)?;
        let (date, year, month) = split_date(&self.date)?;
        Ok(NewExpense {
            amount,
            description: self.description.trim().to_string(),
            category: CategoryRef {
                id: category.id,
                name: category.name,
            },
            date,
            year,
            month,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoalInput {
    pub month: String,
    pub year: String,
    pub amount: String,
}

impl GoalInput {
    pub fn validate(&self) -> Result<GoalDraft, FormError> {
        if self.month.trim().is_empty() || self.year.trim().is_empty() || self.amount.trim().is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(GoalDraft {
            month: parse_month(&self.month)?,
            year: parse_number(&self.year, "year")?,
            amount: parse_amount(&self.amount)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentInput {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub description: String,
    pub password: String,
}

impl StudentInput {
    /// Profile fields only, for updates where the password stays unchanged.
    pub fn validate_profile(&self) -> Result<Student, FormError> {
        let required = [
            &self.firstname,
            &self.lastname,
            &self.email,
            &self.phone,
            &self.age,
            &self.description,
        ];
        if required.iter().any(|value| value.trim().is_empty()) {
            return Err(FormError::MissingFields);
        }
        let age = match self.age.trim().parse::<u32>() {
            Ok(age @ 1..=120) => age,
            _ => return Err(FormError::InvalidAge),
        };
        Ok(Student {
            id: None,
            firstname: self.firstname.trim().to_string(),
            lastname: self.lastname.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            age,
            description: self.description.trim().to_string(),
        })
    }

    pub fn validate(&self) -> Result<NewStudent, FormError> {
        if self.password.trim().is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(NewStudent {
            profile: self.validate_profile()?,
            password: self.password.clone(),
        })
    }
}

impl From<&Student> for StudentInput {
    fn from(student: &Student) -> Self {
        Self {
            firstname: student.firstname.clone(),
            lastname: student.lastname.clone(),
            email: student.email.clone(),
            phone: student.phone.clone(),
            age: student.age.to_string(),
            description: student.description.clone(),
            password: String::new(),
        }
    }
}
