use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::dto::{FormInputs, RawFormInputs};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Mohon masukkan nama makanan atau minuman untuk dianalisis.")]
    MissingItem,
    #[error("Mohon masukkan usia yang valid (angka positif).")]
    InvalidAge,
}

/// Integer-prefix parse: optional sign then leading digits, rest ignored.
pub fn parse_age(raw: &str) -> Option<i64> {
    lazy_static! {
        static ref AGE_RE: Regex = Regex::new(r"^[+-]?\d+").unwrap();
    }
    let m = AGE_RE.find(raw.trim())?;
    // overflowing input is as unusable as no input
    m.as_str().parse::<i64>().ok()
}

pub fn validate_inputs(food: &str, drink: &str, age: Option<i64>) -> Result<(), ValidationError> {
    if food.trim().is_empty() && drink.trim().is_empty() {
        return Err(ValidationError::MissingItem);
    }
    match age {
        Some(a) if a > 0 => Ok(()),
        _ => Err(ValidationError::InvalidAge),
    }
}

impl RawFormInputs {
    /// Trims, parses and validates in one step.
    pub fn into_inputs(self) -> Result<FormInputs, ValidationError> {
        let food = self.food.trim().to_string();
        let drink = self.drink.trim().to_string();
        let age = parse_age(&self.age);
        validate_inputs(&food, &drink, age)?;
        Ok(FormInputs {
            food,
            drink,
            age: age.ok_or(ValidationError::InvalidAge)?,
        })
    }
}
