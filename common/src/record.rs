//! # Country Record
//!
//! One row of the World Indicators dataset that survived validation.

use std::fmt;

use crate::error::RowError;

/// Birth rate and life expectancy of a single country.
///
/// Fields are private: a `Record` can only be obtained through [`Record::new`],
/// so every instance has a non-empty trimmed name and strictly positive values.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    country: String,
    birth_rate: f64,
    life_expectancy: f64,
}

impl Record {
    /// Builds a validated record.
    ///
    /// The country name is trimmed of Unicode whitespace, so a non-breaking
    /// space around it is dropped too. `NaN` fails the positivity checks like
    /// any other non-positive value.
    pub fn new(
        country: impl AsRef<str>,
        birth_rate: f64,
        life_expectancy: f64,
    ) -> Result<Self, RowError> {
        let country = country.as_ref().trim();
        if country.is_empty() {
            return Err(RowError::EmptyCountry);
        }
        if birth_rate.is_nan() || birth_rate <= 0.0 {
            return Err(RowError::NonPositive { column: "birth rate", value: birth_rate });
        }
        if life_expectancy.is_nan() || life_expectancy <= 0.0 {
            return Err(RowError::NonPositive {
                column: "life expectancy",
                value: life_expectancy,
            });
        }

        Ok(Self {
            country: country.to_string(),
            birth_rate,
            life_expectancy,
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Births per person as a decimal fraction (0.021 is 2.1%).
    pub fn birth_rate(&self) -> f64 {
        self.birth_rate
    }

    /// Life expectancy in years.
    pub fn life_expectancy(&self) -> f64 {
        self.life_expectancy
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Birth Rate: {:.3}, Life Expectancy: {:.1} years",
            self.country, self.birth_rate, self.life_expectancy
        )
    }
}
