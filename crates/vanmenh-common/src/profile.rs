//! Birth profile submitted by a user for a fortune reading.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VanmenhError};

/// Validated birth information for one reading request.
///
/// Name and date of birth are mandatory; the rest of the fields are
/// optional and fall back to neutral wording when the prompt is built.
/// Constructed once per request and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthProfile {
    pub name: String,
    /// Date of birth as entered by the user, e.g. "17/02/1993".
    pub date_of_birth: String,
    pub time_of_birth: Option<String>,
    pub gender: Option<String>,
    /// Target year for the reading, e.g. "2026".
    pub year: Option<String>,
}

impl BirthProfile {
    pub fn new(
        name: impl Into<String>,
        date_of_birth: impl Into<String>,
        time_of_birth: Option<String>,
        gender: Option<String>,
        year: Option<String>,
    ) -> Result<Self> {
        let name = name.into();
        let date_of_birth = date_of_birth.into();
        if name.trim().is_empty() {
            return Err(VanmenhError::InvalidProfile("name is required".into()));
        }
        if date_of_birth.trim().is_empty() {
            return Err(VanmenhError::InvalidProfile(
                "date of birth is required".into(),
            ));
        }
        Ok(Self {
            name,
            date_of_birth,
            time_of_birth,
            gender,
            year,
        })
    }

    /// Target year for the reading, defaulting to the current calendar year.
    pub fn target_year(&self) -> String {
        self.year
            .as_deref()
            .map(str::trim)
            .filter(|y| !y.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Utc::now().year().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_requires_name() {
        let err = BirthProfile::new("  ", "17/02/1993", None, None, None);
        assert!(err.is_err());
    }

    #[test]
    fn test_profile_requires_date_of_birth() {
        let err = BirthProfile::new("Nguyen Van A", "", None, None, None);
        assert!(err.is_err());
    }

    #[test]
    fn test_target_year_prefers_explicit_value() {
        let p = BirthProfile::new(
            "Nguyen Van A",
            "17/02/1993",
            None,
            None,
            Some("2026".to_string()),
        )
        .unwrap();
        assert_eq!(p.target_year(), "2026");
    }

    #[test]
    fn test_target_year_falls_back_to_current_year() {
        let p = BirthProfile::new("Nguyen Van A", "17/02/1993", None, None, None).unwrap();
        let year: i32 = p.target_year().parse().unwrap();
        assert!(year >= 2024);
    }
}
