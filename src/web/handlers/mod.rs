//! HTTP request handlers organized by domain

pub mod games;
pub mod health;
pub mod reference;
pub mod reports;

use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};

/// Parse an optional `YYYY-MM-DD` query parameter
pub(crate) fn parse_date_param(name: &str, value: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match value {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                AppError::validation(format!("invalid {name} date '{s}', expected YYYY-MM-DD"))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_param() {
        assert_eq!(parse_date_param("from", None).unwrap(), None);
        assert_eq!(parse_date_param("from", Some("")).unwrap(), None);
        assert_eq!(
            parse_date_param("from", Some("2024-03-01")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert!(parse_date_param("from", Some("03/01/2024")).is_err());
    }
}
