//! `?skip=&take=` windowing for list endpoints.
//!
//! Both parameters are optional. `skip` is an offset into the list in
//! insertion order; `take` caps the number of rows and `0` means no cap.

use crate::error::CoreError;

/// A validated list window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub skip: Option<i64>,
    pub take: Option<i64>,
}

impl Pagination {
    /// Parse raw query-string values. Empty strings count as absent.
    ///
    /// Both parameters are checked so the caller gets every problem at once.
    pub fn parse(skip: Option<&str>, take: Option<&str>) -> Result<Self, CoreError> {
        let mut messages = Vec::new();
        let skip = parse_param("skip", skip, &mut messages);
        let take = parse_param("take", take, &mut messages);

        if messages.is_empty() {
            Ok(Self { skip, take })
        } else {
            Err(CoreError::Validation(messages))
        }
    }

    /// SQL `OFFSET`; absent means 0.
    pub fn offset(&self) -> i64 {
        self.skip.unwrap_or(0)
    }

    /// SQL `LIMIT`; `None` binds as `LIMIT NULL` (no limit).
    pub fn limit(&self) -> Option<i64> {
        self.take.filter(|t| *t > 0)
    }
}

fn parse_param(name: &str, raw: Option<&str>, messages: &mut Vec<String>) -> Option<i64> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match raw.parse::<i64>() {
        Ok(value) if value < 0 => {
            messages.push(format!("{name} must not be less than 0"));
            None
        }
        Ok(value) => Some(value),
        Err(_) => {
            messages.push(format!("{name} must be an integer number"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn absent_params_mean_whole_list() {
        let page = Pagination::parse(None, None).unwrap();
        assert_eq!(page, Pagination::default());
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), None);
    }

    #[test]
    fn parses_skip_and_take() {
        let page = Pagination::parse(Some("1"), Some("1")).unwrap();
        assert_eq!(page.offset(), 1);
        assert_eq!(page.limit(), Some(1));
    }

    #[test]
    fn take_zero_is_unbounded() {
        let page = Pagination::parse(Some("2"), Some("0")).unwrap();
        assert_eq!(page.offset(), 2);
        assert_eq!(page.limit(), None);
    }

    #[test]
    fn empty_values_are_ignored() {
        let page = Pagination::parse(Some(""), Some(" ")).unwrap();
        assert_eq!(page, Pagination::default());
    }

    #[test]
    fn rejects_non_integers() {
        assert_matches!(
            Pagination::parse(Some("abc"), Some("1.5")),
            Err(CoreError::Validation(msgs)) if msgs == vec![
                "skip must be an integer number".to_string(),
                "take must be an integer number".to_string(),
            ]
        );
    }

    #[test]
    fn rejects_negative_values() {
        assert_matches!(
            Pagination::parse(Some("-1"), None),
            Err(CoreError::Validation(msgs)) if msgs == vec!["skip must not be less than 0".to_string()]
        );
    }
}
