//! Shared query-parameter parsing

use axum::extract::FromRequestParts;
use gpd_common::Ideology;
use std::collections::BTreeSet;

use super::error::ApiError;

/// `Query` extractor whose rejection is an [`ApiError`] (JSON body)
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Empty query values (`?country=`) mean "no filter"
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a single `lr` code (-1, 0 or 1)
pub fn parse_ideology(raw: &str) -> Result<Ideology, ApiError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(Ideology::from_code)
        .ok_or_else(|| {
            ApiError::BadRequest(format!(
                "Invalid ideology '{}' (expected -1, 0 or 1)",
                raw
            ))
        })
}

/// Parse a comma-separated set of `lr` codes; empty input means no filter
pub fn parse_ideology_set(raw: Option<&str>) -> Result<Option<BTreeSet<Ideology>>, ApiError> {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Ok(None);
    };

    raw.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_ideology)
        .collect::<Result<BTreeSet<_>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ideology_codes() {
        assert_eq!(parse_ideology("-1").unwrap(), Ideology::Left);
        assert_eq!(parse_ideology(" 0 ").unwrap(), Ideology::Center);
        assert_eq!(parse_ideology("1").unwrap(), Ideology::Right);
        assert!(parse_ideology("2").is_err());
        assert!(parse_ideology("left").is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("Peru".to_string())).as_deref(), Some("Peru"));
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_parse_ideology_set() {
        assert_eq!(parse_ideology_set(None).unwrap(), None);
        assert_eq!(parse_ideology_set(Some("")).unwrap(), None);

        let set = parse_ideology_set(Some("-1,1")).unwrap().unwrap();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![Ideology::Left, Ideology::Right]);

        assert!(parse_ideology_set(Some("-1,7")).is_err());
    }
}
