//! Route identifiers for the application's views.
//!
//! Routes are the paths the views were historically served under
//! (`/dashboard`, `/techniques`, `/techniquedetail?id=...`,
//! `/lessonplanner`), optionally below the `/PMP` base path. Matching is
//! case-insensitive and `/` redirects to the dashboard.

use std::fmt;
use std::str::FromStr;

/// Base path the application may be mounted under.
pub const BASE_PATH: &str = "/pmp";

/// A named view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Techniques,
    /// Technique detail; a missing id renders as "technique not found".
    TechniqueDetail { id: Option<String> },
    LessonPlanner,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Page not found: '{0}'")]
pub struct PageNotFound(pub String);

impl Route {
    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard".to_string(),
            Route::Techniques => "/techniques".to_string(),
            Route::TechniqueDetail { id: Some(id) } => {
                format!("/techniquedetail?id={}", urlencoding::encode(id))
            }
            Route::TechniqueDetail { id: None } => "/techniquedetail".to_string(),
            Route::LessonPlanner => "/lessonplanner".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = PageNotFound;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };

        let path = path.to_ascii_lowercase();
        let path = strip_base(&path);
        let path = path.trim_end_matches('/');

        match path {
            "" => Ok(Route::Dashboard),
            "/dashboard" => Ok(Route::Dashboard),
            "/techniques" => Ok(Route::Techniques),
            "/techniquedetail" => Ok(Route::TechniqueDetail {
                id: query.and_then(|q| query_param(q, "id")),
            }),
            "/lessonplanner" => Ok(Route::LessonPlanner),
            _ => Err(PageNotFound(raw.to_string())),
        }
    }
}

fn strip_base(path: &str) -> &str {
    match path.strip_prefix(BASE_PATH) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

/// First value of `name` in a query string, percent-decoded.
fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| decode_component(key) == name)
        .map(|(_, value)| decode_component(value))
        .filter(|value| !value.is_empty())
}

/// Decodes `%XX` escapes and `+` as a space. Invalid UTF-8 is replaced.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Route, PageNotFound> {
        s.parse()
    }

    #[test]
    fn test_named_routes() {
        assert_eq!(parse("/dashboard").unwrap(), Route::Dashboard);
        assert_eq!(parse("/techniques").unwrap(), Route::Techniques);
        assert_eq!(parse("/lessonplanner").unwrap(), Route::LessonPlanner);
        assert_eq!(
            parse("/techniquedetail?id=jigsaw").unwrap(),
            Route::TechniqueDetail {
                id: Some("jigsaw".to_string())
            }
        );
    }

    #[test]
    fn test_root_redirects_to_dashboard() {
        assert_eq!(parse("/").unwrap(), Route::Dashboard);
        assert_eq!(parse("").unwrap(), Route::Dashboard);
        assert_eq!(parse("/PMP").unwrap(), Route::Dashboard);
        assert_eq!(parse("/PMP/").unwrap(), Route::Dashboard);
    }

    #[test]
    fn test_base_path_and_case() {
        assert_eq!(parse("/PMP/Techniques").unwrap(), Route::Techniques);
        assert_eq!(parse("/lessonPlanner/").unwrap(), Route::LessonPlanner);
        assert_eq!(
            parse("/PMP/TechniqueDetail?id=Exit-Ticket").unwrap(),
            Route::TechniqueDetail {
                id: Some("Exit-Ticket".to_string())
            },
            "Query values keep their case"
        );
    }

    #[test]
    fn test_detail_without_id() {
        assert_eq!(
            parse("/techniquedetail").unwrap(),
            Route::TechniqueDetail { id: None }
        );
        assert_eq!(
            parse("/techniquedetail?id=").unwrap(),
            Route::TechniqueDetail { id: None }
        );
        assert_eq!(
            parse("/techniquedetail?from=home&id=wait-time").unwrap(),
            Route::TechniqueDetail {
                id: Some("wait-time".to_string())
            }
        );
    }

    #[test]
    fn test_detail_id_is_percent_decoded() {
        assert_eq!(
            parse("/techniquedetail?id=think%2Dpair%2Dshare").unwrap(),
            Route::TechniqueDetail {
                id: Some("think-pair-share".to_string())
            }
        );
        assert_eq!(
            parse("/techniquedetail?%69d=wait+time%21").unwrap(),
            Route::TechniqueDetail {
                id: Some("wait time!".to_string())
            }
        );
        assert_eq!(
            parse("/techniquedetail?id=%D0%B4%D1%80%D0%BE%D0%B1%D0%B8").unwrap(),
            Route::TechniqueDetail {
                id: Some("дроби".to_string())
            }
        );
    }

    #[test]
    fn test_unknown_routes() {
        assert_eq!(
            parse("/settings").unwrap_err(),
            PageNotFound("/settings".to_string())
        );
        assert!(parse("/pmpx/dashboard").is_err());
        assert!(parse("/dashboard/extra").is_err());
    }

    #[test]
    fn test_path_round_trip() {
        let routes = [
            Route::Dashboard,
            Route::Techniques,
            Route::TechniqueDetail {
                id: Some("gallery-walk".to_string()),
            },
            Route::TechniqueDetail {
                id: Some("a b&c".to_string()),
            },
            Route::LessonPlanner,
        ];
        for route in routes {
            assert_eq!(parse(&route.path()).unwrap(), route);
        }
    }
}
