//! Client-side route table
//!
//! Maps URL paths to pages the way the original single-page app did. Parsing
//! never fails: anything unrecognized lands on `NotFound`.

use crate::catalog::SpecialistId;

/// A page in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Specialist(SpecialistId),
    Catalog,
    Announcements,
    Messages,
    Favorites,
    Profile,
    Notifications,
    NotFound,
}

impl Route {
    /// Parse a path into a route; unknown paths map to `NotFound`
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };

        match trimmed {
            "/" => Route::Home,
            "/catalog" => Route::Catalog,
            "/announcements" => Route::Announcements,
            "/messages" => Route::Messages,
            "/favorites" => Route::Favorites,
            "/profile" => Route::Profile,
            "/notifications" => Route::Notifications,
            other => match other.strip_prefix("/specialist/") {
                // bare digits only; u32::from_str would also take a sign
                Some(id) if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) => id
                    .parse::<u32>()
                    .map(|n| Route::Specialist(SpecialistId(n)))
                    .unwrap_or(Route::NotFound),
                _ => Route::NotFound,
            },
        }
    }

    /// The canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Specialist(id) => format!("/specialist/{}", id.0),
            Route::Catalog => "/catalog".to_string(),
            Route::Announcements => "/announcements".to_string(),
            Route::Messages => "/messages".to_string(),
            Route::Favorites => "/favorites".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Notifications => "/notifications".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/catalog"), Route::Catalog);
        assert_eq!(Route::parse("/announcements"), Route::Announcements);
        assert_eq!(Route::parse("/messages"), Route::Messages);
        assert_eq!(Route::parse("/favorites"), Route::Favorites);
        assert_eq!(Route::parse("/profile"), Route::Profile);
        assert_eq!(Route::parse("/notifications"), Route::Notifications);
    }

    #[test]
    fn test_parse_specialist_id_segment() {
        assert_eq!(
            Route::parse("/specialist/3"),
            Route::Specialist(SpecialistId(3))
        );
        assert_eq!(Route::parse("/specialist/abc"), Route::NotFound);
        assert_eq!(Route::parse("/specialist/+3"), Route::NotFound);
        assert_eq!(Route::parse("/specialist/"), Route::NotFound);
    }

    #[test]
    fn test_catch_all() {
        assert_eq!(Route::parse("/admin"), Route::NotFound);
        assert_eq!(Route::parse("nonsense"), Route::NotFound);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(Route::parse("/catalog/"), Route::Catalog);
    }

    #[test]
    fn test_path_round_trip() {
        let routes = [
            Route::Home,
            Route::Specialist(SpecialistId(7)),
            Route::Catalog,
            Route::Announcements,
            Route::Messages,
            Route::Favorites,
            Route::Profile,
            Route::Notifications,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
