use crate::i18n::LanguageStrings;
use serde::Serialize;

/// Pages of the site. Anything that is not one of the literal paths below is
/// `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    Home,
    About,
    Academic,
    Admission,
    Teachers,
    Contact,
    Login,
    NotFound,
}

impl Route {
    /// Every routable page, in navigation order.
    pub const PAGES: [Route; 7] = [
        Route::Home,
        Route::About,
        Route::Academic,
        Route::Admission,
        Route::Teachers,
        Route::Contact,
        Route::Login,
    ];

    /// Exact match on the literal path; no trailing-slash or case folding.
    pub fn from_path(path: &str) -> Route {
        Self::PAGES
            .into_iter()
            .find(|route| route.path() == Some(path))
            .unwrap_or(Route::NotFound)
    }

    pub fn path(&self) -> Option<&'static str> {
        match self {
            Route::Home => Some("/"),
            Route::About => Some("/about"),
            Route::Academic => Some("/academic"),
            Route::Admission => Some("/admission"),
            Route::Teachers => Some("/teachers"),
            Route::Contact => Some("/contact"),
            Route::Login => Some("/login"),
            Route::NotFound => None,
        }
    }

    pub fn title(&self, strings: &LanguageStrings) -> &'static str {
        match self {
            Route::Home => strings.home_title,
            Route::About => strings.about_title,
            Route::Academic => strings.academic_title,
            Route::Admission => strings.admission_title,
            Route::Teachers => strings.teachers_title,
            Route::Contact => strings.contact_title,
            Route::Login => strings.login_title,
            Route::NotFound => strings.not_found_title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{BENGALI_STRINGS, ENGLISH_STRINGS};

    #[test]
    fn test_from_path_literal_routes() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/about"), Route::About);
        assert_eq!(Route::from_path("/academic"), Route::Academic);
        assert_eq!(Route::from_path("/admission"), Route::Admission);
        assert_eq!(Route::from_path("/teachers"), Route::Teachers);
        assert_eq!(Route::from_path("/contact"), Route::Contact);
        assert_eq!(Route::from_path("/login"), Route::Login);
    }

    #[test]
    fn test_from_path_anything_else_is_not_found() {
        assert_eq!(Route::from_path("/about/"), Route::NotFound);
        assert_eq!(Route::from_path("/About"), Route::NotFound);
        assert_eq!(Route::from_path("/teachers/1"), Route::NotFound);
        assert_eq!(Route::from_path(""), Route::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        for route in Route::PAGES {
            assert_eq!(Route::from_path(route.path().unwrap()), route);
        }
        assert_eq!(Route::NotFound.path(), None);
    }

    #[test]
    fn test_title_follows_language() {
        assert_eq!(Route::Teachers.title(&ENGLISH_STRINGS), "Our Faculty");
        assert_eq!(Route::Teachers.title(&BENGALI_STRINGS), "আমাদের শিক্ষকমণ্ডলী");
    }
}
