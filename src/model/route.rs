//! Routes and back-navigation history

use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Route {
    #[default]
    Listing,
    Print,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Listing => "/",
            Route::Print => "/print",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Listing),
            "/print" => Some(Route::Print),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Current route plus the routes visited before it
#[derive(Debug, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Push the current route and move to `to`. Returns false if already there.
    pub fn navigate(&mut self, to: Route) -> bool {
        if to == self.current {
            return false;
        }
        self.history.push(self.current);
        self.current = to;
        true
    }

    /// Return to the previous route, or to the listing when there is none
    pub fn back(&mut self) -> Route {
        self.current = self.history.pop().unwrap_or(Route::Listing);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Listing.path(), "/");
        assert_eq!(Route::Print.path(), "/print");
        assert_eq!(Route::from_path("/print/"), Some(Route::Print));
        assert_eq!(Route::from_path("/"), Some(Route::Listing));
        assert_eq!(Route::from_path("/nowhere"), None);
    }

    #[test]
    fn test_navigate_and_back() {
        let mut router = Router::new(Route::Listing);
        assert!(router.navigate(Route::Print));
        assert_eq!(router.current(), Route::Print);
        assert_eq!(router.back(), Route::Listing);
    }

    #[test]
    fn test_navigate_to_same_route_is_noop() {
        let mut router = Router::new(Route::Listing);
        assert!(!router.navigate(Route::Listing));
        assert_eq!(router.back(), Route::Listing);
    }

    #[test]
    fn test_back_without_history_falls_back_to_listing() {
        let mut router = Router::new(Route::Print);
        assert_eq!(router.back(), Route::Listing);
        assert_eq!(router.back(), Route::Listing);
    }
}
