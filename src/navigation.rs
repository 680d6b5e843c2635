//! Routes between the app's views and the navigator that moves between them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    AddTransaction,
    Login,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::AddTransaction => "/add-transaction",
            Route::Login => "/login",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Moves the user to another view. Fire-and-forget.
pub trait Navigator {
    fn go_to(&mut self, route: Route);
}

/// Navigator for the command line: logs the transition and remembers where
/// the user ended up so the caller can render that view next.
#[derive(Debug, Default)]
pub struct ConsoleNavigator {
    current: Option<Route>,
}

impl ConsoleNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Route> {
        self.current
    }
}

impl Navigator for ConsoleNavigator {
    fn go_to(&mut self, route: Route) {
        tracing::info!("navigating to {}", route);
        self.current = Some(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Dashboard.path(), "/dashboard");
        assert_eq!(Route::AddTransaction.path(), "/add-transaction");
        assert_eq!(Route::Login.to_string(), "/login");
    }

    #[test]
    fn test_console_navigator_tracks_last_route() {
        let mut navigator = ConsoleNavigator::new();
        assert_eq!(navigator.current(), None);

        navigator.go_to(Route::AddTransaction);
        navigator.go_to(Route::Dashboard);
        assert_eq!(navigator.current(), Some(Route::Dashboard));
    }
}
