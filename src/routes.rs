//! Client-Side Routes
//!
//! Path-based routing without a router crate: a `Route` signal derived from
//! `location.pathname`, updated on `popstate`, pushed on programmatic
//! navigation.

use leptos::prelude::*;

use crate::url_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Projects,
    Range,
    Login,
    ForgotPassword,
    VerifyCode,
    ResetPassword,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/range" => Route::Range,
            "/login" => Route::Login,
            "/forgot-password" => Route::ForgotPassword,
            "/verify-code" => Route::VerifyCode,
            "/reset-password" => Route::ResetPassword,
            _ => Route::Projects,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Projects => "/",
            Route::Range => "/range",
            Route::Login => "/login",
            Route::ForgotPassword => "/forgot-password",
            Route::VerifyCode => "/verify-code",
            Route::ResetPassword => "/reset-password",
        }
    }

    /// Routes that only make sense without a session.
    pub fn is_auth_page(&self) -> bool {
        matches!(
            self,
            Route::Login | Route::ForgotPassword | Route::VerifyCode | Route::ResetPassword
        )
    }
}

/// Programmatic navigation handle provided via context.
#[derive(Clone, Copy)]
pub struct Navigator {
    set_route: WriteSignal<Route>,
}

impl Navigator {
    pub fn new(set_route: WriteSignal<Route>) -> Self {
        Self { set_route }
    }

    pub fn go(&self, route: Route) {
        url_state::push_url(route.path(), &[]);
        self.set_route.set(route);
    }

    /// Navigate carrying query parameters (e.g. the reset-flow email/token).
    pub fn go_with(&self, route: Route, pairs: &[(&'static str, String)]) {
        url_state::push_url(route.path(), pairs);
        self.set_route.set(route);
    }
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_round_trip() {
        for route in [
            Route::Projects,
            Route::Range,
            Route::Login,
            Route::ForgotPassword,
            Route::VerifyCode,
            Route::ResetPassword,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_path_falls_back_to_projects() {
        assert_eq!(Route::from_path("/nope"), Route::Projects);
        assert_eq!(Route::from_path(""), Route::Projects);
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        assert_eq!(Route::from_path("/range/"), Route::Range);
    }

    #[test]
    fn test_auth_page_classification() {
        assert!(Route::Login.is_auth_page());
        assert!(Route::ForgotPassword.is_auth_page());
        assert!(Route::VerifyCode.is_auth_page());
        assert!(Route::ResetPassword.is_auth_page());
        assert!(!Route::Projects.is_auth_page());
        assert!(!Route::Range.is_auth_page());
    }
}
