//! Views and Navigation
//!
//! Views map to `location.hash` so a reload lands on the same page.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    /// `registered` shows the "account created" notice
    SignIn { registered: bool },
    SignUp,
    Dashboard,
}

impl Route {
    pub fn sign_in() -> Self {
        Route::SignIn { registered: false }
    }

    pub fn to_hash(self) -> &'static str {
        match self {
            Route::Landing => "#/",
            Route::SignIn { registered: false } => "#/login",
            Route::SignIn { registered: true } => "#/login?registered=true",
            Route::SignUp => "#/signup",
            Route::Dashboard => "#/dashboard",
        }
    }

    /// Unknown hashes fall back to the landing page
    pub fn from_hash(hash: &str) -> Self {
        let hash = hash.trim_start_matches('#');
        let (path, query) = hash.split_once('?').unwrap_or((hash, ""));

        match path.trim_end_matches('/') {
            "/login" => Route::SignIn {
                registered: query.split('&').any(|pair| pair == "registered=true"),
            },
            "/signup" => Route::SignUp,
            "/dashboard" => Route::Dashboard,
            _ => Route::Landing,
        }
    }

    /// Views that need a stored credential
    pub fn requires_auth(self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

/// Anything that can switch the visible view
pub trait Navigate {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_mapping() {
        for route in [
            Route::Landing,
            Route::sign_in(),
            Route::SignIn { registered: true },
            Route::SignUp,
            Route::Dashboard,
        ] {
            assert_eq!(Route::from_hash(route.to_hash()), route);
        }
    }

    #[test]
    fn test_unknown_and_empty_hash() {
        assert_eq!(Route::from_hash(""), Route::Landing);
        assert_eq!(Route::from_hash("#/settings"), Route::Landing);
        assert_eq!(Route::from_hash("#/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/login?next=x"), Route::sign_in());
    }

    #[test]
    fn test_requires_auth() {
        assert!(Route::Dashboard.requires_auth());
        assert!(!Route::SignUp.requires_auth());
    }
}
