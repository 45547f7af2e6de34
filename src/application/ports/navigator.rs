use crate::domain::value_objects::PostId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    Login,
    Register,
    Profile,
    Admin,
    Post(PostId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::Post(id) => format!("/post/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match path {
            "/" | "" => Ok(Route::Home),
            "/login" => Ok(Route::Login),
            "/register" => Ok(Route::Register),
            "/profile" => Ok(Route::Profile),
            "/admin" => Ok(Route::Admin),
            other => match other.strip_prefix("/post/") {
                Some(id) if !id.contains('/') => id.parse::<PostId>().map(Route::Post),
                _ => Err(format!("Unknown route: {other}")),
            },
        }
    }
}

/// Client-side navigation collaborator.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_parse_back() {
        for route in [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::Profile,
            Route::Admin,
            Route::Post(PostId::new(3)),
        ] {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn trailing_slashes_and_bad_ids() {
        assert_eq!("/admin/".parse::<Route>(), Ok(Route::Admin));
        assert!("/post/abc".parse::<Route>().is_err());
        assert!("/post/1/comments".parse::<Route>().is_err());
        assert!("/settings".parse::<Route>().is_err());
    }
}
