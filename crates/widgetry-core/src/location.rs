//! Logical application paths.
//!
//! A [`Location`] is the path the application is "at" (`/`, `/list`), not a
//! full URL. [`RouterMode`] decides whether that path lives in the URL's
//! pathname or in its hash.

use std::fmt;

/// Current logical path of the application.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    /// Wrap a path. An empty path is the root `/`.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.is_empty() {
            Self::root()
        } else {
            Self(path)
        }
    }

    /// The root location `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Location from a URL pathname (`window.location.pathname`).
    pub fn from_pathname(pathname: &str) -> Self {
        Self::new(pathname)
    }

    /// Location from a URL hash: `#/list` → `/list`, `#` or `""` → `/`.
    ///
    /// Only one `#` and one `/` are stripped, so `#//list` stays `//list`.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.strip_prefix('#').unwrap_or(hash);
        let path = path.strip_prefix('/').unwrap_or(path);
        Self(format!("/{}", path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact string equality with a declared path. Never a prefix match.
    pub fn matches(&self, path: &str) -> bool {
        self.0 == path
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the location is stored in the browser URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouterMode {
    /// `https://host/list`. Needs the server to answer every path with the app.
    #[default]
    Path,
    /// `https://host/#/list`. Works on any static host.
    Hash,
}

impl RouterMode {
    /// Read the location from the URL's pathname and hash.
    pub fn read(self, pathname: &str, hash: &str) -> Location {
        match self {
            Self::Path => Location::from_pathname(pathname),
            Self::Hash => Location::from_hash(hash),
        }
    }

    /// The `href` that points at `location` under this mode.
    pub fn href(self, location: &Location) -> String {
        match self {
            Self::Path => location.as_str().to_string(),
            Self::Hash => format!("#{}", location.as_str()),
        }
    }
}
