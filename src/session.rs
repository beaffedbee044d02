//! Persistence of authenticated browser sessions.
//!
//! The one-time `setup` spec logs in through the UI and captures the cookies
//! of the authenticated context into a JSON file. Fixtures later seed fresh
//! browser sessions from that file so scenarios start already logged in,
//! without repeating the login flow.

use std::path::{Path, PathBuf};
use thirtyfour::error::WebDriverError;
use thirtyfour::{Cookie, WebDriver};

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error(
        "session state file `{0}` is missing; run the setup spec first \
         (`cargo test --features live-tests --test setup`)"
    )]
    MissingStateFile(PathBuf),
    #[error("session state file `{path}` could not be parsed")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    WebDriver(#[from] WebDriverError),
}

/// One cookie of a persisted session. Mirrors the WebDriver cookie object so
/// the on-disk format stays a plain JSON snapshot of what the browser held.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: Option<bool>,
    pub expiry: Option<i64>,
}

impl From<Cookie> for StoredCookie {
    fn from(cookie: Cookie) -> Self {
        Self {
            name: cookie.name,
            value: cookie.value,
            path: cookie.path,
            domain: cookie.domain,
            secure: cookie.secure,
            expiry: cookie.expiry,
        }
    }
}

impl From<StoredCookie> for Cookie {
    fn from(stored: StoredCookie) -> Self {
        let mut cookie = Cookie::new(stored.name, stored.value);
        cookie.path = stored.path;
        cookie.domain = stored.domain;
        cookie.secure = stored.secure;
        cookie.expiry = stored.expiry;
        cookie
    }
}

/// Serialized snapshot of an authenticated session for one user.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SessionState {
    pub cookies: Vec<StoredCookie>,
}

impl SessionState {
    /// Snapshot the cookies of the current browser session.
    #[tracing::instrument(name = "Capturing session state", skip_all)]
    pub async fn capture(driver: &WebDriver) -> Result<Self, SessionError> {
        let cookies = driver.get_all_cookies().await?;
        Ok(Self {
            cookies: cookies.into_iter().map(StoredCookie::from).collect(),
        })
    }

    /// Write the snapshot to `path`, creating parent directories as needed.
    #[tracing::instrument(name = "Saving session state", skip(self))]
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| SessionError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a previously persisted snapshot. A missing or unparseable file is
    /// a fatal precondition failure for the dependent scenario; the session is
    /// only regenerated by re-running the setup spec out of band.
    #[tracing::instrument(name = "Loading session state")]
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        if !path.exists() {
            return Err(SessionError::MissingStateFile(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|source| SessionError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Seed a fresh browser session with the persisted cookies.
    ///
    /// Cookies can only be attached to the origin currently loaded, so this
    /// first navigates to `base_url`, then replaces the cookie jar.
    #[tracing::instrument(name = "Restoring session state", skip(self, driver))]
    pub async fn restore(&self, driver: &WebDriver, base_url: &str) -> Result<(), SessionError> {
        driver.goto(base_url).await?;
        driver.delete_all_cookies().await?;
        for cookie in &self.cookies {
            driver.add_cookie(Cookie::from(cookie.clone())).await?;
        }
        Ok(())
    }
}
