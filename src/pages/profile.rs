use super::assert_text_becomes;
use thirtyfour::prelude::*;

/// JavaScript shim that answers `GET /api/users/profile` with a canned body
/// instead of letting the request reach the server. Patches both `fetch` and
/// `XMLHttpRequest`; the application is a single-page app, so the patch
/// survives route changes until the next full page load.
const PROFILE_MOCK_SCRIPT: &str = r#"
const mocked = JSON.stringify(arguments[0]);
const target = '/api/users/profile';

const originalFetch = window.fetch;
window.fetch = function (input, init) {
    const url = typeof input === 'string' ? input : input.url;
    if (url.includes(target)) {
        return Promise.resolve(new Response(mocked, {
            status: 200,
            headers: { 'Content-Type': 'application/json' },
        }));
    }
    return originalFetch.call(this, input, init);
};

const originalOpen = XMLHttpRequest.prototype.open;
const originalSend = XMLHttpRequest.prototype.send;
XMLHttpRequest.prototype.open = function (method, url) {
    this.__profileMocked = typeof url === 'string' && url.includes(target);
    return originalOpen.apply(this, arguments);
};
XMLHttpRequest.prototype.send = function () {
    if (this.__profileMocked) {
        Object.defineProperty(this, 'readyState', { value: 4 });
        Object.defineProperty(this, 'status', { value: 200 });
        Object.defineProperty(this, 'responseText', { value: mocked });
        Object.defineProperty(this, 'response', { value: mocked });
        const xhr = this;
        setTimeout(function () {
            xhr.dispatchEvent(new Event('readystatechange'));
            xhr.dispatchEvent(new Event('load'));
            xhr.dispatchEvent(new Event('loadend'));
        }, 0);
        return;
    }
    return originalSend.apply(this, arguments);
};
"#;

/// The profile panel of an authenticated user.
#[derive(Clone, Debug)]
pub struct ProfilePage {
    driver: WebDriver,
}

impl ProfilePage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    fn profile_link() -> By {
        By::XPath("//a[@routerlink='profile']")
    }

    fn profile_name() -> By {
        By::XPath("//p[contains(@class, 'profile_name')]")
    }

    pub async fn open_profile(&self) -> WebDriverResult<()> {
        self.driver
            .query(Self::profile_link())
            .first()
            .await?
            .click()
            .await
    }

    /// Make the next profile request resolve to `body` without touching the
    /// server. Must be installed before navigating to the profile view.
    pub async fn mock_profile_response(&self, body: serde_json::Value) -> WebDriverResult<()> {
        self.driver.execute(PROFILE_MOCK_SCRIPT, vec![body]).await?;
        Ok(())
    }

    pub async fn verify_profile_name(&self, expected: &str) -> WebDriverResult<()> {
        assert_text_becomes(&self.driver, Self::profile_name(), expected, "profile name").await
    }
}
