//! Page objects: stateless wrappers binding named locators and actions to one
//! logical Qauto surface each. Locators are resolved lazily against the
//! session; assertion helpers poll up to a shared timeout and fail the calling
//! test with an expected-vs-actual message when the condition never holds.

mod garage;
mod home;
mod profile;
mod sign_in;
mod sign_up;

pub use garage::GaragePage;
pub use home::HomePage;
pub use profile::ProfilePage;
pub use sign_in::SignInForm;
pub use sign_up::{SignUpField, SignUpForm, UnknownField};

use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

/// How long assertion helpers wait for the UI to settle.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Fill an input, clearing whatever it held first.
pub(crate) async fn fill(element: &WebElement, value: &str) -> WebDriverResult<()> {
    element.clear().await?;
    element.send_keys(value).await
}

/// Focus then immediately blur an element, firing its validation handlers.
pub(crate) async fn focus_and_blur(driver: &WebDriver, element: &WebElement) -> WebDriverResult<()> {
    driver
        .execute(
            "arguments[0].focus(); arguments[0].blur();",
            vec![element.to_json()?],
        )
        .await?;
    Ok(())
}

/// Re-run `probe` until it reports the expected observation or the timeout
/// elapses. The probe returns `Ok` when the condition holds and `Err` carrying
/// the last observed value otherwise, so a timeout can report what the UI
/// actually showed.
pub(crate) async fn eventually<T, F, Fut>(
    timeout: Duration,
    mut probe: F,
) -> WebDriverResult<Result<T, T>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = WebDriverResult<Result<T, T>>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        match probe().await? {
            Ok(value) => return Ok(Ok(value)),
            Err(last) => {
                if Instant::now() >= deadline {
                    return Ok(Err(last));
                }
            }
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Wait until the element located by `by` has exactly the expected text.
pub(crate) async fn assert_text_becomes(
    driver: &WebDriver,
    by: By,
    expected: &str,
    what: &str,
) -> WebDriverResult<()> {
    let element = driver.query(by).first().await?;
    let settled = eventually(DEFAULT_TIMEOUT, || {
        let element = element.clone();
        async move {
            let text = element.text().await?;
            Ok(if text == expected { Ok(text) } else { Err(text) })
        }
    })
    .await?;
    if let Err(last) = settled {
        panic!("{what}: expected text {expected:?}, last observed {last:?}");
    }
    Ok(())
}

/// Wait until the element's computed CSS property has the expected value.
pub(crate) async fn assert_css_value_becomes(
    driver: &WebDriver,
    by: By,
    property: &str,
    expected: &str,
    what: &str,
) -> WebDriverResult<()> {
    let element = driver.query(by).first().await?;
    let settled = eventually(DEFAULT_TIMEOUT, || {
        let element = element.clone();
        async move {
            let value = element.css_value(property).await?;
            Ok(if value == expected {
                Ok(value)
            } else {
                Err(value)
            })
        }
    })
    .await?;
    if let Err(last) = settled {
        panic!("{what}: expected `{property}` to be {expected:?}, last observed {last:?}");
    }
    Ok(())
}

/// Wait until the element located by `by` reports itself disabled.
pub(crate) async fn assert_becomes_disabled(
    driver: &WebDriver,
    by: By,
    what: &str,
) -> WebDriverResult<()> {
    let element = driver.query(by).first().await?;
    let settled = eventually(DEFAULT_TIMEOUT, || {
        let element = element.clone();
        async move {
            let enabled = element.is_enabled().await?;
            Ok(if enabled { Err(()) } else { Ok(()) })
        }
    })
    .await?;
    if settled.is_err() {
        panic!("{what}: expected to become disabled, still enabled");
    }
    Ok(())
}

/// Wait until the current URL contains the given fragment.
pub async fn assert_url_contains(driver: &WebDriver, fragment: &str) -> WebDriverResult<()> {
    let settled = eventually(DEFAULT_TIMEOUT, || {
        let driver = driver.clone();
        async move {
            let url = driver.current_url().await?.to_string();
            Ok(if url.contains(fragment) {
                Ok(url)
            } else {
                Err(url)
            })
        }
    })
    .await?;
    if let Err(last) = settled {
        panic!("expected URL containing {fragment:?}, last observed {last:?}");
    }
    Ok(())
}

/// Wait until the page title matches exactly.
pub async fn assert_title_is(driver: &WebDriver, expected: &str) -> WebDriverResult<()> {
    let settled = eventually(DEFAULT_TIMEOUT, || {
        let driver = driver.clone();
        async move {
            let title = driver.title().await?;
            Ok(if title == expected {
                Ok(title)
            } else {
                Err(title)
            })
        }
    })
    .await?;
    if let Err(last) = settled {
        panic!("expected title {expected:?}, last observed {last:?}");
    }
    Ok(())
}
