use crate::configuration::WebDriverSettings;
use thirtyfour::prelude::*;

/// Connect a fresh Chrome session through the configured chromedriver.
///
/// Every fixture owns exactly one session; nothing is shared across tests.
#[tracing::instrument(name = "Launching browser session", skip_all)]
pub async fn launch(settings: &WebDriverSettings) -> WebDriverResult<WebDriver> {
    let mut caps = DesiredCapabilities::chrome();
    if settings.headless {
        caps.add_arg("--headless=new")?;
    }
    caps.add_arg("--no-sandbox")?;
    caps.add_arg("--disable-dev-shm-usage")?;
    caps.add_arg("--window-size=1280,900")?;

    WebDriver::new(&settings.url, caps).await
}
