use thirtyfour::prelude::*;

/// The Qauto landing page.
#[derive(Clone, Debug)]
pub struct HomePage {
    driver: WebDriver,
    base_url: String,
}

impl HomePage {
    pub fn new(driver: WebDriver, base_url: impl Into<String>) -> Self {
        Self {
            driver,
            base_url: base_url.into(),
        }
    }

    fn sign_up_button() -> By {
        By::XPath("//button[contains(text(), 'Sign up')]")
    }

    fn sign_in_button() -> By {
        By::XPath("//button[contains(@class, 'header_signin')]")
    }

    pub async fn open(&self) -> WebDriverResult<()> {
        self.driver.goto(&self.base_url).await
    }

    pub async fn click_sign_up_button(&self) -> WebDriverResult<()> {
        self.driver
            .query(Self::sign_up_button())
            .first()
            .await?
            .click()
            .await
    }

    pub async fn click_sign_in_button(&self) -> WebDriverResult<()> {
        self.driver
            .query(Self::sign_in_button())
            .first()
            .await?
            .click()
            .await
    }
}
