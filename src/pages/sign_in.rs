use super::fill;
use crate::configuration::Credentials;
use secrecy::ExposeSecret;
use thirtyfour::prelude::*;

/// The sign-in modal opened from the page header.
#[derive(Clone, Debug)]
pub struct SignInForm {
    driver: WebDriver,
}

impl SignInForm {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    fn email_field() -> By {
        By::XPath("//input[@id='signinEmail']")
    }

    fn password_field() -> By {
        By::XPath("//input[@id='signinPassword']")
    }

    fn login_button() -> By {
        By::XPath("//button[contains(@class, 'btn-primary') and contains(text(), 'Login')]")
    }

    #[tracing::instrument(name = "Logging in through the UI", skip_all)]
    pub async fn login_with_credentials(&self, credentials: &Credentials) -> WebDriverResult<()> {
        let email = self.driver.query(Self::email_field()).first().await?;
        fill(&email, &credentials.email).await?;
        let password = self.driver.query(Self::password_field()).first().await?;
        fill(&password, credentials.password.expose_secret()).await?;
        self.driver
            .query(Self::login_button())
            .first()
            .await?
            .click()
            .await
    }
}
