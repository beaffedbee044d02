use super::{
    assert_becomes_disabled, assert_css_value_becomes, assert_text_becomes, fill, focus_and_blur,
};
use std::str::FromStr;
use thirtyfour::prelude::*;

/// The five inputs of the registration form.
///
/// Field identity is a closed enum with a total mapping to locators, so an
/// unknown field name is rejected when parsed, not discovered mid-scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignUpField {
    Name,
    LastName,
    Email,
    Password,
    RepeatPassword,
}

#[derive(thiserror::Error, Debug)]
#[error("field `{0}` is not recognized")]
pub struct UnknownField(String);

impl FromStr for SignUpField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "lastName" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "repeatPassword" => Ok(Self::RepeatPassword),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

impl SignUpField {
    pub fn locator(self) -> By {
        match self {
            Self::Name => By::XPath("//input[@id='signupName']"),
            Self::LastName => By::XPath("//input[@id='signupLastName']"),
            Self::Email => By::XPath("//input[@id='signupEmail']"),
            Self::Password => By::XPath("//input[@id='signupPassword']"),
            Self::RepeatPassword => By::XPath("//input[@id='signupRepeatPassword']"),
        }
    }
}

/// The registration modal.
#[derive(Clone, Debug)]
pub struct SignUpForm {
    driver: WebDriver,
}

impl SignUpForm {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    fn register_button() -> By {
        By::XPath("//button[contains(@class, 'btn-primary') and contains(text(), 'Register')]")
    }

    fn error_message() -> By {
        By::XPath("//div[contains(@class, 'invalid-feedback')]//p")
    }

    fn success_popup() -> By {
        By::XPath("//div[contains(@class, 'alert alert-success')]//p")
    }

    async fn field(&self, field: SignUpField) -> WebDriverResult<WebElement> {
        self.driver.query(field.locator()).first().await
    }

    pub async fn enter_field(&self, field: SignUpField, value: &str) -> WebDriverResult<()> {
        let element = self.field(field).await?;
        fill(&element, value).await
    }

    pub async fn enter_name(&self, name: &str) -> WebDriverResult<()> {
        self.enter_field(SignUpField::Name, name).await
    }

    pub async fn enter_last_name(&self, last_name: &str) -> WebDriverResult<()> {
        self.enter_field(SignUpField::LastName, last_name).await
    }

    pub async fn enter_email(&self, email: &str) -> WebDriverResult<()> {
        self.enter_field(SignUpField::Email, email).await
    }

    pub async fn enter_password(&self, password: &str) -> WebDriverResult<()> {
        self.enter_field(SignUpField::Password, password).await
    }

    pub async fn enter_repeat_password(&self, repeat_password: &str) -> WebDriverResult<()> {
        self.enter_field(SignUpField::RepeatPassword, repeat_password)
            .await
    }

    pub async fn enter_data_in_all_fields(
        &self,
        name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        repeat_password: &str,
    ) -> WebDriverResult<()> {
        self.enter_name(name).await?;
        self.enter_last_name(last_name).await?;
        self.enter_email(email).await?;
        self.enter_password(password).await?;
        self.enter_repeat_password(repeat_password).await
    }

    pub async fn click_register_button(&self) -> WebDriverResult<()> {
        self.driver
            .query(Self::register_button())
            .first()
            .await?
            .click()
            .await
    }

    /// Focus then blur the field so the application renders its validation
    /// feedback without any input.
    pub async fn trigger_error_on(&self, field: SignUpField) -> WebDriverResult<()> {
        let element = self.field(field).await?;
        focus_and_blur(&self.driver, &element).await
    }

    /// Blur the field after input, committing its value for validation.
    pub async fn blur_field(&self, field: SignUpField) -> WebDriverResult<()> {
        let element = self.field(field).await?;
        self.driver
            .execute("arguments[0].blur();", vec![element.to_json()?])
            .await?;
        Ok(())
    }

    pub async fn is_register_button_enabled(&self) -> WebDriverResult<bool> {
        self.driver
            .query(Self::register_button())
            .first()
            .await?
            .is_enabled()
            .await
    }

    /// Wait for the Register button to report itself disabled; the form
    /// revalidates asynchronously after blur, so a single read can race it.
    pub async fn verify_register_button_disabled(&self) -> WebDriverResult<()> {
        assert_becomes_disabled(&self.driver, Self::register_button(), "Register button").await
    }

    pub async fn verify_error_message(&self, text: &str) -> WebDriverResult<()> {
        assert_text_becomes(
            &self.driver,
            Self::error_message(),
            text,
            "sign-up validation message",
        )
        .await
    }

    pub async fn verify_border_color(
        &self,
        field: SignUpField,
        expected_color: &str,
    ) -> WebDriverResult<()> {
        assert_css_value_becomes(
            &self.driver,
            field.locator(),
            "border-color",
            expected_color,
            "sign-up field border",
        )
        .await
    }

    pub async fn verify_success_popup(&self, text: &str) -> WebDriverResult<()> {
        assert_text_becomes(
            &self.driver,
            Self::success_popup(),
            text,
            "registration success popup",
        )
        .await
    }
}
