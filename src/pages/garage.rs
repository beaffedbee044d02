use super::{assert_text_becomes, fill};
use thirtyfour::prelude::*;

/// The garage panel: the list of the account's cars plus the add-car modal.
#[derive(Clone, Debug)]
pub struct GaragePage {
    driver: WebDriver,
    base_url: String,
}

impl GaragePage {
    pub fn new(driver: WebDriver, base_url: impl Into<String>) -> Self {
        Self {
            driver,
            base_url: base_url.into(),
        }
    }

    fn add_car_button() -> By {
        By::XPath("//button[contains(@class, 'btn-primary') and contains(text(), 'Add car')]")
    }

    fn brand_option(brand: &str) -> By {
        By::XPath(format!(
            "//select[@id='addCarBrand']/option[normalize-space(text())='{brand}']"
        ))
    }

    fn model_option(model: &str) -> By {
        By::XPath(format!(
            "//select[@id='addCarModel']/option[normalize-space(text())='{model}']"
        ))
    }

    fn mileage_field() -> By {
        By::XPath("//input[@id='addCarMileage']")
    }

    fn modal_add_button() -> By {
        By::XPath("//div[@class='modal-footer']//button[contains(text(), 'Add')]")
    }

    fn car_names() -> By {
        By::XPath("//p[contains(@class, 'car_name')]")
    }

    fn last_car_name() -> By {
        By::XPath("(//p[contains(@class, 'car_name')])[1]")
    }

    fn edit_car_button() -> By {
        By::XPath("(//span[contains(@class, 'icon-edit')])[1]")
    }

    fn remove_car_button() -> By {
        By::XPath("//button[contains(text(), 'Remove car')]")
    }

    fn confirm_remove_button() -> By {
        By::XPath(
            "//div[contains(@class, 'modal-content')]\
             //button[contains(@class, 'btn-danger') and contains(text(), 'Remove')]",
        )
    }

    pub async fn open(&self) -> WebDriverResult<()> {
        let url = format!("{}/panel/garage", self.base_url);
        self.driver.goto(&url).await
    }

    /// Add a car through the modal, selecting brand and model by their
    /// visible names.
    #[tracing::instrument(name = "Adding car through the UI", skip(self))]
    pub async fn add_car(&self, brand: &str, model: &str, mileage: &str) -> WebDriverResult<()> {
        self.driver
            .query(Self::add_car_button())
            .first()
            .await?
            .click()
            .await?;
        self.driver
            .query(Self::brand_option(brand))
            .first()
            .await?
            .click()
            .await?;
        self.driver
            .query(Self::model_option(model))
            .first()
            .await?
            .click()
            .await?;
        let mileage_field = self.driver.query(Self::mileage_field()).first().await?;
        fill(&mileage_field, mileage).await?;
        self.driver
            .query(Self::modal_add_button())
            .first()
            .await?
            .click()
            .await
    }

    /// The most recently added car is rendered first in the list.
    pub async fn verify_last_added_car(&self, expected_name: &str) -> WebDriverResult<()> {
        assert_text_becomes(
            &self.driver,
            Self::last_car_name(),
            expected_name,
            "last added car",
        )
        .await
    }

    /// Whether the garage currently lists no cars. Uses a non-waiting lookup
    /// so teardown on an empty garage returns promptly.
    pub async fn is_empty(&self) -> WebDriverResult<bool> {
        Ok(self.driver.find_all(Self::car_names()).await?.is_empty())
    }

    /// Delete the most recently added car. A no-op on an empty garage, so
    /// fixture teardown stays idempotent.
    #[tracing::instrument(name = "Removing last added car", skip_all)]
    pub async fn remove_last_added_car(&self) -> WebDriverResult<()> {
        if self.is_empty().await? {
            tracing::info!("garage is already empty, nothing to remove");
            return Ok(());
        }
        self.driver
            .query(Self::edit_car_button())
            .first()
            .await?
            .click()
            .await?;
        self.driver
            .query(Self::remove_car_button())
            .first()
            .await?
            .click()
            .await?;
        self.driver
            .query(Self::confirm_remove_button())
            .first()
            .await?
            .click()
            .await
    }
}
