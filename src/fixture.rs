//! Scenario-scoped resources with guaranteed acquisition and release.
//!
//! Each fixture owns one browser (or API) session seeded from the persisted
//! session state, hands a ready page object to the scenario body, and runs its
//! teardown on every exit path before the session is closed.

use crate::api::QautoApi;
use crate::browser;
use crate::configuration::Settings;
use crate::pages::{GaragePage, HomePage, ProfilePage, SignUpForm};
use crate::session::SessionState;
use thirtyfour::WebDriver;

/// A per-scenario resource: acquired before the body runs, released after it,
/// success or failure alike.
#[allow(async_fn_in_trait)]
pub trait TestResource: Sized {
    async fn acquire(settings: &Settings) -> anyhow::Result<Self>;
    async fn release(self) -> anyhow::Result<()>;
}

/// Acquire a resource, run the scenario body, then release the resource.
///
/// Release runs even when the body fails; the body's error wins when both
/// report one, so the assertion that failed is what the runner shows.
pub async fn with_resource<R, F, Fut>(settings: &Settings, body: F) -> anyhow::Result<()>
where
    R: TestResource + Clone,
    F: FnOnce(R) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    let resource = R::acquire(settings).await?;
    let outcome = body(resource.clone()).await;
    let teardown = resource.release().await;
    match outcome {
        Ok(()) => teardown,
        Err(error) => {
            if let Err(teardown_error) = teardown {
                tracing::warn!("teardown also failed: {teardown_error:#}");
            }
            Err(error)
        }
    }
}

async fn launch_with_session(settings: &Settings) -> anyhow::Result<WebDriver> {
    let driver = browser::launch(&settings.webdriver).await?;
    let restored = async {
        let state = SessionState::load(&settings.session.user_one_state_path())?;
        state
            .restore(&driver, &settings.application.base_url)
            .await?;
        Ok::<(), crate::session::SessionError>(())
    }
    .await;
    if let Err(error) = restored {
        let _ = driver.clone().quit().await;
        return Err(error.into());
    }
    Ok(driver)
}

async fn quit(driver: WebDriver) -> anyhow::Result<()> {
    driver.quit().await?;
    Ok(())
}

/// An authenticated garage view. Teardown removes the car the scenario added,
/// keeping the shared account's garage state reset between runs.
#[derive(Clone)]
pub struct GarageFixture {
    driver: WebDriver,
    pub garage: GaragePage,
}

impl TestResource for GarageFixture {
    async fn acquire(settings: &Settings) -> anyhow::Result<Self> {
        let driver = launch_with_session(settings).await?;
        let garage = GaragePage::new(driver.clone(), settings.application.base_url.clone());
        if let Err(error) = garage.open().await {
            let _ = driver.clone().quit().await;
            return Err(error.into());
        }
        Ok(Self { driver, garage })
    }

    async fn release(self) -> anyhow::Result<()> {
        let removed = self.garage.remove_last_added_car().await;
        let closed = quit(self.driver).await;
        removed?;
        closed
    }
}

/// An authenticated panel view ready for profile interaction.
#[derive(Clone)]
pub struct ProfileFixture {
    driver: WebDriver,
    pub profile: ProfilePage,
}

impl TestResource for ProfileFixture {
    async fn acquire(settings: &Settings) -> anyhow::Result<Self> {
        let driver = launch_with_session(settings).await?;
        // Reload the panel so the application picks up the restored session.
        let panel_url = format!("{}/panel/garage", settings.application.base_url);
        let opened = driver.goto(&panel_url).await;
        if let Err(error) = opened {
            let _ = driver.clone().quit().await;
            return Err(error.into());
        }
        let profile = ProfilePage::new(driver.clone());
        Ok(Self { driver, profile })
    }

    async fn release(self) -> anyhow::Result<()> {
        quit(self.driver).await
    }
}

/// A fresh unauthenticated session with the registration form displayed.
#[derive(Clone)]
pub struct SignUpFixture {
    pub driver: WebDriver,
    pub form: SignUpForm,
}

impl TestResource for SignUpFixture {
    async fn acquire(settings: &Settings) -> anyhow::Result<Self> {
        let driver = browser::launch(&settings.webdriver).await?;
        let opened = async {
            let home = HomePage::new(driver.clone(), settings.application.base_url.clone());
            home.open().await?;
            home.click_sign_up_button().await
        }
        .await;
        if let Err(error) = opened {
            let _ = driver.clone().quit().await;
            return Err(error.into());
        }
        let form = SignUpForm::new(driver.clone());
        Ok(Self { driver, form })
    }

    async fn release(self) -> anyhow::Result<()> {
        quit(self.driver).await
    }
}

/// A signed-in API client. Teardown restores the account's car list to its
/// pre-test state by deleting every car on it.
#[derive(Clone)]
pub struct ApiFixture {
    pub api: QautoApi,
}

impl TestResource for ApiFixture {
    async fn acquire(settings: &Settings) -> anyhow::Result<Self> {
        let api = QautoApi::sign_in(&settings.application.base_url, &settings.users.user_one).await?;
        Ok(Self { api })
    }

    async fn release(self) -> anyhow::Result<()> {
        self.api.remove_all_cars().await?;
        Ok(())
    }
}
