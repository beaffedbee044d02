use secrecy::Secret;
use std::path::PathBuf;

/// Run-scoped settings for the suite. Built once per test process and passed
/// into scenario setup explicitly, rather than living in ambient statics.
#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub webdriver: WebDriverSettings,
    pub session: SessionSettings,
    pub users: UserSettings,
}

#[derive(Clone, serde::Deserialize)]
pub struct ApplicationSettings {
    /// Base URL of the Qauto deployment under test.
    pub base_url: String,
}

#[derive(Clone, serde::Deserialize)]
pub struct WebDriverSettings {
    /// Address of a running chromedriver, e.g. `http://localhost:9515`.
    pub url: String,
    pub headless: bool,
}

#[derive(Clone, serde::Deserialize)]
pub struct SessionSettings {
    /// Directory holding persisted session-state files.
    pub state_dir: PathBuf,
}

impl SessionSettings {
    /// Path of the persisted state for the shared `user_one` account.
    pub fn user_one_state_path(&self) -> PathBuf {
        self.state_dir.join("user_one_state.json")
    }
}

#[derive(Clone, serde::Deserialize)]
pub struct UserSettings {
    pub user_one: Credentials,
}

#[derive(Clone, serde::Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: Secret<String>,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        // E.g. `APP__USERS__USER_ONE__PASSWORD=...` overrides `users.user_one.password`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
