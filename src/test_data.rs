//! Car fixtures and expected application strings shared by the specs.
//! User credentials are not here on purpose: they come from `Settings`, scoped
//! to the run, never from ambient constants.

use crate::api::NewCar;
use uuid::Uuid;

/// A car as entered through the garage UI, by visible brand and model name.
#[derive(Clone, Copy, Debug)]
pub struct UiCar {
    pub brand: &'static str,
    pub model: &'static str,
    pub mileage: &'static str,
}

impl UiCar {
    /// The display name the garage list renders for this car.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

pub const AUDI_TT: UiCar = UiCar {
    brand: "Audi",
    model: "TT",
    mileage: "200",
};

pub const FORD_FUSION: UiCar = UiCar {
    brand: "Ford",
    model: "Fusion",
    mileage: "200",
};

/// Ford Focus by API identifiers.
pub fn ford_focus() -> NewCar {
    NewCar {
        car_brand_id: 3,
        car_model_id: 12,
        mileage: Some(122),
    }
}

/// A model id the server knows nothing about.
pub const UNKNOWN_MODEL_ID: i64 = 95;

/// A password satisfying the application's complexity rules.
pub const VALID_PASSWORD: &str = "TesterQA1!@";

/// Border color Qauto paints on a field failing validation.
pub const ERROR_BORDER_COLOR: &str = "rgb(220, 53, 69)";

pub const EXPECTED_TITLE: &str = "Hillel Qauto";

/// A unique registration email so repeated runs never collide on an
/// already-taken address.
pub fn unique_email() -> String {
    format!("aqa-user-{}@test.com", Uuid::new_v4().simple())
}

/// Exact validation feedback strings rendered by the sign-up form.
pub mod messages {
    pub const REGISTRATION_COMPLETE: &str = "Registration complete";
    pub const NAME_REQUIRED: &str = "Name required";
    pub const LAST_NAME_REQUIRED: &str = "Last name required";
    pub const EMAIL_REQUIRED: &str = "Email required";
    pub const PASSWORD_REQUIRED: &str = "Password required";
    pub const REPEAT_PASSWORD_REQUIRED: &str = "Re-enter password required";
    pub const NAME_INVALID: &str = "Name is invalid";
    pub const NAME_LENGTH: &str = "Name has to be from 2 to 20 characters long";
    pub const LAST_NAME_INVALID: &str = "Last name is invalid";
    pub const LAST_NAME_LENGTH: &str = "Last name has to be from 2 to 20 characters long";
    pub const EMAIL_INCORRECT: &str = "Email is incorrect";
    pub const PASSWORD_POLICY: &str = "Password has to be from 8 to 15 characters long and \
         contain at least one integer, one capital, and one small letter";
    pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
}
