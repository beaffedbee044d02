//! Typed client for the Qauto JSON API.
//!
//! Authentication happens once per client: `sign_in` captures the session
//! cookie from the sign-in response and every later request replays it, the
//! same way the UI suite reuses one persisted browser session.

use crate::configuration::Credentials;
use secrecy::ExposeSecret;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("sign-in response did not include a session cookie")]
    MissingSessionCookie,
    #[error("deleting car {requested} was acknowledged for car {acknowledged}")]
    TeardownMismatch { requested: i64, acknowledged: i64 },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub car_brand_id: i64,
    pub car_model_id: i64,
    /// Omitted entirely from the payload when `None`, which the server
    /// answers with 400 "Mileage is required".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage: Option<i64>,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub car_brand_id: i64,
    pub car_model_id: i64,
    pub mileage: i64,
}

#[derive(Debug, serde::Deserialize)]
pub struct CarResponse {
    pub status: String,
    pub data: Car,
}

#[derive(Debug, serde::Deserialize)]
pub struct CarsResponse {
    pub status: String,
    pub data: Vec<Car>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorBody {
    pub status: String,
    pub message: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedCar {
    pub car_id: i64,
}

#[derive(Debug, serde::Deserialize)]
pub struct DeleteCarResponse {
    pub data: DeletedCar,
}

#[derive(Clone, Debug)]
pub struct QautoApi {
    base_url: String,
    client: reqwest::Client,
    session_cookie: String,
}

impl QautoApi {
    /// Authenticate against `POST /api/auth/signin` and capture the leading
    /// `Set-Cookie` pair for reuse. A response without one aborts the whole
    /// dependent test group.
    #[tracing::instrument(name = "Signing in through the API", skip(credentials))]
    pub async fn sign_in(base_url: &str, credentials: &Credentials) -> Result<Self, ApiError> {
        let client = reqwest::Client::new();
        let response = client
            .post(format!("{base_url}/api/auth/signin"))
            .json(&serde_json::json!({
                "email": credentials.email,
                "password": credentials.password.expose_secret(),
                "remember": false,
            }))
            .send()
            .await?;

        let session_cookie = response
            .headers()
            .get(reqwest::header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(str::to_owned)
            .ok_or(ApiError::MissingSessionCookie)?;

        Ok(Self {
            base_url: base_url.to_owned(),
            client,
            session_cookie,
        })
    }

    pub async fn post_car(&self, car: &NewCar) -> Result<reqwest::Response, ApiError> {
        let response = self
            .client
            .post(format!("{}/api/cars", self.base_url))
            .header(reqwest::header::COOKIE, &self.session_cookie)
            .json(car)
            .send()
            .await?;
        Ok(response)
    }

    /// List the account's cars. An error status (an expired session, say) is
    /// reported as such instead of falling through to a decode failure.
    pub async fn get_cars(&self) -> Result<CarsResponse, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/cars", self.base_url))
            .header(reqwest::header::COOKIE, &self.session_cookie)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn delete_car(&self, car_id: i64) -> Result<DeleteCarResponse, ApiError> {
        let response = self
            .client
            .delete(format!("{}/api/cars/{car_id}", self.base_url))
            .header(reqwest::header::COOKIE, &self.session_cookie)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Delete every car on the account, restoring its pre-test state.
    ///
    /// Each deletion must be acknowledged with the id that was requested;
    /// a mismatch means the teardown touched the wrong record and the run is
    /// reported as drifted. Idempotent on an empty garage.
    #[tracing::instrument(name = "Removing all cars", skip_all)]
    pub async fn remove_all_cars(&self) -> Result<Vec<i64>, ApiError> {
        let cars = self.get_cars().await?.data;
        let mut deleted = Vec::with_capacity(cars.len());
        for car in cars {
            let response = self.delete_car(car.id).await?;
            if response.data.car_id != car.id {
                return Err(ApiError::TeardownMismatch {
                    requested: car.id,
                    acknowledged: response.data.car_id,
                });
            }
            deleted.push(car.id);
        }
        tracing::info!(count = deleted.len(), "garage restored to empty state");
        Ok(deleted)
    }
}
