use crate::error::{AppError, Result};
use crate::sheets::client::AUTH_SCOPE;
use hyper_util::client::legacy::connect::HttpConnector;
use std::path::Path;
use tracing::{debug, instrument};
use yup_oauth2::{
    ServiceAccountAuthenticator, authenticator::Authenticator, hyper_rustls::HttpsConnector,
};

pub(super) type AuthType = Authenticator<HttpsConnector<HttpConnector>>;

/// Create and verify authenticator by fetching a token
#[instrument(name = "Loading Google credentials", skip_all, fields(path = ?credentials_path))]
pub(super) async fn create_and_verify_authenticator(credentials_path: &Path) -> Result<AuthType> {
    let auth = from_service_account(credentials_path).await?;

    // Bad credentials should fail here rather than on the first row write
    let _token = auth
        .token(&[AUTH_SCOPE])
        .await
        .map_err(|e| AppError::Auth(format!("Failed to get token: {}", e)))?;
    debug!("Service account token acquired");

    Ok(auth)
}

async fn from_service_account(credentials_path: &Path) -> Result<AuthType> {
    let key = yup_oauth2::read_service_account_key(credentials_path)
        .await
        .map_err(|e| {
            AppError::Auth(format!(
                "Failed to read service account key {:?}: {}",
                credentials_path, e
            ))
        })?;

    let auth = ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .map_err(|e| AppError::Auth(format!("Failed to build authenticator: {}", e)))?;

    Ok(auth)
}
