use contracts::shared::envelope::ApiEnvelope;
use contracts::system::auth::{LoginRequest, LoginResponse, LOGIN_PATH};
use gloo_net::http::Request;

use crate::shared::config::AppConfig;
use crate::shared::error::{AdminError, TransportError};

pub const WRONG_CREDENTIALS: &str = "Wrong email or password!";

/// Checks admin credentials. `Ok(())` only when the server says `authorized`.
pub async fn login(config: &AppConfig, request: &LoginRequest) -> Result<(), AdminError> {
    let response = Request::post(&config.url(LOGIN_PATH))
        .json(request)
        .map_err(|e| AdminError::Mutation(TransportError::Encode(e.to_string())))?
        .send()
        .await
        .map_err(|e| AdminError::Mutation(TransportError::Network(e.to_string())))?;

    // Rejected credentials come back as 4xx with a message.
    if !response.ok() {
        log::warn!("login rejected with HTTP {}", response.status());
        return Err(AdminError::Auth(WRONG_CREDENTIALS.to_string()));
    }

    let envelope = response
        .json::<ApiEnvelope<LoginResponse>>()
        .await
        .map_err(|e| AdminError::Mutation(TransportError::Decode(e.to_string())))?;
    login_outcome(envelope)
}

pub(crate) fn login_outcome(envelope: ApiEnvelope<LoginResponse>) -> Result<(), AdminError> {
    let authorized = envelope.status_code.unwrap_or(200) == 200
        && envelope.into_data().map(|d| d.authorized).unwrap_or(false);
    if authorized {
        Ok(())
    } else {
        Err(AdminError::Auth(WRONG_CREDENTIALS.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(raw: &str) -> ApiEnvelope<LoginResponse> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_login_outcome() {
        assert!(login_outcome(envelope(
            r#"{"statusCode":200,"success":true,"data":{"authorized":true}}"#
        ))
        .is_ok());
        assert_eq!(
            login_outcome(envelope(
                r#"{"statusCode":200,"success":true,"data":{"authorized":false}}"#
            )),
            Err(AdminError::Auth(WRONG_CREDENTIALS.to_string()))
        );
        assert!(login_outcome(envelope(r#"{"statusCode":401,"success":false}"#)).is_err());
    }
}
