use serde::{Deserialize, Serialize};

/// Endpoint that checks the admin credentials.
pub const LOGIN_PATH: &str = "/admin/login";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err("Enter a valid email".into());
        }
        if self.password.is_empty() {
            return Err("Enter the password".into());
        }
        Ok(())
    }
}

/// `data` of the login response. The server only says yes or no; the
/// dashboard then stores its configured access token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub authorized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::envelope::ApiEnvelope;

    #[test]
    fn test_login_response_in_envelope() {
        let raw = r#"{"statusCode":200,"success":true,"message":"ok","data":{"authorized":false}}"#;
        let env: ApiEnvelope<LoginResponse> = serde_json::from_str(raw).unwrap();
        assert!(!env.into_data().unwrap().authorized);
    }

    #[test]
    fn test_login_request_validation() {
        let mut req = LoginRequest {
            email: "admin".into(),
            password: "secret".into(),
        };
        assert!(req.validate().is_err());
        req.email = "admin@shop.com".into();
        assert!(req.validate().is_ok());
    }
}
