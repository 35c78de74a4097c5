use crate::login_status::LoginStatus;
use derive_getters::Getters;
use serde::Deserialize;

/// Envelope of the login route reply: `{ "result": { "status": …, "message": … } }`.
#[derive(Debug, Getters, Deserialize, PartialEq, Clone)]
pub struct LoginResponse {
    result: LoginResult,
}

#[derive(Debug, Getters, Deserialize, PartialEq, Clone)]
pub struct LoginResult {
    status: i64,
    #[serde(default)]
    message: String,
}

impl LoginResponse {
    pub fn new(result: LoginResult) -> Self {
        Self { result }
    }
}

impl LoginResult {
    pub fn new(status: i64, message: String) -> Self {
        Self { status, message }
    }

    pub fn login_status(&self) -> LoginStatus {
        LoginStatus::from(self.status)
    }

    /// The message to display, if the server sent a non-empty one.
    pub fn displayable_message(&self) -> Option<&str> {
        if self.message.is_empty() {
            None
        } else {
            Some(&self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::login_response::{LoginResponse, LoginResult};
    use crate::login_status::LoginStatus;

    #[test]
    fn should_deserialize_envelope() {
        let response: LoginResponse =
            serde_json_wasm::from_str(r#"{"result": {"status": 0, "message": "bad password"}}"#)
                .unwrap();
        assert_eq!(
            LoginResponse::new(LoginResult::new(0, "bad password".to_owned())),
            response
        );
        assert_eq!(LoginStatus::Refused, response.result().login_status());
    }

    #[test]
    fn should_default_missing_message_to_empty() {
        let response: LoginResponse =
            serde_json_wasm::from_str(r#"{"result": {"status": -1}}"#).unwrap();
        assert_eq!("", response.result().message());
        assert_eq!(None, response.result().displayable_message());
    }

    #[test]
    fn should_expose_non_empty_message() {
        let result = LoginResult::new(1, "Welcome back".to_owned());
        assert_eq!(Some("Welcome back"), result.displayable_message());
    }

    #[test]
    fn should_fail_without_result() {
        let response = serde_json_wasm::from_str::<LoginResponse>(r#"{"status": 1}"#);
        assert!(response.is_err());
    }
}
