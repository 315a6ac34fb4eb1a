//! Auth Endpoints
//!
//! Token login, registration and current-user lookup.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{encode_err, ApiClient};
use crate::error::ApiError;
use crate::models::{LoginData, RegisterData, TokenResponse, User};

/// POST /token with a form-urlencoded body
pub async fn login(client: &ApiClient, data: &LoginData) -> Result<TokenResponse, ApiError> {
    let request = client
        .post("/token")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(encode_login_form(data))
        .map_err(encode_err)?;
    client.fetch_json(request).await
}

pub async fn register(client: &ApiClient, data: &RegisterData) -> Result<User, ApiError> {
    let request = client.post("/users/register").json(data).map_err(encode_err)?;
    client.fetch_json(request).await
}

pub async fn current_user(client: &ApiClient) -> Result<User, ApiError> {
    let request = client.get("/users/me").build().map_err(encode_err)?;
    client.fetch_json(request).await
}

pub fn encode_login_form(data: &LoginData) -> String {
    format!(
        "username={}&password={}",
        utf8_percent_encode(&data.username, NON_ALPHANUMERIC),
        utf8_percent_encode(&data.password, NON_ALPHANUMERIC),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_is_percent_encoded() {
        let data = LoginData {
            username: "merlin".into(),
            password: "p@ss w&rd=1".into(),
        };
        assert_eq!(encode_login_form(&data), "username=merlin&password=p%40ss%20w%26rd%3D1");
    }
}
