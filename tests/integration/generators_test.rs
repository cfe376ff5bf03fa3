//! Integration tests for the generator endpoints.

mod helpers;

use axum::http::StatusCode;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;

const PASSWORD_CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+";

#[tokio::test]
async fn test_uuid_is_v4() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/api/generators/uuidGenerator", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let uuid = response.body["uuid"].as_str().unwrap();
    assert_eq!(uuid.len(), 36);
    assert_eq!(uuid.chars().nth(14), Some('4'));
}

#[tokio::test]
async fn test_password_defaults_and_charset() {
    let app = helpers::TestApp::new().await;
    let response = app
        .request("GET", "/api/generators/passwordGenerator", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let password = response.body["password"].as_str().unwrap();
    assert_eq!(password.len(), 16);
    assert!(password.chars().all(|c| PASSWORD_CHARSET.contains(c)));
}

#[tokio::test]
async fn test_password_length_is_clamped() {
    let app = helpers::TestApp::new().await;

    let short = app
        .request("GET", "/api/generators/passwordGenerator?length=1", None)
        .await;
    assert_eq!(short.body["password"].as_str().unwrap().len(), 4);

    let long = app
        .request("GET", "/api/generators/passwordGenerator?length=5000", None)
        .await;
    assert_eq!(long.body["password"].as_str().unwrap().len(), 128);

    let garbage = app
        .request("GET", "/api/generators/passwordGenerator?length=abc", None)
        .await;
    assert_eq!(garbage.status, StatusCode::OK);
    assert_eq!(garbage.body["password"].as_str().unwrap().len(), 16);
}

#[tokio::test]
async fn test_username_number_suffix() {
    let app = helpers::TestApp::new().await;

    let with_number = app
        .request("GET", "/api/generators/usernameGenerator", None)
        .await;
    let username = with_number.body["username"].as_str().unwrap();
    let digits: String = username.chars().filter(|c| c.is_ascii_digit()).collect();
    assert_eq!(digits.len(), 2);
    let suffix: u32 = digits.parse().unwrap();
    assert!((10..=99).contains(&suffix));

    let without = app
        .request(
            "GET",
            "/api/generators/usernameGenerator?includeNumber=false",
            None,
        )
        .await;
    let username = without.body["username"].as_str().unwrap();
    assert!(username.chars().all(|c| c.is_ascii_alphabetic()));
}

#[tokio::test]
async fn test_address_shape() {
    let app = helpers::TestApp::new().await;
    let response = app
        .request("GET", "/api/generators/addressGenerator", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    for field in ["street", "city", "state", "zipCode"] {
        assert!(
            response.body[field].as_str().is_some_and(|v| !v.is_empty()),
            "missing {field}"
        );
    }
    let number: u32 = response.body["street"]
        .as_str()
        .unwrap()
        .split_whitespace()
        .next()
        .unwrap()
        .parse()
        .unwrap();
    assert!((1..=1000).contains(&number));
}

#[tokio::test]
async fn test_jwt_default_config() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/api/generators/jwtGenerator", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let jwt = response.body["jwt"].as_str().unwrap();
    assert_eq!(jwt.split('.').count(), 3);

    let decoded = &response.body["decoded"];
    assert_eq!(decoded["header"]["alg"], "HS256");
    assert_eq!(decoded["header"]["typ"], "JWT");
    let payload = &decoded["payload"];
    assert_eq!(payload["iss"], "https://f3ssoftware.com");
    assert!(payload.get("jti").is_some());
    assert!(payload.get("nbf").is_none());
    let iat = payload["iat"].as_i64().unwrap();
    assert_eq!(payload["exp"].as_i64().unwrap() - iat, 3600);
}

#[tokio::test]
async fn test_jwt_post_custom_claims() {
    let app = helpers::TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/generators/jwtGenerator",
            Some(json!({
                "algorithm": "ES384",
                "expiresIn": 120,
                "includeIssuer": false,
                "includeAudience": false,
                "includeSubject": true,
                "includeJTI": false,
                "includeIAT": true,
                "includeNBF": true
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let jwt = response.body["jwt"].as_str().unwrap();
    let header_json = URL_SAFE_NO_PAD.decode(jwt.split('.').next().unwrap()).unwrap();
    let header: serde_json::Value = serde_json::from_slice(&header_json).unwrap();
    assert_eq!(header["alg"], "ES384");

    let payload = &response.body["decoded"]["payload"];
    assert!(payload.get("iss").is_none());
    assert!(payload.get("aud").is_none());
    assert!(payload.get("jti").is_none());
    assert!(payload.get("sub").is_some());
    assert!(payload.get("nbf").is_some());
}

#[tokio::test]
async fn test_jwt_post_validation_errors() {
    let app = helpers::TestApp::new().await;

    let bad_alg = app
        .request(
            "POST",
            "/api/generators/jwtGenerator",
            Some(json!({"algorithm": "PS256", "expiresIn": 3600})),
        )
        .await;
    assert_eq!(bad_alg.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_alg.body["error"], "Invalid algorithm");

    let too_short = app
        .request(
            "POST",
            "/api/generators/jwtGenerator",
            Some(json!({"algorithm": "HS512", "expiresIn": 59})),
        )
        .await;
    assert_eq!(too_short.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        too_short.body["error"],
        "Expires in must be between 60 and 31536000 seconds"
    );

    let malformed = app
        .raw_request("POST", "/api/generators/jwtGenerator", "[1, 2".to_string())
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["error"], "Invalid request body");
}
