//! Sample JWT generator.
//!
//! HMAC tokens are signed with a throwaway per-request secret. RSA and ECDSA
//! tokens carry a random placeholder signature since no key pair exists.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use f3s_core::config::GeneratorsConfig;
use f3s_core::{AppError, AppResult};

/// Accepted `alg` values.
pub const SUPPORTED_ALGORITHMS: [&str; 9] = [
    "HS256", "HS384", "HS512", "RS256", "RS384", "RS512", "ES256", "ES384", "ES512",
];
/// Shortest accepted lifetime in seconds.
pub const MIN_EXPIRES_IN: i64 = 60;
/// Longest accepted lifetime in seconds (one year).
pub const MAX_EXPIRES_IN: i64 = 31_536_000;

const FAKE_SIGNATURE_LENGTH: usize = 43;
const JTI_LENGTH: usize = 16;

const EMAIL_NAMES: [&str; 8] = ["user", "admin", "test", "demo", "fake", "mock", "john", "jane"];
const EMAIL_DOMAINS: [&str; 5] = ["example.com", "test.org", "demo.net", "fake.io", "mock.co"];
const FIRST_NAMES: [&str; 8] = ["John", "Jane", "Mike", "Sarah", "David", "Lisa", "Tom", "Emma"];
const LAST_NAMES: [&str; 7] = ["Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller"];
const ROLES: [&str; 3] = ["user", "admin", "moderator"];
const PERMISSIONS: [&str; 3] = ["read", "write", "delete"];

/// Which claims to include and how the token is signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtGeneratorConfig {
    #[serde(default)]
    pub algorithm: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub include_issuer: bool,
    #[serde(default)]
    pub include_audience: bool,
    #[serde(default)]
    pub include_subject: bool,
    #[serde(default, rename = "includeJTI")]
    pub include_jti: bool,
    #[serde(default, rename = "includeIAT")]
    pub include_iat: bool,
    #[serde(default, rename = "includeNBF")]
    pub include_nbf: bool,
}

impl Default for JwtGeneratorConfig {
    fn default() -> Self {
        Self {
            algorithm: "HS256".to_string(),
            expires_in: 3600,
            include_issuer: true,
            include_audience: true,
            include_subject: true,
            include_jti: true,
            include_iat: true,
            include_nbf: false,
        }
    }
}

impl JwtGeneratorConfig {
    /// Checks the algorithm and lifetime bounds.
    pub fn validate(&self) -> AppResult<()> {
        if !SUPPORTED_ALGORITHMS.contains(&self.algorithm.as_str()) {
            return Err(AppError::validation("Invalid algorithm"));
        }
        if !(MIN_EXPIRES_IN..=MAX_EXPIRES_IN).contains(&self.expires_in) {
            return Err(AppError::validation(format!(
                "Expires in must be between {MIN_EXPIRES_IN} and {MAX_EXPIRES_IN} seconds"
            )));
        }
        Ok(())
    }
}

/// The three parts of a generated token, decoded for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedJwt {
    pub header: Value,
    pub payload: Map<String, Value>,
    pub signature: String,
}

/// A generated token and its decoded form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedJwt {
    pub jwt: String,
    pub decoded: DecodedJwt,
}

pub(crate) fn generate(
    request: &JwtGeneratorConfig,
    settings: &GeneratorsConfig,
) -> AppResult<GeneratedJwt> {
    request.validate()?;

    let payload = build_payload(request, settings, Utc::now().timestamp());
    let header = json!({ "alg": request.algorithm, "typ": "JWT" });

    let jwt = if request.algorithm.starts_with("HS") {
        sign_hmac(&request.algorithm, &payload)?
    } else {
        let encoded_header = URL_SAFE_NO_PAD.encode(header.to_string());
        let encoded_payload = URL_SAFE_NO_PAD.encode(Value::Object(payload.clone()).to_string());
        format!(
            "{encoded_header}.{encoded_payload}.{}",
            random_string(FAKE_SIGNATURE_LENGTH)
        )
    };

    let signature = jwt.rsplit('.').next().unwrap_or_default().to_string();

    Ok(GeneratedJwt {
        jwt,
        decoded: DecodedJwt {
            header,
            payload,
            signature,
        },
    })
}

fn build_payload(
    request: &JwtGeneratorConfig,
    settings: &GeneratorsConfig,
    now: i64,
) -> Map<String, Value> {
    let mut rng = rand::thread_rng();
    let mut payload = Map::new();

    if request.include_subject {
        payload.insert("sub".into(), json!(random_email()));
    }
    if request.include_issuer {
        payload.insert("iss".into(), json!(settings.jwt_issuer));
    }
    if request.include_audience {
        payload.insert("aud".into(), json!(settings.jwt_audience));
    }
    if request.include_iat {
        payload.insert("iat".into(), json!(now));
    }
    if request.include_nbf {
        payload.insert("nbf".into(), json!(now));
    }
    if request.include_jti {
        payload.insert("jti".into(), json!(random_string(JTI_LENGTH)));
    }

    payload.insert("name".into(), json!(random_name()));
    payload.insert("email".into(), json!(random_email()));
    payload.insert("role".into(), json!(ROLES.choose(&mut rng).copied().unwrap_or("user")));
    let granted = rng.gen_range(1..=PERMISSIONS.len());
    payload.insert("permissions".into(), json!(&PERMISSIONS[..granted]));
    payload.insert("exp".into(), json!(now + request.expires_in));

    payload
}

fn sign_hmac(algorithm: &str, payload: &Map<String, Value>) -> AppResult<String> {
    let algorithm = match algorithm {
        "HS384" => Algorithm::HS384,
        "HS512" => Algorithm::HS512,
        _ => Algorithm::HS256,
    };

    let mut secret = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut secret);

    jsonwebtoken::encode(
        &Header::new(algorithm),
        payload,
        &EncodingKey::from_secret(&secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")))
}

fn random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

fn random_email() -> String {
    let mut rng = rand::thread_rng();
    let name = EMAIL_NAMES.choose(&mut rng).copied().unwrap_or("user");
    let domain = EMAIL_DOMAINS.choose(&mut rng).copied().unwrap_or("example.com");
    format!("{name}{}@{domain}", rng.gen_range(0..1000))
}

fn random_name() -> String {
    let mut rng = rand::thread_rng();
    let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("John");
    let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Smith");
    format!("{first} {last}")
}
