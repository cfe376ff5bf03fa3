//! Random data generators.

pub mod address;
pub mod jwt;
pub mod password;
pub mod username;

use f3s_core::AppResult;
use f3s_core::config::GeneratorsConfig;

pub use address::Address;
pub use jwt::{DecodedJwt, GeneratedJwt, JwtGeneratorConfig};

/// Entry point for every generator, carrying the configured limits.
#[derive(Debug, Clone)]
pub struct GeneratorService {
    config: GeneratorsConfig,
}

impl GeneratorService {
    /// Creates a generator service.
    pub fn new(config: GeneratorsConfig) -> Self {
        Self { config }
    }

    /// A random v4 UUID.
    pub fn uuid(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// A random password; `length` defaults and is clamped per configuration.
    pub fn password(&self, length: Option<usize>) -> String {
        let length = length
            .unwrap_or(self.config.password_default_length)
            .clamp(self.config.password_min_length, self.config.password_max_length);
        password::generate(length)
    }

    /// An adjective-noun username, optionally suffixed with a two-digit number.
    pub fn username(&self, include_number: bool) -> String {
        username::generate(include_number)
    }

    /// A random US street address.
    pub fn address(&self) -> Address {
        address::generate()
    }

    /// A sample JWT built from `request`.
    pub fn jwt(&self, request: &JwtGeneratorConfig) -> AppResult<GeneratedJwt> {
        jwt::generate(request, &self.config)
    }
}
