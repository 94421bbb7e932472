//! API key service: creation and verification
//!
//! Verification contract: parse the presented `<prefix>.<secret>` string,
//! fetch every stored record sharing the prefix, and accept if the secret
//! verifies against any candidate's salted hash. Malformed keys are
//! rejected before any lookup.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::api_key::{ApiKey, ApiKeyRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::PasswordHasher;

use super::generator::{ApiKeyGenerator, GeneratedKey};
use super::parser::parse_key;

/// Result of creating a new API key
#[derive(Debug)]
pub struct CreateApiKeyResult {
    /// The stored record (hash only, no secret)
    pub api_key: ApiKey,
    /// The full `<prefix>.<secret>` credential, shown exactly once
    pub credential: String,
}

#[derive(Debug)]
pub struct ApiKeyService {
    repository: Arc<dyn ApiKeyRepository>,
    hasher: Arc<dyn PasswordHasher>,
    generator: ApiKeyGenerator,
}

impl ApiKeyService {
    pub fn new(repository: Arc<dyn ApiKeyRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            repository,
            hasher,
            generator: ApiKeyGenerator::new(),
        }
    }

    /// Create a new key. The plaintext secret exists only in the returned
    /// credential string.
    pub async fn create(&self, name: &str) -> Result<CreateApiKeyResult, DomainError> {
        let generated = self.generator.generate();
        self.create_from(name, &generated).await
    }

    /// Create a key from known material (deterministic keys for tests)
    pub async fn create_from(
        &self,
        name: &str,
        generated: &GeneratedKey,
    ) -> Result<CreateApiKeyResult, DomainError> {
        let hash = self.hasher.hash(&generated.secret)?;
        let api_key = ApiKey::new(name, &generated.prefix, hash);
        let created = self.repository.create(api_key).await?;

        info!(id = %created.id(), name, "API key created");

        Ok(CreateApiKeyResult {
            api_key: created,
            credential: generated.credential(),
        })
    }

    /// Verify a presented credential and return the matching record.
    ///
    /// Failure modes map to distinct messages: a structurally invalid key
    /// is "Malformed API key"; a well-formed key with no matching
    /// candidate is "Invalid API key". The missing-header case belongs to
    /// the HTTP layer.
    pub async fn verify(&self, raw: &str) -> Result<ApiKey, DomainError> {
        let parsed =
            parse_key(raw).map_err(|_| DomainError::credential("Malformed API key"))?;

        debug!(prefix = parsed.prefix, "verifying API key");

        let candidates = self.repository.list_by_prefix(parsed.prefix).await?;

        // Rotation can leave several records on one prefix; try each.
        for candidate in &candidates {
            if self.hasher.verify(parsed.secret, candidate.secret_hash()) {
                return Ok(candidate.clone());
            }
        }

        Err(DomainError::credential("Invalid API key"))
    }

    pub async fn list(&self) -> Result<Vec<ApiKey>, DomainError> {
        self.repository.list().await
    }

    /// Revoke a key. Deletion is the only revocation mechanism.
    pub async fn revoke(&self, id: uuid::Uuid) -> Result<bool, DomainError> {
        info!(%id, "revoking API key");
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::api_key::InMemoryApiKeyRepository;
    use crate::infrastructure::user::Argon2Hasher;

    fn create_service() -> ApiKeyService {
        ApiKeyService::new(
            Arc::new(InMemoryApiKeyRepository::new()),
            Arc::new(Argon2Hasher::new()),
        )
    }

    fn known_key() -> GeneratedKey {
        GeneratedKey {
            prefix: "eNR3fmpc".to_string(),
            secret: "NwaQnP8j1vTB1lCpzNtIru4lPn0FhF2I".to_string(),
        }
    }

    #[tokio::test]
    async fn test_stored_key_verifies() {
        let service = create_service();
        service.create_from("ci", &known_key()).await.unwrap();

        let verified = service
            .verify("eNR3fmpc.NwaQnP8j1vTB1lCpzNtIru4lPn0FhF2I")
            .await
            .unwrap();
        assert_eq!(verified.prefix(), "eNR3fmpc");
    }

    #[tokio::test]
    async fn test_wrong_secret_fails() {
        let service = create_service();
        service.create_from("ci", &known_key()).await.unwrap();

        let err = service.verify("eNR3fmpc.wrongsecret").await.unwrap_err();
        assert_eq!(err.to_string(), "Credential error: Invalid API key");
    }

    #[tokio::test]
    async fn test_single_character_mutation_fails() {
        let service = create_service();
        service.create_from("ci", &known_key()).await.unwrap();

        // Flip the final character of the secret.
        let mutated = "eNR3fmpc.NwaQnP8j1vTB1lCpzNtIru4lPn0FhF2J";
        assert!(service.verify(mutated).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_key_rejected_before_lookup() {
        let service = create_service();

        let err = service.verify("noDotHere").await.unwrap_err();
        assert_eq!(err.to_string(), "Credential error: Malformed API key");
    }

    #[tokio::test]
    async fn test_rotation_tries_every_candidate() {
        let service = create_service();

        // Two live keys share a prefix; either secret must verify.
        let old = GeneratedKey {
            prefix: "eNR3fmpc".to_string(),
            secret: "oldSecretoldSecretoldSecretoldSe".to_string(),
        };
        service.create_from("old", &old).await.unwrap();
        service.create_from("new", &known_key()).await.unwrap();

        assert!(service.verify(&old.credential()).await.is_ok());
        assert!(service.verify(&known_key().credential()).await.is_ok());
    }

    #[tokio::test]
    async fn test_revoked_key_no_longer_verifies() {
        let service = create_service();
        let created = service.create_from("ci", &known_key()).await.unwrap();

        assert!(service.revoke(created.api_key.id()).await.unwrap());
        assert!(service.verify(&created.credential).await.is_err());
    }
}
