//! Model fingerprints.
//!
//! A fingerprint is the SHA-256 of the canonical TOML encoding, formatted as
//! `sha256:<lowercase hex>`. The producing and the consuming process can each
//! compute it to confirm that a model crossed the boundary unchanged.

use sha2::{Digest, Sha256};

use super::AppModel;
use crate::constants::FINGERPRINT_PREFIX;
use crate::core::ModelError;

impl AppModel {
    /// Compute the model fingerprint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use app_model::model::AppModel;
    ///
    /// # fn main() -> Result<(), app_model::core::ModelError> {
    /// let mut builder = AppModel::builder();
    /// builder.set_app_artifact("org.acme:app:1.0".parse()?)?;
    /// let model = builder.build()?;
    ///
    /// let fingerprint = model.fingerprint()?;
    /// assert!(fingerprint.starts_with("sha256:"));
    /// assert_eq!(fingerprint.len(), 71);
    /// # Ok(())
    /// # }
    /// ```
    pub fn fingerprint(&self) -> Result<String, ModelError> {
        let encoded = self.to_toml_string()?;
        let mut hasher = Sha256::new();
        hasher.update(encoded.as_bytes());
        Ok(format!("{FINGERPRINT_PREFIX}{}", hex::encode(hasher.finalize())))
    }

    /// Check the model against a previously computed fingerprint.
    pub fn matches_fingerprint(&self, expected: &str) -> Result<bool, ModelError> {
        Ok(self.fingerprint()? == expected)
    }
}
