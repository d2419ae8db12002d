//! Catalog API client
//!
//! Thin reqwest wrapper around the two catalog endpoints the importer uses:
//! adding a metadata record and advancing a record's workflow state. Auth is
//! a bearer token taken from the environment so the key never appears on a
//! command line.

use crate::app::services::schema_builder::MetadataDocument;
use crate::config::PublisherConfig;
use crate::constants::{CAPTURE_METHOD, CATALOG_API_KEY_ENV, DATA_AGREEMENT_URL};
use crate::{Error, Result};
use serde_json::json;
use tracing::{debug, info};

use super::outcome::PublishOutcome;

/// Client for the catalog metadata API
#[derive(Debug, Clone)]
pub struct CatalogPublisher {
    client: reqwest::Client,
    config: PublisherConfig,
    api_key: String,
}

impl CatalogPublisher {
    /// Create a publisher, reading the API key from the environment
    pub fn new(config: PublisherConfig) -> Result<Self> {
        let api_key = std::env::var(CATALOG_API_KEY_ENV).map_err(|_| {
            Error::configuration(format!(
                "Missing catalog API key: set the {} environment variable",
                CATALOG_API_KEY_ENV
            ))
        })?;

        Self::with_api_key(config, api_key)
    }

    /// Create a publisher with an explicit API key
    pub fn with_api_key(config: PublisherConfig, api_key: impl Into<String>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            client: reqwest::Client::new(),
            config,
            api_key: api_key.into(),
        })
    }

    /// Get the publisher configuration in use
    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    /// Add one metadata record to the catalog.
    ///
    /// Returns the catalog's outcome for the document; a non-success HTTP
    /// status is an error carrying the response body. The caller decides
    /// whether to continue the batch.
    pub async fn add_record(&self, document: &MetadataDocument) -> Result<PublishOutcome> {
        let url = self.metadata_url();
        let envelope = self.record_envelope(document)?;

        debug!(
            "Publishing record id {} to {}",
            document.file_identifier, url
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| Error::publish(format!("Request to {} failed", url), Some(e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::publish(
                format!("Catalog API error ({}): {}", status, body),
                None,
            ));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::publish("Cannot parse catalog response body", Some(e)))?;

        let outcome = PublishOutcome::from_response(&body);
        info!(
            "Added record id {} (pid {})",
            document.file_identifier,
            outcome.pid.as_deref().unwrap_or("unassigned")
        );

        Ok(outcome)
    }

    /// Advance the workflow state of a published record
    pub async fn set_workflow_state(&self, file_identifier: &str, state: &str) -> Result<()> {
        let url = format!("{}workflow/{}", self.metadata_url(), file_identifier);

        debug!("Setting workflow state '{}' for {}", state, url);

        let response = self
            .client
            .post(&url)
            .query(&[("state", state)])
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| Error::publish(format!("Request to {} failed", url), Some(e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::publish(
                format!(
                    "Workflow state change for record id {} failed ({}): {}",
                    file_identifier, status, body
                ),
                None,
            ));
        }

        info!(
            "Workflow state of record id {} set to '{}'",
            file_identifier, state
        );
        Ok(())
    }

    /// Build the add-record endpoint URL
    fn metadata_url(&self) -> String {
        format!(
            "{}/{}/metadata/",
            self.config.base_url.trim_end_matches('/'),
            self.config.organization
        )
    }

    /// Build the JSON envelope wrapping one document
    fn record_envelope(&self, document: &MetadataDocument) -> Result<serde_json::Value> {
        let metadata = serde_json::to_value(document)
            .map_err(|e| Error::publish(format!("Cannot serialize document: {}", e), None))?;

        Ok(json!({
            "collection_key": self.config.collection,
            "schema_key": self.config.schema_key,
            "metadata": metadata,
            "terms_conditions_accepted": "True",
            "data_agreement_accepted": "True",
            "data_agreement_url": DATA_AGREEMENT_URL,
            "capture_method": CAPTURE_METHOD,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::schema_builder::assemble_document;
    use crate::app::services::schema_builder::tests::sample_record;

    fn publisher() -> CatalogPublisher {
        let config = PublisherConfig::default()
            .with_base_url("https://catalog.test/api/")
            .with_routing("dea", "sadco-test", "sans-1878-1");
        CatalogPublisher::with_api_key(config, "test-key").unwrap()
    }

    #[test]
    fn test_metadata_url_normalizes_trailing_slash() {
        assert_eq!(
            publisher().metadata_url(),
            "https://catalog.test/api/dea/metadata/"
        );
    }

    #[test]
    fn test_record_envelope_shape() {
        let document = assemble_document(&sample_record(), "+02:00").unwrap();
        let envelope = publisher().record_envelope(&document).unwrap();

        assert_eq!(envelope["collection_key"], "sadco-test");
        assert_eq!(envelope["schema_key"], "sans-1878-1");
        assert_eq!(envelope["terms_conditions_accepted"], "True");
        assert_eq!(envelope["capture_method"], "harvester");
        assert_eq!(envelope["metadata"]["fileIdentifier"], "41007");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PublisherConfig::default().with_base_url("");
        assert!(CatalogPublisher::with_api_key(config, "key").is_err());
    }
}
