use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::{
    config::ApiConfig,
    error::{AppError, Result},
    models::{ErrorBody, Product, ProductInput},
};

/// Client for the remote `/products` collection.
///
/// Each operation is a single request: no retries, no timeouts, no cache.
/// Failures come back as one [`AppError`] so callers only handle one shape.
#[derive(Debug, Clone)]
pub struct ProductClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProductClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn record_url(&self, id: i32) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let url = self.collection_url();
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            tracing::warn!("Listing products failed with status {}", response.status());
            return Err(AppError::OperationFailed(format!(
                "listing products returned {}",
                response.status()
            )));
        }

        decode(response).await
    }

    pub async fn get_product(&self, id: i32) -> Result<Product> {
        let url = self.record_url(id);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            tracing::warn!("Product {} lookup returned {}", id, response.status());
            return Err(AppError::NotFound(format!("Product {} not found", id)));
        }

        decode(response).await
    }

    pub async fn create_product(&self, input: &ProductInput) -> Result<Product> {
        let url = self.collection_url();
        tracing::debug!("POST {}", url);

        let response = self.http.post(&url).json(input).send().await?;

        if !response.status().is_success() {
            return Err(rejection(response, "failed to save product").await);
        }

        let product: Product = decode(response).await?;
        tracing::info!("Created product {} ({})", product.id, product.name);

        Ok(product)
    }

    pub async fn update_product(&self, id: i32, input: &ProductInput) -> Result<Product> {
        input.check_description_length()?;

        let url = self.record_url(id);
        tracing::debug!("PATCH {}", url);

        let response = self.http.patch(&url).json(input).send().await?;

        if !response.status().is_success() {
            return Err(rejection(response, "failed to update product").await);
        }

        let product: Product = decode(response).await?;
        tracing::info!("Updated product {}", product.id);

        Ok(product)
    }

    pub async fn delete_product(&self, id: i32) -> Result<()> {
        let url = self.record_url(id);
        tracing::debug!("DELETE {}", url);

        let response = self.http.delete(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!("Deleting product {} returned {}", id, status);
            return Err(AppError::OperationFailed(format!(
                "deleting product {} returned {}",
                id, status
            )));
        }

        tracing::info!("Deleted product {}", id);
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::InvalidResponse(e.to_string()))
}

async fn rejection(response: Response, fallback: &str) -> AppError {
    let status = response.status();

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_text)
        .unwrap_or_else(|| fallback.to_string());

    tracing::warn!("Backend rejected product payload ({}): {}", status, message);

    AppError::Validation(message)
}
