use crate::{models::Product, services::ProductClient};

use super::{Notice, ViewOutcome};

pub struct ListView {
    client: ProductClient,
    products: Vec<Product>,
}

impl ListView {
    pub fn new(client: ProductClient) -> Self {
        Self {
            client,
            products: Vec::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub async fn load(&mut self) -> ViewOutcome {
        match self.client.list_products().await {
            Ok(products) => {
                self.products = products;
                ViewOutcome::stay()
            }
            Err(e) => {
                tracing::error!("Failed to load products: {}", e);
                self.products.clear();
                ViewOutcome::error(e.notice_text())
            }
        }
    }

    /// Deletes a product, then re-fetches the list once the delete has
    /// completed.
    pub async fn delete(&mut self, id: i32) -> ViewOutcome {
        if let Err(e) = self.client.delete_product(id).await {
            tracing::error!("Failed to delete product {}: {}", id, e);
            return ViewOutcome::error(e.notice_text());
        }

        let refreshed = self.load().await;
        if refreshed.is_error() {
            return refreshed;
        }

        ViewOutcome {
            notice: Some(Notice::Success("Product deleted".to_string())),
            ..refreshed
        }
    }
}
