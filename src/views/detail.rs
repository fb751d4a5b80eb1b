use crate::{models::Product, services::ProductClient};

use super::{Notice, ViewOutcome};

pub struct DetailView {
    client: ProductClient,
    product: Option<Product>,
}

impl DetailView {
    pub fn new(client: ProductClient) -> Self {
        Self {
            client,
            product: None,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// Nothing can be shown without a record, so any failure sends the user
    /// back to the list.
    pub async fn load(&mut self, id: i32) -> ViewOutcome {
        match self.client.get_product(id).await {
            Ok(product) => {
                self.product = Some(product);
                ViewOutcome::stay()
            }
            Err(e) => {
                tracing::error!("Failed to load product {}: {}", id, e);
                self.product = None;
                ViewOutcome::to_list(Notice::Error(e.notice_text()))
            }
        }
    }

    pub async fn delete(&mut self) -> ViewOutcome {
        let Some(id) = self.product.as_ref().map(|p| p.id) else {
            return ViewOutcome::error("No product loaded");
        };

        match self.client.delete_product(id).await {
            Ok(()) => {
                self.product = None;
                ViewOutcome::to_list(Notice::Success("Product deleted".to_string()))
            }
            Err(e) => {
                tracing::error!("Failed to delete product {}: {}", id, e);
                ViewOutcome::error(e.notice_text())
            }
        }
    }
}
