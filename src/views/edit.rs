use crate::{
    models::{MAX_DESCRIPTION_CHARS, ProductForm, description_chars},
    services::ProductClient,
};

use super::{Notice, ViewOutcome};

pub struct EditView {
    client: ProductClient,
    id: i32,
    form: ProductForm,
    error: Option<String>,
}

impl EditView {
    pub fn new(client: ProductClient, id: i32) -> Self {
        Self {
            client,
            id,
            form: ProductForm::default(),
            error: None,
        }
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn remaining_chars(&self) -> usize {
        MAX_DESCRIPTION_CHARS.saturating_sub(description_chars(&self.form.description))
    }

    /// Pre-fills the form from the stored record.
    pub async fn load(&mut self) -> ViewOutcome {
        match self.client.get_product(self.id).await {
            Ok(product) => {
                self.form = ProductForm::from(&product);
                ViewOutcome::stay()
            }
            Err(e) => {
                tracing::error!("Failed to load product {} for editing: {}", self.id, e);
                ViewOutcome::to_list(Notice::Error(e.notice_text()))
            }
        }
    }

    pub async fn submit(&mut self) -> ViewOutcome {
        self.error = None;

        let result = match self.form.to_input() {
            Ok(input) => self.client.update_product(self.id, &input).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(_) => ViewOutcome::to_list(Notice::Success("Product updated".to_string())),
            Err(e) => {
                tracing::error!("Failed to update product {}: {}", self.id, e);
                let msg = e.notice_text();
                self.error = Some(msg.clone());
                ViewOutcome::error(msg)
            }
        }
    }
}
