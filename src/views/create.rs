use crate::{models::ProductForm, services::ProductClient};

use super::{Notice, ViewOutcome};

pub struct CreateView {
    client: ProductClient,
    form: ProductForm,
    error: Option<String>,
}

impl CreateView {
    pub fn new(client: ProductClient) -> Self {
        Self {
            client,
            form: ProductForm::default(),
            error: None,
        }
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    /// Inline message from the last failed submit.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn submit(&mut self) -> ViewOutcome {
        self.error = None;

        let result = match self.form.to_input() {
            Ok(input) => self.client.create_product(&input).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(_) => ViewOutcome::to_list(Notice::Success("Product created".to_string())),
            Err(e) => {
                tracing::error!("Failed to create product: {}", e);
                let msg = e.notice_text();
                self.error = Some(msg.clone());
                ViewOutcome::error(msg)
            }
        }
    }
}
