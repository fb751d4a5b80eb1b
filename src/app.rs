use std::io::{self, BufRead, Write};

use clap::Subcommand;

use crate::{
    models::{MAX_DESCRIPTION_CHARS, Product},
    services::ProductClient,
    views::{CreateView, DetailView, EditView, ListView, Navigation, Notice, ViewOutcome},
};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every product
    List,
    /// Show one product
    Show { id: i32 },
    /// Create a product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Edit a product; fields left out keep their stored values
    Edit {
        id: i32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a product
    Delete {
        id: i32,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Runs one command against the backend. Returns `false` when the command
/// ended with an error notice.
pub async fn run(client: ProductClient, command: Command) -> bool {
    match command {
        Command::List => {
            let mut view = ListView::new(client);
            let outcome = view.load().await;
            if !outcome.is_error() {
                print_products(view.products());
            }
            report(&outcome)
        }
        Command::Show { id } => {
            let mut view = DetailView::new(client);
            let outcome = view.load(id).await;
            if let Some(product) = view.product() {
                print_product(product);
            }
            report(&outcome)
        }
        Command::Create {
            name,
            price,
            description,
        } => {
            let mut view = CreateView::new(client);
            let form = view.form_mut();
            form.name = name;
            form.price = price;
            form.description = description;
            report(&view.submit().await)
        }
        Command::Edit {
            id,
            name,
            price,
            description,
        } => {
            let mut view = EditView::new(client, id);
            let loaded = view.load().await;
            if loaded.navigation == Navigation::ProductList {
                return report(&loaded);
            }

            let form = view.form_mut();
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(price) = price {
                form.price = price;
            }
            if let Some(description) = description {
                form.description = description;
            }
            tracing::debug!(
                "{} of {} description characters left",
                view.remaining_chars(),
                MAX_DESCRIPTION_CHARS
            );

            report(&view.submit().await)
        }
        Command::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete product #{}?", id)) {
                println!("Cancelled");
                return true;
            }

            let mut view = ListView::new(client);
            let outcome = view.delete(id).await;
            if !outcome.is_error() {
                print_products(view.products());
            }
            report(&outcome)
        }
    }
}

fn report(outcome: &ViewOutcome) -> bool {
    match &outcome.notice {
        Some(notice @ Notice::Success(_)) => println!("{}", notice),
        Some(notice @ Notice::Error(_)) => eprintln!("error: {}", notice),
        None => {}
    }

    !outcome.is_error()
}

fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products yet");
        return;
    }

    for product in products {
        println!("#{:<6} {:<32} {:>12}", product.id, product.name, product.price);
    }
}

fn print_product(product: &Product) {
    println!("#{} {}", product.id, product.name);
    println!("Price: {}", product.price);
    if !product.description.is_empty() {
        println!("{}", product.description);
    }
    if let Some(url) = &product.image_url {
        println!("Image: {}", url);
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
        Err(_) => false,
    }
}
