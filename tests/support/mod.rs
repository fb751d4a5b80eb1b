#![allow(dead_code)]

use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use product_catalog::{
    ProductClient,
    config::ApiConfig,
    models::{Product, ProductInput},
};
use rust_decimal::Decimal;
use serde_json::json;

/// In-memory stand-in for the catalog backend, served over real HTTP.
pub struct FakeBackend {
    pub base_url: String,
    state: BackendState,
}

#[derive(Clone, Default)]
struct BackendState {
    store: Arc<Mutex<Store>>,
    requests: Arc<AtomicUsize>,
}

#[derive(Default)]
struct Store {
    products: Vec<Product>,
    last_id: i32,
}

impl BackendState {
    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().expect("store lock")
    }
}

impl Store {
    fn insert(&mut self, input: ProductInput) -> Product {
        self.last_id += 1;
        let product = Product {
            id: self.last_id,
            name: input.name,
            price: input.price,
            description: input.description,
            image_url: None,
        };
        self.products.push(product.clone());
        product
    }
}

impl FakeBackend {
    pub async fn start() -> Self {
        let state = BackendState::default();

        let router = Router::new()
            .route("/products", get(list_products).post(create_product))
            .route(
                "/products/{id}",
                get(get_product).patch(update_product).delete(delete_product),
            )
            .layer(middleware::from_fn_with_state(state.clone(), count_requests))
            .with_state(state.clone());

        let base_url = serve(router).await;
        Self { base_url, state }
    }

    pub fn client(&self) -> ProductClient {
        client_for(&self.base_url)
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    /// Inserts a record directly, without going through HTTP.
    pub fn seed(&self, name: &str, price: Decimal, description: &str) -> Product {
        self.state.store().insert(ProductInput {
            name: name.to_string(),
            price,
            description: description.to_string(),
        })
    }
}

pub fn client_for(base_url: &str) -> ProductClient {
    ProductClient::new(&ApiConfig::new(base_url).expect("valid base url"))
}

pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake backend");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fake backend");
    });

    format!("http://{}", addr)
}

/// An address nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

async fn count_requests(State(state): State<BackendState>, request: Request, next: Next) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

async fn list_products(State(state): State<BackendState>) -> Json<Vec<Product>> {
    Json(state.store().products.clone())
}

async fn get_product(State(state): State<BackendState>, Path(id): Path<i32>) -> Response {
    let found = state.store().products.iter().find(|p| p.id == id).cloned();

    match found {
        Some(product) => Json(product).into_response(),
        None => not_found(),
    }
}

async fn create_product(
    State(state): State<BackendState>,
    Json(input): Json<ProductInput>,
) -> Response {
    if let Err(rejection) = validate(&input) {
        return rejection;
    }

    let product = state.store().insert(input);
    (StatusCode::CREATED, Json(product)).into_response()
}

async fn update_product(
    State(state): State<BackendState>,
    Path(id): Path<i32>,
    Json(input): Json<ProductInput>,
) -> Response {
    if let Err(rejection) = validate(&input) {
        return rejection;
    }

    let mut store = state.store();
    let Some(product) = store.products.iter_mut().find(|p| p.id == id) else {
        return not_found();
    };

    product.name = input.name;
    product.price = input.price;
    product.description = input.description;

    Json(product.clone()).into_response()
}

async fn delete_product(State(state): State<BackendState>, Path(id): Path<i32>) -> Response {
    let mut store = state.store();
    let before = store.products.len();
    store.products.retain(|p| p.id != id);

    if store.products.len() == before {
        return not_found();
    }

    StatusCode::OK.into_response()
}

fn validate(input: &ProductInput) -> Result<(), Response> {
    let mut messages = Vec::new();

    if input.name.trim().is_empty() {
        messages.push("name should not be empty");
    }
    if input.price < Decimal::ZERO {
        messages.push("price must not be less than 0");
    }

    match messages.as_slice() {
        [] => Ok(()),
        [single] => Err(bad_request(json!(single))),
        many => Err(bad_request(json!(many))),
    }
}

fn bad_request(message: serde_json::Value) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "message": message,
            "error": "Bad Request",
            "statusCode": 400,
        })),
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "message": "Product not found",
            "statusCode": 404,
        })),
    )
        .into_response()
}
