mod api_error;
mod product;

pub use api_error::*;
pub use product::*;
