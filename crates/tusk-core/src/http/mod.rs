pub mod client;
pub mod error;
pub mod target;

pub use client::{HttpClient, HttpResponse};
pub use error::HttpError;
pub use target::Target;
