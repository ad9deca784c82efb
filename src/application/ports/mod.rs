pub mod auth_provider;
pub mod inference_backend;

pub use auth_provider::{AuthProvider, Session};
pub use inference_backend::{InferenceBackend, InferenceError};
