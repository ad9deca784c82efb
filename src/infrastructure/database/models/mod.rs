pub mod chat_model;
pub mod chat_pdf_model;
pub mod message_model;

pub use chat_model::*;
pub use chat_pdf_model::*;
pub use message_model::*;
