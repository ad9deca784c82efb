pub mod chat;
pub mod chat_pdf_link;
pub mod message;

pub use chat::Chat;
pub use chat_pdf_link::ChatPdfLink;
pub use message::Message;
