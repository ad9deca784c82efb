pub mod chat_handler;
pub mod chat_pdf_handler;
pub mod pdf_handler;
pub mod sse_handler;

pub use chat_handler::ChatHandler;
pub use chat_pdf_handler::ChatPdfHandler;
pub use pdf_handler::PdfHandler;
