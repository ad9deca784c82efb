pub mod get_chat;
pub mod get_chat_pdfs;
pub mod manage_pdfs;
pub mod send_message;
pub mod update_chat_pdfs;

pub use get_chat::GetChatUseCase;
pub use get_chat_pdfs::GetChatPdfsUseCase;
pub use manage_pdfs::ManagePdfsUseCase;
pub use send_message::SendMessageUseCase;
pub use update_chat_pdfs::UpdateChatPdfsUseCase;
