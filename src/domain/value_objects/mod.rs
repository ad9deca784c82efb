pub mod message_part;
pub mod message_role;
pub mod source;
pub mod visibility;

pub use message_part::MessagePart;
pub use message_role::MessageRole;
pub use source::Source;
pub use visibility::Visibility;
