pub mod commands;
pub mod error;
pub mod events;
pub mod types;

pub use commands::TransportCommand;
pub use error::TransportError;
pub use events::TransportEvent;
pub use types::{Author, ChatMessage, ChatReply, EventRecord, TimelineEntry};
