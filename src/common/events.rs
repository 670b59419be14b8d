use super::error::TransportError;
use super::types::ChatReply;

/// Sự kiện từ tầng transport gửi lên UI.
#[derive(Debug)]
pub enum TransportEvent {
    /// Mỗi `SendMessage` kết thúc bằng đúng một `Settled`, thành công hay lỗi.
    Settled(Result<ChatReply, TransportError>),
}
