/// Lệnh UI gửi xuống tầng transport.
#[derive(Debug, Clone)]
pub enum TransportCommand {
    /// Text đã trim, không bao giờ rỗng.
    SendMessage(String),
}
