pub mod about;
pub mod chat_area;
pub mod event_cards;
pub mod faq_pills;
pub mod input_bar;
pub mod welcome;
