pub mod event_card;
pub mod markup;
pub mod transcript;

pub use event_card::{EventCard, detail_query, render_event_list};
pub use markup::{icon_glyph, render_message};
pub use transcript::{last_markers, transcript_html, transcript_plain};
