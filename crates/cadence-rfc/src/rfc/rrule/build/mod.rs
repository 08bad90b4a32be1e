//! Recurrence rule rendering.
//!
//! - Serializer: canonical `KEY=VALUE;...` text
//! - Phrase: English description such as "Every 2 weeks on Monday and Friday"

mod phrase;
mod serializer;

pub use phrase::human_phrase;
pub use serializer::serialize;
