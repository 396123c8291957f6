//! Educational content: chat keyword rules, FAQ answers and workshop cards.

pub mod chat;
pub mod faq;
pub mod workshops;

pub use chat::{ChatTopic, FALLBACK_ANSWER, answer_for_question, matched_topic};
pub use faq::{FAQ_CHIPS, FaqChip, NO_ANSWER, answer_for_chip};
pub use workshops::{WORKSHOPS, Workshop};
