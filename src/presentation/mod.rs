//! Leptos components, one module per page widget.

pub mod board;
pub mod chat;
pub mod faq;
pub mod nav;
pub mod workshops;

pub use board::MarketBoard;
pub use chat::ChatWidget;
pub use faq::FaqWidget;
pub use nav::{Hero, NavBar};
pub use workshops::WorkshopCarousel;
