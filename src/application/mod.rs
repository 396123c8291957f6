pub mod board_state;
pub mod chat_session;

pub use board_state::*;
pub use chat_session::*;
