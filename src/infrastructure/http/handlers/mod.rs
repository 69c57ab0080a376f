//! HTTP Handlers

mod chat;
mod index;
mod ping;
mod video;

pub use chat::*;
pub use index::*;
pub use ping::*;
pub use video::*;
