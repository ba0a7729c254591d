//! Domain types

mod playlist;
mod post;
mod theme;
mod track;

pub use playlist::Playlist;
pub use post::{CreatePost, Post, PostId};
pub use theme::Theme;
pub use track::Track;
