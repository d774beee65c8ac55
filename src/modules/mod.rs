pub mod archive;
pub mod bookmarks;
pub mod chat;
pub mod navigation;
pub mod relay;
