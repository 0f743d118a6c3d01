//! Domain layer - Core content entities and logic
//!
//! This module contains the content model and the pure rules that
//! operate on it (slug parsing, feed navigation), independent of
//! storage and transport concerns.

pub mod item;
pub mod navigation;
pub mod slug;

pub use item::{Item, ItemDetail, ItemId, ItemStatus};
pub use navigation::{item_link, NavigationLinks};
pub use slug::id_from_slug;
