//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod item_repository;

pub use item_repository::{
    ItemFilter, ItemPage, ItemQuery, ItemRepository, ItemSnapshot, ItemStore, StatusFilter,
};

#[cfg(test)]
pub use item_repository::MockItemRepository;
