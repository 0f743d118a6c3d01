//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod item;

#[allow(unused_imports)]
pub use item::{ActiveModel as ItemActiveModel, Entity as ItemEntity, Model as ItemModel};
