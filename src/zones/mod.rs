//! Tile containers: the boneyard, hands, and the layout.
//!
//! Tiles only ever move pool → hand → layout. None of these containers
//! creates or destroys tiles on its own, and every rejected operation leaves
//! its container untouched.

pub mod pool;
pub mod hand;
pub mod layout;

pub use pool::TilePool;
pub use hand::Hand;
pub use layout::{Layout, Side};
