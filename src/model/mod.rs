//! Plain data types shared by every layer: orders, menu items, users and
//! community content.

pub mod community;
pub mod menu;
pub mod order;
pub mod user;

pub use community::*;
pub use menu::*;
pub use order::*;
pub use user::*;
