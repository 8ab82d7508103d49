//! # Restaurant Queue
//!
//! The in-memory back end behind a three-platform restaurant demo: QR table
//! ordering, a customer mobile app and a staff dashboard. All three share one
//! order queue, one coin wallet and one community feed.
//!
//! ## 🏗️ Design
//!
//! ### One owner per store
//! The order queue, the wallet and the community feed are each owned by a
//! single Tokio task ([`framework::Actor`]). Commands are processed one at a
//! time, so the stores need no locks. Every screen reaches a store through a cloned
//! client ([`clients::OrderQueueClient`], [`clients::WalletClient`],
//! [`clients::CommunityClient`]); there is no global state.
//!
//! ### Skipping the queue
//! A skip swaps an order with the one directly ahead, so repeated skips
//! walk it toward the front one slot per call. The customer-facing paid skip
//! charges coins through the wallet from inside the queue actor, so the
//! charge and the swap apply together or not at all.
//!
//! ### Explicit status machine
//! [`OrderStatus`](model::OrderStatus) only steps forward:
//! `Pending -> Cooking -> Ready -> Completed`. Anything else is an
//! [`OrderError`](queue_actor::OrderError), never a silent overwrite.
//!
//! ### Events instead of timers
//! The queue broadcasts a [`QueueEvent`](queue_actor::QueueEvent) after every
//! change. The [`kitchen`] simulator listens and advances new orders.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] - generic mailbox actor, handle, client trait and mocks
//! - [`queue_actor`] / [`wallet_actor`] / [`community_actor`] - the stores and their actors
//! - [`clients`] - typed APIs over the actor handles
//! - [`model`] - orders, menu items, users, posts and reviews
//! - [`catalog`] - menu and builder options, from `fixtures/catalog.json`
//! - [`cart`] - cart, manual dish builder, cooking game
//! - [`dashboard`] - staff view: filter, sort, counts, actions, review summary
//! - [`platform`] - screen state for each front end
//! - [`kitchen`] - simulated kitchen staff
//! - [`config`] / [`seed`] / [`lifecycle`] - configuration, starter data, wiring and shutdown
//!
//! ## 🚀 Quick Start
//!
//! ```rust,ignore
//! let mut system = RestaurantSystem::new(RestaurantConfig::from_env()?)?;
//! system.start_kitchen().await?;
//!
//! let mut cart = Cart::new();
//! cart.add_menu_item(pad_thai, 2)?;
//! let order = cart.checkout(OrderId::from("order-100"), Some(5), OrderType::Manual, None, Utc::now())?;
//! let queue_number = system.queue_client.add_order(order).await?;
//!
//! system.shutdown().await?;
//! ```

pub mod cart;
pub mod catalog;
pub mod clients;
pub mod community_actor;
pub mod config;
pub mod dashboard;
pub mod framework;
pub mod kitchen;
pub mod lifecycle;
pub mod model;
pub mod platform;
pub mod queue_actor;
pub mod seed;
pub mod wallet_actor;

pub use config::RestaurantConfig;
pub use lifecycle::{setup_tracing, RestaurantSystem, SystemError};
