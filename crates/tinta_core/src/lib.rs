//! Tinta Core
//!
//! Foundational primitives shared by the Tinta crates:
//!
//! - **Colors**: byte-channel RGBA values parsed from `#RRGGBB` literals
//! - **Notification**: ordered, synchronous listener lists
//!
//! # Example
//!
//! ```rust
//! use tinta_core::{Color, Notifier};
//!
//! let primary: Color = "#3B82F6".parse().unwrap();
//! assert_eq!(primary, Color::from_hex(0x3B82F6));
//!
//! let mut notifier = Notifier::<Color>::new();
//! let id = notifier.subscribe(|c| println!("primary is now {c}"));
//! notifier.notify(&primary);
//! notifier.unsubscribe(id);
//! ```

pub mod color;
pub mod notify;

pub use color::{Color, ParseColorError};
pub use notify::{Listener, Notifier, SubscriptionId};
