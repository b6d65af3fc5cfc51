//! Ordered map for the chess tournament system
//!
//! This crate provides a single generic container, [`OrderedMap`], used as the
//! storage primitive for tournaments, games and player statistics:
//! - Entries are kept in one contiguous buffer, sorted by key at all times
//! - Key ordering is pluggable through the [`KeyOrder`] trait
//! - Growth doubles the buffer and reports allocation failure instead of aborting
//!
//! # Usage
//!
//! ```rust
//! use ordered_map::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.put(3, "three").unwrap();
//! map.put(1, "one").unwrap();
//! map.put(2, "two").unwrap();
//!
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, vec![1, 2, 3]);
//! ```

mod error;
mod map;
mod order;
mod serialization;

pub use error::MapError;
pub use map::*;
pub use order::*;
