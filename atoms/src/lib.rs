#![no_std]

//! `Atoms`: a growable, index-addressable sequence with value search.
//!
//! `Atoms<T>` is an ordered container that permits duplicates. Besides the
//! usual positional operations it offers value-based lookup, replacement and
//! removal with explicit first/last tie-breaking. `AtomsBuilder<T>` wraps the
//! same container in a chainable interface.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `add()`: amortized O(1) with the default strategy
//! - `get()`, `set()`: O(1)
//! - `insert()`, `remove()`, `insert_all()`: O(n) - elements are shifted
//! - `index_of()`, `count()`, `contains()`, `remove_item()`: O(n) - linear scan
//! - `remove_if()`, `remove_all()`, `replace_all()`: O(n) - single pass
//! - `get_range()`, `sub_list()`: O(k) - copies the selected elements
//!
//! ## Growth Strategies
//! - [`GrowthStrategy::Amortized`] (default): capacity doubles on overflow
//!   (at least [`MIN_CAPACITY`]) and halves when less than half is used
//! - [`GrowthStrategy::ExactFit`]: capacity follows the length exactly,
//!   trading throughput for minimal memory overhead
//!
//! Capacity changes are logged at `trace` level through the `log` facade.
//!
//! ## `no_std` Compatibility
//!
//! Enable the optional `std` feature to get `std::error::Error` through
//! `thiserror`:
//! ```toml
//! [dependencies]
//! atoms = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Basic Usage
//!
//! ```
//! # use atoms::{Atoms, AtomsError};
//! let mut atoms = Atoms::new();
//! atoms.add("x");
//! atoms.add("y");
//! atoms.add("x");
//!
//! assert_eq!(atoms.count(&"x"), 2);
//! assert_eq!(atoms.index_of(&"x"), Some(0));
//! assert_eq!(atoms.last_index_of(&"x"), Some(2));
//! assert_eq!(atoms.index_of(&"z"), None);
//!
//! assert_eq!(atoms.remove_all(&"x"), 2);
//! assert_eq!(atoms.as_slice(), &["y"]);
//!
//! assert_eq!(
//!     atoms.get(5),
//!     Err(AtomsError::IndexOutOfBounds { index: 5, length: 1 })
//! );
//! ```
//!
//! # Absent Elements
//!
//! A sequence that may hold "no value" entries stores `Option<T>`. Absent
//! entries compare equal to each other and never to a present value:
//!
//! ```
//! # use atoms::Atoms;
//! let mut atoms = Atoms::from(vec![Some("a"), None, Some("b"), None]);
//!
//! assert_eq!(atoms.count(&None), 2);
//! assert_eq!(atoms.remove_all(&None), 2);
//! assert_eq!(atoms.as_slice(), &[Some("a"), Some("b")]);
//! ```
//!
//! # Copies
//!
//! `get_range()`, `sub_list()` and `clone()` allocate independent buffers:
//!
//! ```
//! # use atoms::Atoms;
//! let atoms = Atoms::from([1, 2, 3, 4, 5]);
//! let mut middle = atoms.get_range(1, 3).unwrap();
//! middle.add(6);
//!
//! assert_eq!(middle.as_slice(), &[2, 3, 4, 6]);
//! assert_eq!(atoms.as_slice(), &[1, 2, 3, 4, 5]);
//! ```
//!
//! # Fluent Interface
//!
//! ```
//! # use atoms::AtomsBuilder;
//! let mut builder = AtomsBuilder::new();
//! builder.add(1).add(2).add(1).replace_first(&1, 7).remove_last();
//!
//! assert_eq!(builder.len(), 2);
//! assert!(builder.contains(&7));
//! assert_eq!(builder.build().as_slice(), &[7, 2]);
//! ```

extern crate alloc;

mod atoms;
mod builder;
mod error;
mod growth;
mod iter;

// Re-export public types and traits
pub use crate::atoms::Atoms;
pub use builder::AtomsBuilder;
pub use error::AtomsError;
pub use growth::{GrowthStrategy, MIN_CAPACITY};
pub use iter::{AtomsIntoIter, AtomsIter, AtomsIterMut, AtomsLines};
