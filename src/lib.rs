//! # keyed-collection
//!
//! An in-memory, ordered collection of key-identified records with
//! copy-isolated reads and a change-notification hook.
//!
//! `keyed-collection` is built for "form-state-like" data: a list of fields,
//! each identified by a unique string `key` and usually carrying a `value`,
//! that the application reads, edits and merges without ever handing out a
//! reference into its own state.
//!
//! ## Key Features
//!
//! - **Copy-isolated**: construction takes ownership, every read returns an
//!   owned copy
//! - **Snapshots**: [`KeyedCollection::snapshot`] gives an editable
//!   [`Snapshot`] with chaining helpers
//! - **Merge-or-append**: persistent writes replace the item with the same key
//!   or append a new one
//! - **Change notification**: an optional observer receives the keys touched by
//!   each persistent write
//! - **Open records**: items are JSON objects, so any payload beside `key` and
//!   `value` rides along in its original field order
//!
//! ## Usage Examples
//!
//! ### Editing a Snapshot
//!
//! ```rust
//! use keyed_collection::{Item, KeyedCollection};
//! use serde_json::json;
//!
//! let collection = KeyedCollection::new(vec![
//!     Item::with_fields("a", json!({"value": 1})),
//!     Item::with_fields("b", json!({"value": 2})),
//! ]);
//!
//! let values = collection
//!     .snapshot()
//!     .set_key_value("a", json!(99))
//!     .get_arr_value();
//! assert_eq!(json!(values), json!({"a": 99, "b": 2}));
//!
//! // The backing collection never saw the edit
//! assert_eq!(json!(collection.snapshot().get_arr_value()), json!({"a": 1, "b": 2}));
//! ```
//!
//! ### Persisting Changes and Observing Them
//!
//! ```rust
//! use keyed_collection::{CollectionOptions, KeyedCollection};
//! use serde_json::json;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! fn main() -> Result<(), keyed_collection::CollectionError> {
//!     let changes = Rc::new(RefCell::new(Vec::new()));
//!     let log = Rc::clone(&changes);
//!     let options = CollectionOptions::new().on_change(move |keys| {
//!         log.borrow_mut().push(keys.to_vec());
//!     });
//!
//!     let mut collection = KeyedCollection::from_json(
//!         json!([{"key": "name", "label": "Name"}]),
//!         options,
//!     )?;
//!
//!     collection.change_data("name", json!({"value": "Ada"}));
//!     collection.add_data(json!([
//!         {"key": "email", "value": "ada@example.com"},
//!         {"label": "no key"},
//!     ]));
//!
//!     assert_eq!(collection.keys(), vec!["name", "email"]);
//!     assert_eq!(
//!         *changes.borrow(),
//!         vec![vec!["name".to_string()], vec!["email".to_string()]]
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use keyed_collection::{CollectionError, CollectionOptions, KeyedCollection};
//! use serde_json::json;
//!
//! match KeyedCollection::from_json(json!({"key": "not-an-array"}), CollectionOptions::default()) {
//!     Ok(_) => println!("built"),
//!     Err(CollectionError::InvalidArgument(reason)) => println!("rejected: {}", reason),
//! }
//! ```

mod collection;
mod error;
mod item;
mod options;
mod snapshot;
mod value;

#[cfg(test)]
mod item_tests;

pub use collection::KeyedCollection;
pub use error::CollectionError;
pub use item::{Item, KEY_FIELD, LABEL_FIELD, VALUE_FIELD};
pub use options::{ChangeCallback, CollectionOptions};
pub use snapshot::Snapshot;
pub use value::is_truthy;
