use crate::error::CollectionError;
use crate::item::{merge_or_append, Item};
use crate::options::{ChangeCallback, CollectionOptions};
use crate::snapshot::Snapshot;
use crate::value::non_empty_key;
use log::{debug, trace};
use serde_json::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// An ordered, key-indexed collection of [`Item`]s with copy-isolated reads
///
/// The backing items are only ever changed by [`change_data`](Self::change_data)
/// and the `add_*` family, which all go through find-by-key, merge-or-append,
/// so the backing sequence never gains a duplicate key. Every read hands out
/// an owned copy; nothing outside the collection can reach the backing items.
///
/// # Examples
///
/// ```
/// use keyed_collection::{Item, KeyedCollection};
/// use serde_json::json;
///
/// let collection = KeyedCollection::new(vec![
///     Item::with_fields("a", json!({"value": 1})),
///     Item::with_fields("b", json!({"value": 2})),
/// ]);
///
/// let edited = collection.snapshot().set_key_value("a", json!(99)).get_arr_value();
/// assert_eq!(edited["a"], json!(99));
///
/// // The collection itself is untouched
/// assert_eq!(collection.snapshot().get_key_value("a"), json!(1));
/// ```
pub struct KeyedCollection {
    items: Rc<RefCell<Vec<Item>>>,
    on_change: Option<ChangeCallback>,
}

impl KeyedCollection {
    /// Creates a collection without an observer
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self::with_options(items, CollectionOptions::default())
    }

    /// Creates a collection with the given options
    pub fn with_options(items: impl IntoIterator<Item = Item>, options: CollectionOptions) -> Self {
        let items: Vec<Item> = items.into_iter().collect();
        debug!(
            "creating keyed collection with {} items (observer: {})",
            items.len(),
            options.on_change.is_some()
        );
        Self {
            items: Rc::new(RefCell::new(items)),
            on_change: options.on_change,
        }
    }

    /// Builds a collection from an untyped JSON document.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::InvalidArgument` if `value` is not an array,
    /// or if any element is not an object with a string `key`.
    pub fn from_json(value: Value, options: CollectionOptions) -> Result<Self, CollectionError> {
        let elements = match value {
            Value::Array(elements) => elements,
            other => {
                return Err(CollectionError::InvalidArgument(format!(
                    "items must be an array, got {}",
                    json_kind(&other)
                )))
            }
        };
        let items = elements
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_options(items, options))
    }

    /// Replaces the change observer
    pub fn set_on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&[String]) + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    /// Removes the change observer
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Returns an independent, editable copy of the current items.
    ///
    /// Edits made through the snapshot stay in the snapshot.
    #[doc(alias = "clone")]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.items.borrow().clone(), Rc::clone(&self.items))
    }

    /// Merges `fields` into the item with `key` (appending it if absent) and
    /// notifies the observer with `[key]`.
    ///
    /// `key` always wins over any `key` inside `fields`.
    pub fn change_data(&mut self, key: &str, fields: Value) {
        debug!("change_data: merging item {:?}", key);
        merge_or_append(&mut self.items.borrow_mut(), key, &fields);
        self.notify(&[key.to_string()]);
    }

    /// Merges one item or an array of items into the collection.
    ///
    /// - `null` is a no-op.
    /// - An array merges every element that is an object with a non-empty
    ///   string `key`, skipping the rest, then notifies once with the merged
    ///   keys in first-seen order.
    /// - An object with a non-empty string `key` is merged and notified.
    /// - Anything else changes nothing.
    ///
    /// Returns a copy of the items after the update.
    pub fn add_data(&mut self, input: Value) -> Vec<Item> {
        match &input {
            Value::Null => {}
            Value::Array(elements) => {
                let merged = self.merge_all(elements.iter().filter_map(|element| {
                    let key = non_empty_key(element);
                    if key.is_none() {
                        trace!("add_data: skipping element without a key");
                    }
                    key.map(|key| (key, element))
                }));
                self.notify(&merged);
            }
            other => match non_empty_key(other) {
                Some(key) => {
                    debug!("add_data: merging item {:?}", key);
                    merge_or_append(&mut self.items.borrow_mut(), key, other);
                    self.notify(&[key.to_string()]);
                }
                None => trace!("add_data: ignoring {} without a key", json_kind(other)),
            },
        }
        self.items()
    }

    /// Typed form of [`add_data`](Self::add_data) for a single item
    pub fn add_item(&mut self, item: Item) -> Vec<Item> {
        self.add_data(Value::from(item))
    }

    /// Typed form of [`add_data`](Self::add_data) for a batch; notifies once
    pub fn add_items(&mut self, items: impl IntoIterator<Item = Item>) -> Vec<Item> {
        let elements: Vec<Value> = items.into_iter().map(Value::from).collect();
        self.add_data(Value::Array(elements))
    }

    fn merge_all<'a>(&self, entries: impl Iterator<Item = (&'a str, &'a Value)>) -> Vec<String> {
        let mut merged: Vec<String> = Vec::new();
        let mut items = self.items.borrow_mut();
        for (key, fields) in entries {
            merge_or_append(&mut items, key, fields);
            if !merged.iter().any(|k| k == key) {
                merged.push(key.to_string());
            }
        }
        debug!("add_data: merged {} keys", merged.len());
        merged
    }

    fn notify(&mut self, keys: &[String]) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(keys);
        }
    }

    /// Returns a copy of the backing items
    pub fn items(&self) -> Vec<Item> {
        self.items.borrow().clone()
    }

    /// Returns a copy of the first item with `key`, if any
    pub fn get(&self, key: &str) -> Option<Item> {
        self.items
            .borrow()
            .iter()
            .find(|item| item.key() == key)
            .cloned()
    }

    /// Returns true if an item with `key` exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.items.borrow().iter().any(|item| item.key() == key)
    }

    /// Keys in collection order
    pub fn keys(&self) -> Vec<String> {
        self.items
            .borrow()
            .iter()
            .map(|item| item.key().to_string())
            .collect()
    }

    /// Returns the number of items
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns true if the collection holds no items
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Renders the backing items as a JSON array
    pub fn to_json(&self) -> Value {
        Value::Array(self.items().into_iter().map(Value::from).collect())
    }
}

impl fmt::Debug for KeyedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedCollection")
            .field("items", &self.items.borrow())
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
