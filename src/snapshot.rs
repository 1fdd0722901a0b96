use crate::item::{merge_or_append, Item};
use crate::value::or_null;
use log::trace;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// An editable copy of a [`KeyedCollection`](crate::KeyedCollection)'s items
///
/// Every mutator edits this snapshot only and returns `&mut Self` so calls
/// can be chained. The snapshot keeps a handle on its collection's backing
/// items so that [`fresh_snapshot`](Self::fresh_snapshot) can re-read them.
///
/// `Clone` copies this snapshot as it stands; use `fresh_snapshot` for a
/// copy of the collection's current state instead.
///
/// # Examples
///
/// ```
/// use keyed_collection::{Item, KeyedCollection};
/// use serde_json::json;
///
/// let collection = KeyedCollection::new(vec![Item::new("name"), Item::new("age")]);
/// let mut form = collection.snapshot();
/// form.set_key_value("name", json!("Ada"))
///     .set_key_item("city", json!({"label": "City"}))
///     .set_all_item_key("disabled", json!(false));
///
/// assert_eq!(form.len(), 3);
/// assert_eq!(form.get_key_value("name"), json!("Ada"));
/// assert_eq!(form.get_key_value("age"), json!(null));
/// ```
#[derive(Clone)]
pub struct Snapshot {
    items: Vec<Item>,
    source: Rc<RefCell<Vec<Item>>>,
}

impl Snapshot {
    pub(crate) fn new(items: Vec<Item>, source: Rc<RefCell<Vec<Item>>>) -> Self {
        Self { items, source }
    }

    /// Sets `value` on every item whose key appears in `values`
    pub fn set_arr_value(&mut self, values: &Map<String, Value>) -> &mut Self {
        for item in &mut self.items {
            if let Some(value) = values.get(item.key()) {
                item.set_value(value.clone());
            }
        }
        self
    }

    /// Maps every key to its value, with falsy and missing values as `null`.
    ///
    /// Keys come out in item order. When keys repeat, the last item's value
    /// wins at the first item's position.
    pub fn get_arr_value(&self) -> Map<String, Value> {
        self.items
            .iter()
            .map(|item| (item.key().to_string(), or_null(item.value())))
            .collect()
    }

    /// The value of the first item with `key`, or `null`
    pub fn get_key_value(&self, key: &str) -> Value {
        self.find(key)
            .and_then(Item::value)
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Sets `value` on the first item with `key`; does nothing if there is none
    pub fn set_key_value(&mut self, key: &str, value: Value) -> &mut Self {
        match self.items.iter_mut().find(|item| item.key() == key) {
            Some(item) => item.set_value(value),
            None => trace!("set_key_value: no item {:?} in snapshot", key),
        }
        self
    }

    /// Merges `partial` into the item with `key`, or appends it with that key
    pub fn set_key_item(&mut self, key: &str, partial: Value) -> &mut Self {
        merge_or_append(&mut self.items, key, &partial);
        self
    }

    /// Appends `item` without checking for an existing key
    pub fn add_key_item(&mut self, item: Item) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Resets every set value to `null`
    pub fn clear_value(&mut self) -> &mut Self {
        for item in &mut self.items {
            if item.value().is_some_and(crate::is_truthy) {
                item.set_value(Value::Null);
            }
        }
        self
    }

    /// Sets `field` to `value` on every item.
    ///
    /// A non-string `value` for the `key` field is ignored.
    pub fn set_all_item_key(&mut self, field: &str, value: Value) -> &mut Self {
        for item in &mut self.items {
            if !item.set(field, value.clone()) {
                trace!("set_all_item_key: refusing non-string key on {:?}", item.key());
                break;
            }
        }
        self
    }

    /// Takes a new snapshot of the originating collection's current items.
    ///
    /// Edits made to this snapshot are not carried over.
    #[doc(alias = "clone")]
    pub fn fresh_snapshot(&self) -> Snapshot {
        Snapshot::new(self.source.borrow().clone(), Rc::clone(&self.source))
    }

    /// Returns a plain copy of this snapshot's items
    pub fn get_all(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Consumes the snapshot, returning its items
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Iterates over the items in order
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Returns the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the snapshot holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders the items as a JSON array
    pub fn to_json(&self) -> Value {
        Value::Array(self.items.iter().cloned().map(Value::from).collect())
    }

    fn find(&self, key: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.key() == key)
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot").field("items", &self.items).finish()
    }
}
