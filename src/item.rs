use crate::error::CollectionError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the identifying key of an item
pub const KEY_FIELD: &str = "key";
/// Field read and written by the value-oriented helpers
pub const VALUE_FIELD: &str = "value";
/// Conventional display field
pub const LABEL_FIELD: &str = "label";

/// A single record: an open map of JSON fields with a mandatory string `key`.
///
/// Every field other than `key` is opaque payload and is carried through
/// merges and copies untouched. An `Item` cannot exist without a string
/// `key`; the constructors and [`Item::set`] refuse anything that would
/// break that.
///
/// # Examples
///
/// ```
/// use keyed_collection::Item;
/// use serde_json::json;
///
/// let item = Item::with_fields("email", json!({"label": "E-mail", "value": "a@b.c"}));
/// assert_eq!(item.key(), "email");
/// assert_eq!(item.label(), Some("E-mail"));
/// assert_eq!(item.value(), Some(&json!("a@b.c")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Item {
    fields: Map<String, Value>,
}

impl Item {
    /// Creates an item carrying only its key
    pub fn new(key: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(KEY_FIELD.to_string(), Value::String(key.into()));
        Self { fields }
    }

    /// Creates an item from a partial field set, forcing `key`.
    ///
    /// A `key` inside `partial` is overridden. If `partial` is not an
    /// object it contributes no fields.
    pub fn with_fields(key: impl Into<String>, partial: Value) -> Self {
        let mut fields = match partial {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        fields.insert(KEY_FIELD.to_string(), Value::String(key.into()));
        Self { fields }
    }

    /// Wraps an existing field map.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::InvalidArgument` if `key` is missing or not a string.
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, CollectionError> {
        match fields.get(KEY_FIELD) {
            Some(Value::String(_)) => Ok(Self { fields }),
            Some(other) => Err(CollectionError::InvalidArgument(format!(
                "item key must be a string, got {}",
                other
            ))),
            None => Err(CollectionError::InvalidArgument(
                "item is missing a key".to_string(),
            )),
        }
    }

    /// The item's key
    pub fn key(&self) -> &str {
        self.fields
            .get(KEY_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The raw `value` field, if present
    pub fn value(&self) -> Option<&Value> {
        self.fields.get(VALUE_FIELD)
    }

    /// The `label` field, if present and a string
    pub fn label(&self) -> Option<&str> {
        self.fields.get(LABEL_FIELD).and_then(Value::as_str)
    }

    /// Reads any field by name, `key` included
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Sets an arbitrary field.
    ///
    /// Setting `key` to anything but a string is refused and leaves the item
    /// unchanged. Returns whether the write happened.
    pub fn set(&mut self, field: &str, value: Value) -> bool {
        if field == KEY_FIELD && !value.is_string() {
            return false;
        }
        self.fields.insert(field.to_string(), value);
        true
    }

    /// Sets the `value` field, adding it if missing
    pub fn set_value(&mut self, value: Value) {
        self.fields.insert(VALUE_FIELD.to_string(), value);
    }

    /// Overlays the fields of `partial` onto this item, keeping the current key.
    ///
    /// Existing fields not named in `partial` survive. A non-object
    /// `partial` changes nothing.
    pub fn merge(&mut self, partial: &Value) {
        let Value::Object(map) = partial else {
            return;
        };
        for (field, value) in map {
            if field != KEY_FIELD {
                self.fields.insert(field.clone(), value.clone());
            }
        }
    }

    /// All fields in insertion order, `key` included
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Unwraps the item into its field map
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl TryFrom<Map<String, Value>> for Item {
    type Error = CollectionError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}

impl TryFrom<Value> for Item {
    type Error = CollectionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Self::from_fields(fields),
            other => Err(CollectionError::InvalidArgument(format!(
                "item must be an object, got {}",
                other
            ))),
        }
    }
}

impl From<Item> for Map<String, Value> {
    fn from(item: Item) -> Self {
        item.fields
    }
}

impl From<Item> for Value {
    fn from(item: Item) -> Self {
        Value::Object(item.fields)
    }
}

/// Replaces the first item matching `key` with its merge against `partial`,
/// or appends a new item built from `partial`. `key` always wins.
pub(crate) fn merge_or_append(items: &mut Vec<Item>, key: &str, partial: &Value) {
    match items.iter_mut().find(|item| item.key() == key) {
        Some(existing) => existing.merge(partial),
        None => items.push(Item::with_fields(key, partial.clone())),
    }
}
