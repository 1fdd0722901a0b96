use std::fmt;

/// Observer invoked with the keys touched by a persistent mutation
pub type ChangeCallback = Box<dyn FnMut(&[String])>;

/// Construction-time configuration for a [`KeyedCollection`](crate::KeyedCollection)
///
/// # Examples
///
/// ```
/// use keyed_collection::{CollectionOptions, KeyedCollection, Item};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let options = CollectionOptions::new().on_change(move |keys| {
///     sink.borrow_mut().extend_from_slice(keys);
/// });
///
/// let mut collection = KeyedCollection::with_options(vec![Item::new("name")], options);
/// collection.change_data("name", serde_json::json!({"value": "Ada"}));
/// assert_eq!(*seen.borrow(), vec!["name".to_string()]);
/// ```
#[derive(Default)]
pub struct CollectionOptions {
    pub(crate) on_change: Option<ChangeCallback>,
}

impl CollectionOptions {
    /// Creates options with no observer
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the change observer, replacing any previous one
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&[String]) + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for CollectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionOptions")
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
