// src/item_tests.rs
#[cfg(test)]
mod tests {
    use crate::item::merge_or_append;
    use crate::value::{non_empty_key, or_null};
    use crate::{is_truthy, CollectionError, Item};
    use serde_json::{json, Map, Value};

    fn keys(items: &[Item]) -> Vec<&str> {
        items.iter().map(Item::key).collect()
    }

    #[test]
    fn test_with_fields_forces_key() {
        let item = Item::with_fields("a", json!({"key": "b", "value": 1}));
        assert_eq!(item.key(), "a");
        assert_eq!(item.value(), Some(&json!(1)));

        // Non-object payloads contribute nothing
        let bare = Item::with_fields("c", json!(42));
        assert_eq!(Value::from(bare), json!({"key": "c"}));
    }

    #[test]
    fn test_from_fields_requires_string_key() {
        let missing = Map::new();
        assert!(matches!(
            Item::from_fields(missing),
            Err(CollectionError::InvalidArgument(_))
        ));

        let numeric = Item::try_from(json!({"key": 7}));
        assert!(matches!(numeric, Err(CollectionError::InvalidArgument(_))));

        let not_object = Item::try_from(json!(["key"]));
        assert!(matches!(not_object, Err(CollectionError::InvalidArgument(_))));

        let ok = Item::try_from(json!({"key": "x", "label": "X"})).unwrap();
        assert_eq!(ok.key(), "x");
        assert_eq!(ok.label(), Some("X"));
    }

    #[test]
    fn test_set_refuses_non_string_key() {
        let mut item = Item::new("a");
        assert!(!item.set("key", json!(1)));
        assert_eq!(item.key(), "a");

        assert!(item.set("key", json!("b")));
        assert_eq!(item.key(), "b");

        assert!(item.set("hidden", json!(true)));
        assert_eq!(item.get("hidden"), Some(&json!(true)));
    }

    #[test]
    fn test_merge_keeps_unmentioned_fields() {
        let mut item = Item::with_fields("a", json!({"label": "A", "value": 1}));
        item.merge(&json!({"value": 2, "key": "zzz", "extra": [1, 2]}));

        assert_eq!(
            Value::from(item),
            json!({"key": "a", "label": "A", "value": 2, "extra": [1, 2]})
        );
    }

    #[test]
    fn test_with_fields_keeps_payload_order() {
        let item = Item::with_fields("k", json!({"zlabel": "Z", "a": 1}));
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"zlabel":"Z","a":1,"key":"k"}"#
        );
    }

    #[test]
    fn test_merge_or_append() {
        let mut items = vec![Item::new("a"), Item::new("b")];

        merge_or_append(&mut items, "b", &json!({"value": 5}));
        assert_eq!(keys(&items), vec!["a", "b"]);
        assert_eq!(items[1].value(), Some(&json!(5)));

        merge_or_append(&mut items, "c", &json!({"key": "other", "a": 1}));
        assert_eq!(keys(&items), vec!["a", "b", "c"]);
        assert_eq!(Value::from(items[2].clone()), json!({"key": "c", "a": 1}));
    }

    #[test]
    fn test_merge_or_append_touches_first_match_only() {
        let mut items = vec![Item::new("a"), Item::new("a")];
        merge_or_append(&mut items, "a", &json!({"value": 1}));

        assert_eq!(items[0].value(), Some(&json!(1)));
        assert_eq!(items[1].value(), None);
    }

    #[test]
    fn test_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&falsy), "{} should be falsy", falsy);
            assert_eq!(or_null(Some(&falsy)), Value::Null);
        }
        for truthy in [json!(true), json!(-1), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{} should be truthy", truthy);
            assert_eq!(or_null(Some(&truthy)), truthy);
        }
        assert_eq!(or_null(None), Value::Null);
    }

    #[test]
    fn test_non_empty_key() {
        assert_eq!(non_empty_key(&json!({"key": "a"})), Some("a"));
        assert_eq!(non_empty_key(&json!({"key": ""})), None);
        assert_eq!(non_empty_key(&json!({"key": 3})), None);
        assert_eq!(non_empty_key(&json!({"value": 1})), None);
        assert_eq!(non_empty_key(&json!("key")), None);
    }

    #[test]
    fn test_serde_round_trip_rejects_keyless() {
        let item: Item = serde_json::from_value(json!({"key": "a", "value": [1]})).unwrap();
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({"key": "a", "value": [1]}));

        let bad: Result<Item, _> = serde_json::from_value(json!({"value": 1}));
        assert!(bad.is_err());
    }
}
