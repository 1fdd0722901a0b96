use keyed_collection::{CollectionError, CollectionOptions, Item, KeyedCollection};
use serde_json::json;

/// Demonstrates using KeyedCollection as the state behind a sign-up form
fn main() -> Result<(), CollectionError> {
    env_logger::init();

    let options = CollectionOptions::new().on_change(|keys| {
        println!("  -> fields changed: {:?}", keys);
    });

    let mut form = KeyedCollection::from_json(
        json!([
            {"key": "username", "label": "Username", "value": ""},
            {"key": "email", "label": "E-mail", "value": ""},
            {"key": "newsletter", "label": "Newsletter", "value": false},
        ]),
        options,
    )?;

    // Draft edits live in a snapshot until the user submits
    let mut draft = form.snapshot();
    draft
        .set_key_value("username", json!("alice"))
        .set_key_value("email", json!("alice@example.com"))
        .set_key_item("referrer", json!({"label": "Referrer"}));

    println!("Draft values: {}", json!(draft.get_arr_value()));
    println!("Stored values: {}", json!(form.snapshot().get_arr_value()));

    // Submitting writes the draft back field by field
    println!("Submitting draft:");
    for item in draft.iter() {
        form.change_data(item.key(), json!({"value": item.value()}));
    }

    // Server pushes extra fields in one batch
    println!("Merging server fields:");
    form.add_items(vec![
        Item::with_fields("plan", json!({"label": "Plan", "value": "free"})),
        Item::with_fields("email", json!({"verified": false})),
    ]);

    println!("Stored form:");
    for item in form.items() {
        println!(
            "  {:<10} {:<12} {}",
            item.key(),
            item.label().unwrap_or("-"),
            item.value().cloned().unwrap_or_default()
        );
    }

    // Reset for the next user
    let blank = form.snapshot().clear_value().get_all();
    println!("Blank form: {}", json!(blank));

    Ok(())
}
