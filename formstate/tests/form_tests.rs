use formstate::{Error, FormStore, ResyncPolicy, ServerError, SyncOptions, SyncOutcome};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ProductForm {
    name: String,
    price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Pair {
    a: i32,
    b: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CollectionForm {
    name: String,
    channels: Vec<String>,
}

fn pair(a: i32, b: i32) -> Pair {
    Pair { a, b }
}

#[test]
fn new_form_is_pristine() {
    let form = FormStore::new(pair(1, 2));
    assert_eq!(form.data(), &pair(1, 2));
    assert_eq!(form.initial(), &pair(1, 2));
    assert!(!form.has_changed());
    assert!(form.errors().is_empty());
}

#[test]
fn change_preserves_untouched_fields() {
    let mut form = FormStore::new(pair(1, 2));
    form.change("a", 5).unwrap();
    assert_eq!(form.data(), &pair(5, 2));
    assert!(form.has_changed());
}

#[test]
fn change_to_same_value_is_not_an_edit() {
    let mut form = FormStore::new(pair(1, 2));
    form.change("a", 1).unwrap();
    assert!(!form.has_changed());
}

#[test]
fn unknown_field_change_leaves_data_alone() {
    init_tracing();
    let mut form = FormStore::new(pair(1, 2));
    let err = form.change("z", 5).unwrap_err();
    assert!(matches!(err, Error::UnknownField(ref field) if field == "z"));
    assert_eq!(form.data(), &pair(1, 2));
    assert!(!form.has_changed());
}

#[test]
fn wrong_value_type_is_rejected() {
    init_tracing();
    let mut form = FormStore::new(pair(1, 2));
    let err = form.change("a", "not a number").unwrap_err();
    assert!(matches!(err, Error::InvalidValue { ref field, .. } if field == "a"));
    assert_eq!(form.data(), &pair(1, 2));
    assert!(!form.has_changed());
}

#[test]
fn toggle_value_adds_then_removes() {
    let mut form = FormStore::new(CollectionForm {
        name: "Summer".into(),
        channels: vec!["default".into()],
    });
    form.toggle_value("channels", "eu").unwrap();
    assert_eq!(form.data().channels, vec!["default", "eu"]);
    assert!(form.has_changed());

    form.toggle_value("channels", "default").unwrap();
    assert_eq!(form.data().channels, vec!["eu"]);
}

#[test]
fn toggle_value_on_scalar_field_fails() {
    let mut form = FormStore::new(CollectionForm {
        name: "Summer".into(),
        channels: vec![],
    });
    let err = form.toggle_value("name", "x").unwrap_err();
    assert!(matches!(err, Error::NotASequence(ref field) if field == "name"));
    assert!(!form.has_changed());
}

#[test]
fn toggle_value_on_unknown_field_fails() {
    let mut form = FormStore::new(CollectionForm {
        name: "Summer".into(),
        channels: vec![],
    });
    assert!(matches!(
        form.toggle_value("tags", "x"),
        Err(Error::UnknownField(_))
    ));
}

#[test]
fn set_merges_partial_data_without_marking_dirty() {
    let mut form = FormStore::new(pair(1, 2));
    form.set(serde_json::json!({ "b": 7 })).unwrap();
    assert_eq!(form.data(), &pair(1, 7));
    assert!(!form.has_changed());
}

#[test]
fn set_rejects_unknown_keys_and_non_objects() {
    let mut form = FormStore::new(pair(1, 2));
    assert!(matches!(
        form.set(serde_json::json!({ "b": 7, "c": 1 })),
        Err(Error::UnknownField(ref field)) if field == "c"
    ));
    assert!(matches!(form.set(vec![1, 2]), Err(Error::NotAnObject)));
    assert_eq!(form.data(), &pair(1, 2));
}

#[test]
fn trigger_change_marks_dirty() {
    let mut form = FormStore::new(pair(1, 2));
    form.trigger_change();
    assert!(form.has_changed());
    assert_eq!(form.data(), &pair(1, 2));
}

#[test]
fn reset_restores_initial_but_keeps_dirty_flag() {
    let mut form = FormStore::new(pair(1, 2));
    form.change("a", 9).unwrap();
    form.reset();
    assert_eq!(form.data(), &pair(1, 2));
    assert!(form.has_changed());
}

#[test]
fn resync_only_on_changed_upstream() {
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Single {
        a: i32,
    }

    let mut form = FormStore::new(Single { a: 1 });
    form.change("a", 99).unwrap();

    assert_eq!(form.observe(Single { a: 1 }), SyncOutcome::Unchanged);
    assert_eq!(form.data(), &Single { a: 99 });
    assert!(form.has_changed());

    assert_eq!(form.observe(Single { a: 2 }), SyncOutcome::Replaced);
    assert_eq!(form.data(), &Single { a: 2 });
    assert!(!form.has_changed());
}

#[test]
fn prompt_user_policy_keeps_edits_until_accepted() {
    let mut form =
        FormStore::with_options(pair(1, 2), SyncOptions::from(ResyncPolicy::PromptUser));
    form.change("a", 5).unwrap();

    assert_eq!(form.observe(pair(3, 4)), SyncOutcome::Pending);
    assert_eq!(form.data(), &pair(5, 2));
    assert_eq!(form.pending(), Some(&pair(3, 4)));
    assert!(form.has_changed());

    assert!(form.accept_pending());
    assert_eq!(form.data(), &pair(3, 4));
    assert!(!form.has_changed());
}

#[test]
fn discard_pending_keeps_editing() {
    let mut form =
        FormStore::with_options(pair(1, 2), SyncOptions::from(ResyncPolicy::PromptUser));
    form.change("a", 5).unwrap();
    form.observe(pair(3, 4));
    assert!(form.discard_pending());
    assert_eq!(form.data(), &pair(5, 2));
    assert!(form.has_changed());
}

#[test]
fn errors_indexed_by_root_field() {
    let mut form = FormStore::new(ProductForm {
        name: String::new(),
        price: 0,
    });
    form.set_errors(&[
        ServerError::new("price", "too low"),
        ServerError::new("price:min", "ignored"),
        ServerError::new("name", "required"),
    ]);
    assert_eq!(form.errors().get("price"), Some("ignored"));
    assert_eq!(form.errors().get("name"), Some("required"));
    assert_eq!(form.errors().for_path("price"), Some("too low"));
}

#[test]
fn errors_from_mutation_json() {
    let mut form = FormStore::new(pair(1, 2));
    form.set_errors_json(r#"[{"field":"a","message":"bad","code":"INVALID"}]"#)
        .unwrap();
    assert_eq!(form.errors().get("a"), Some("bad"));
    assert!(matches!(form.set_errors_json("{"), Err(Error::Types(_))));
}

#[test]
fn submit_receives_edited_data() {
    let mut form = FormStore::new(ProductForm {
        name: String::new(),
        price: 0,
    });
    form.change("name", "Shoe").unwrap();
    form.change("price", 10).unwrap();

    let submitted = form.submit(|data| data.clone());
    assert_eq!(
        submitted,
        ProductForm {
            name: "Shoe".into(),
            price: 10,
        }
    );
}

fn keep_form() -> FormStore<Pair> {
    FormStore::with_options(pair(1, 2), SyncOptions::from(ResyncPolicy::Keep))
}

#[test]
fn keep_policy_protects_edited_form() {
    let mut form = keep_form();
    form.change("a", 5).unwrap();
    assert_eq!(form.observe(pair(3, 4)), SyncOutcome::Kept);
    assert_eq!(form.data(), &pair(5, 2));
    assert!(form.has_changed());
}

#[test]
fn set_leaves_form_following_upstream() {
    let mut form = keep_form();
    form.set(serde_json::json!({ "b": 7 })).unwrap();
    assert!(!form.has_changed());

    assert_eq!(form.observe(pair(3, 4)), SyncOutcome::Replaced);
    assert_eq!(form.data(), &pair(3, 4));
}

#[test]
fn set_on_dirty_form_keeps_it_dirty() {
    let mut form = keep_form();
    form.change("a", 5).unwrap();
    form.set(serde_json::json!({ "b": 7 })).unwrap();
    assert!(form.has_changed());
    assert_eq!(form.observe(pair(3, 4)), SyncOutcome::Kept);
    assert_eq!(form.data(), &pair(5, 7));
}

#[test]
fn triggered_change_is_protected_from_upstream() {
    let mut form = keep_form();
    form.trigger_change();

    assert_eq!(form.observe(pair(3, 4)), SyncOutcome::Kept);
    assert_eq!(form.data(), &pair(1, 2));
    assert!(form.has_changed());
}

#[test]
fn triggered_change_parks_upstream_under_prompt_user() {
    let mut form =
        FormStore::with_options(pair(1, 2), SyncOptions::from(ResyncPolicy::PromptUser));
    form.trigger_change();
    assert_eq!(form.observe(pair(3, 4)), SyncOutcome::Pending);
    assert_eq!(form.pending(), Some(&pair(3, 4)));
    assert!(form.has_changed());
}

#[test]
fn reset_form_stays_dirty_for_resync() {
    let mut form = keep_form();
    form.change("a", 9).unwrap();
    form.reset();
    assert!(form.has_changed());

    assert_eq!(form.observe(pair(3, 4)), SyncOutcome::Kept);
    assert_eq!(form.data(), &pair(1, 2));
    assert!(form.has_changed());
}

#[test]
fn reset_pristine_form_still_follows_upstream() {
    let mut form = keep_form();
    form.reset();
    assert!(!form.has_changed());
    assert_eq!(form.observe(pair(3, 4)), SyncOutcome::Replaced);
    assert_eq!(form.data(), &pair(3, 4));
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ShippingForm {
    name: String,
    weight: f64,
}

#[test]
fn non_finite_floats_are_reported_as_unrepresentable() {
    init_tracing();
    let mut form = FormStore::new(ShippingForm {
        name: String::new(),
        weight: f64::NAN,
    });

    let err = form.change("name", "Shoe").unwrap_err();
    assert!(matches!(err, Error::UnrepresentableData(_)));
    assert_eq!(form.data().name, "");
    assert!(form.data().weight.is_nan());
    assert!(!form.has_changed());
}

#[test]
fn finite_floats_edit_normally() {
    let mut form = FormStore::new(ShippingForm {
        name: String::new(),
        weight: 1.5,
    });
    form.change("name", "Shoe").unwrap();
    form.change("weight", 2.25).unwrap();
    assert_eq!(
        form.data(),
        &ShippingForm {
            name: "Shoe".into(),
            weight: 2.25,
        }
    );
    assert!(matches!(
        form.change("weight", "heavy"),
        Err(Error::InvalidValue { ref field, .. }) if field == "weight"
    ));
}
