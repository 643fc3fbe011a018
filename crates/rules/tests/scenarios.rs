//! End-to-end scenarios: user registration schema and access specifications.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use nebula_rules::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

type Error = &'static str;

fn name() -> Value<String, Error> {
    value(|v: &Json| match v.as_str() {
        Some(s) if !s.is_empty() => Ok(s.to_owned()),
        _ => Err("EMPTY_NAME"),
    })
    .with_doc("display name")
}

fn age() -> Value<i64, Error> {
    value(|v: &Json| match v.as_i64() {
        Some(n) if n >= 0 => Ok(n),
        _ => Err("INVALID_AGE"),
    })
}

fn user_schema() -> Schema<Error> {
    schema(fields! {
        "name" => name(),
        "age" => age(),
    })
    .unwrap()
}

// ============================================================================
// SCHEMA
// ============================================================================

#[test]
fn all_mode_reports_every_failing_field() {
    let errors = user_schema()
        .validate(&json!({ "name": "", "age": -5 }))
        .unwrap_err();

    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({ "name": "EMPTY_NAME", "age": "INVALID_AGE" })
    );
}

#[test]
fn strict_mode_reports_only_first_failing_field() {
    let errors = user_schema()
        .validate_with(&json!({ "name": "", "age": -5 }), SchemaMode::Strict)
        .unwrap_err();

    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({ "name": "EMPTY_NAME" })
    );
}

#[test]
fn successful_validation_returns_output_by_field() {
    let output = user_schema()
        .validate(&json!({ "name": "alice", "age": 30, "extra": true }))
        .unwrap();

    assert_eq!(
        output.into_iter().collect::<Vec<_>>(),
        vec![
            ("name".to_owned(), json!("alice")),
            ("age".to_owned(), json!(30)),
        ]
    );
}

fn spy(calls: &Arc<AtomicUsize>, verdict: Result<i64, Error>) -> Value<i64, Error> {
    let calls = Arc::clone(calls);
    value(move |_: &Json| {
        calls.fetch_add(1, Ordering::SeqCst);
        verdict
    })
}

#[test]
fn all_mode_evaluates_each_field_exactly_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let schema = Schema::builder()
        .field("a", spy(&calls, Err("A")))
        .field("b", spy(&calls, Ok(1)))
        .field("c", spy(&calls, Err("C")))
        .build()
        .unwrap();

    let errors = schema.validate(&json!({})).unwrap_err();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["a", "c"]);
}

#[test]
fn strict_mode_never_invokes_fields_after_first_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let after = Arc::new(AtomicUsize::new(0));
    let schema = Schema::builder()
        .field("a", spy(&calls, Ok(1)))
        .field("b", spy(&calls, Err("B")))
        .field("c", spy(&after, Ok(3)))
        .build()
        .unwrap();

    let errors = schema
        .validate_with(&json!({}), SchemaMode::Strict)
        .unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(after.load(Ordering::SeqCst), 0);
}

#[test]
fn schema_mode_comes_from_config() {
    #[derive(serde::Deserialize)]
    struct FormConfig {
        #[serde(default)]
        mode: SchemaMode,
    }

    let strict: FormConfig = serde_json::from_value(json!({ "mode": "strict" })).unwrap();
    let default: FormConfig = serde_json::from_value(json!({})).unwrap();
    let input = json!({ "name": "", "age": -5 });

    assert_eq!(user_schema().validate_with(&input, strict.mode).unwrap_err().len(), 1);
    assert_eq!(user_schema().validate_with(&input, default.mode).unwrap_err().len(), 2);
}

#[test]
fn standalone_field_validation() {
    let schema = user_schema();
    assert_eq!(schema.validate_field("name", &json!("bob")).unwrap(), Ok(json!("bob")));
    assert_eq!(schema.validate_field("age", &json!("ten")).unwrap(), Err("INVALID_AGE"));
    assert_eq!(schema.field("name").and_then(|f| f.meta().doc()), Some("display name"));
}

// ============================================================================
// SPECIFICATION
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct User {
    age: u32,
    email: String,
    role: &'static str,
}

fn user(age: u32, email: &str, role: &'static str) -> User {
    User {
        age,
        email: email.to_owned(),
        role,
    }
}

#[test]
fn rule_chain_stops_at_first_failure() {
    let registration = spec::<User, Error>()
        .rule("r1", |u| if u.age >= 18 { Ok(()) } else { Err("INVALID_AGE") })
        .rule("r2", |u| {
            if u.email.contains('@') { Ok(()) } else { Err("INVALID_EMAIL") }
        })
        .build();

    assert_eq!(
        registration.satisfy(user(15, "x@y.com", "user")),
        Err("INVALID_AGE")
    );
}

#[test]
fn or_reports_second_operand_failure() {
    let admin = spec::<User, Error>()
        .rule("admin", |u| if u.role == "admin" { Ok(()) } else { Err("NOT_ADMIN") })
        .build();
    let member = spec::<User, Error>()
        .rule("member", |u| if u.role == "user" { Ok(()) } else { Err("NOT_USER") })
        .build();

    let guest = user(30, "g@example.com", "guest");
    assert_eq!(admin.or(&member).satisfy(guest), Err("NOT_USER"));
}

#[derive(Debug, Clone, PartialEq)]
enum AccessError {
    Age(&'static str),
    Email(&'static str),
    Suspended,
}

impl From<&'static str> for AccessError {
    fn from(code: &'static str) -> Self {
        Self::Age(code)
    }
}

#[test]
fn combined_error_types_widen_into_union() {
    let adult = spec::<User, &'static str>()
        .rule("adult", |u| if u.age >= 18 { Ok(()) } else { Err("INVALID_AGE") })
        .build();
    let email = spec::<User, AccessError>()
        .rule("email", |u| {
            if u.email.contains('@') { Ok(()) } else { Err(AccessError::Email("INVALID_EMAIL")) }
        })
        .build();
    let suspended = spec::<User, &'static str>()
        .rule("suspended", |u| if u.role == "suspended" { Ok(()) } else { Err("ACTIVE") })
        .build();

    let access = email.and(&adult).and(&suspended.not(AccessError::Suspended));

    assert_eq!(access.check(&user(30, "a@b.c", "user")), Ok(()));
    assert_eq!(
        access.check(&user(30, "nope", "user")),
        Err(AccessError::Email("INVALID_EMAIL"))
    );
    assert_eq!(
        access.check(&user(12, "a@b.c", "user")),
        Err(AccessError::Age("INVALID_AGE"))
    );
    assert_eq!(
        access.check(&user(30, "a@b.c", "suspended")),
        Err(AccessError::Suspended)
    );
}

#[test]
fn conditional_rules_only_apply_when_predicate_holds() {
    let corporate = spec::<User, Error>()
        .when(|u| u.role == "employee")
        .rule("corporate_email", |u| {
            if u.email.ends_with("@corp.example") { Ok(()) } else { Err("NOT_CORPORATE") }
        })
        .build();

    assert!(corporate.satisfy(user(30, "me@gmail.com", "user")).is_ok());
    assert_eq!(
        corporate.satisfy(user(30, "me@gmail.com", "employee")),
        Err("NOT_CORPORATE")
    );
    assert!(corporate.satisfy(user(30, "me@corp.example", "employee")).is_ok());
}

#[test]
fn specification_over_json_is_not_a_schema_field() {
    let present = spec::<Json, Error>()
        .rule("present", |v| if v.is_null() { Err("MISSING") } else { Ok(()) })
        .build();

    let panic = Schema::builder()
        .field("name", name())
        .field("nickname", present)
        .build()
        .unwrap_err();

    assert_eq!(panic.code(), "SCHEMA:FIELD_IS_NOT_VALUE");
    assert_eq!(panic.field(), Some("nickname"));
}

#[test]
fn composites_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<Value<String, Error>>();
    assert_send_sync::<Schema<Error>>();
    assert_send_sync::<Specification<User, Error>>();
    assert_send_sync::<Rule<User, Error>>();

    let schema = user_schema();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let schema = schema.clone();
            std::thread::spawn(move || schema.validate(&json!({ "name": "t", "age": i })).is_ok())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn results_round_trip_through_wire_shape() {
    let verdict = user_schema().validate_field("age", &json!(-1)).unwrap();
    let wire = to_json(&verdict).unwrap();

    assert!(is_result(&wire));
    assert_eq!(wire, json!({ "ok": false, "error": "INVALID_AGE" }));

    let decoded: Result<Json, String> = from_json(&wire).unwrap();
    assert_eq!(decoded, Err("INVALID_AGE".to_owned()));
}
