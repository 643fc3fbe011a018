//! Element identity: genuine elements pass their predicate, look-alikes do not.

use nebula_rules::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

type Error = &'static str;

fn nickname() -> Value<String, Error> {
    value(|v: &Json| v.as_str().map(str::to_owned).ok_or("NOT_A_STRING"))
}

/// An element that claims some metadata but owns unrelated content.
struct Forged {
    meta: ElementMeta,
    content: Json,
}

impl Element for Forged {
    fn meta(&self) -> &ElementMeta {
        &self.meta
    }

    fn content(&self) -> Json {
        self.content.clone()
    }
}

impl FieldValidator<Error> for Forged {
    fn validate_field(&self, input: &Json) -> Result<Json, Error> {
        Ok(input.clone())
    }
}

fn verdicts(e: &dyn Element) -> [bool; 4] {
    [is_value(e), is_schema(e), is_spec(e), is_rule(e)]
}

fn small() -> Rule<u8, Error> {
    rule("small", |n: &u8| if *n < 10 { Ok(()) } else { Err("BIG") })
}

fn genuine(tag: Tag) -> (ElementMeta, Json) {
    match tag {
        Tag::Value => (nickname().meta().clone(), nickname().content()),
        Tag::Schema => {
            let schema = schema(fields! { "nickname" => nickname() }).unwrap();
            (schema.meta().clone(), schema.content())
        }
        Tag::Specification => {
            let spec = spec::<u8, Error>().with_rule(small()).build();
            (spec.meta().clone(), spec.content())
        }
        Tag::Rule => (small().meta().clone(), small().content()),
    }
}

fn forged_from(meta: ElementMeta) -> Forged {
    Forged {
        meta,
        content: json!({ "validator": "totally a value" }),
    }
}

#[test]
fn copied_metadata_does_not_make_a_value() {
    let forged = forged_from(nickname().meta().clone());

    assert!(get_element_meta(&forged).is_some());
    assert!(!is_value(&forged));
}

#[test]
fn metadata_read_from_json_does_not_make_a_value() {
    let exported = serde_json::to_value(nickname().meta()).unwrap();
    let meta = meta_from_json(&exported).unwrap();
    assert_eq!(&meta, nickname().meta());

    assert!(!is_value(&forged_from(meta)));
}

#[rstest]
#[case::value(Tag::Value)]
#[case::schema(Tag::Schema)]
#[case::specification(Tag::Specification)]
#[case::rule(Tag::Rule)]
fn copied_metadata_with_other_content_is_rejected(#[case] tag: Tag) {
    let (meta, _) = genuine(tag);
    let forged = forged_from(meta);

    assert_eq!(forged.meta().tag(), tag);
    assert_eq!(verdicts(&forged), [false; 4]);
}

#[rstest]
#[case::schema_as_spec(Tag::Schema, "Specification")]
#[case::spec_as_schema(Tag::Specification, "Schema")]
#[case::rule_as_spec(Tag::Rule, "Specification")]
#[case::value_as_rule(Tag::Value, "Rule")]
fn relabelled_tag_with_genuine_content_is_rejected(#[case] tag: Tag, #[case] claimed: &str) {
    let (meta, content) = genuine(tag);
    let mut exported = serde_json::to_value(&meta).unwrap();
    exported["tag"] = json!(claimed);

    let forged = Forged {
        meta: meta_from_json(&exported).unwrap(),
        content,
    };

    assert_eq!(forged.meta().tag().as_str(), claimed);
    assert_eq!(verdicts(&forged), [false; 4]);
}

#[rstest]
#[case(json!({ "id": "Element", "tag": "Value" }))]
#[case(json!({ "id": "Something", "tag": "Value", "hash": "00" }))]
#[case(json!({ "id": "Element", "tag": "Widget", "hash": "00" }))]
#[case(json!("Element"))]
#[case(json!(null))]
fn malformed_metadata_is_not_recognized(#[case] candidate: Json) {
    assert_eq!(meta_from_json(&candidate), None);
}

#[test]
fn exported_metadata_shape() {
    let meta = serde_json::to_value(nickname().with_doc("public handle").meta()).unwrap();
    let object = meta.as_object().unwrap();

    assert_eq!(object.len(), 4);
    assert_eq!(meta["id"], json!(ELEMENT_ID));
    assert_eq!(meta["tag"], json!("Value"));
    assert_eq!(meta["doc"], json!("public handle"));
    assert_eq!(meta["hash"].as_str().map(str::len), Some(64));
}

#[test]
fn schema_rejects_forged_value() {
    let panic = Schema::builder()
        .field("nickname", forged_from(nickname().meta().clone()))
        .build()
        .unwrap_err();

    assert_eq!(panic.code(), "SCHEMA:FIELD_IS_NOT_VALUE");
    assert_eq!(panic.module(), "SCHEMA");
    assert!(panic.to_string().contains("mismatched hash"));
}

#[test]
fn schema_rejects_field_without_element_identity() {
    let meta = meta_from_json(&json!({ "id": "Element", "tag": "Rule", "hash": "00" })).unwrap();
    let panic = schema(fields! { "nickname" => forged_from(meta) }).unwrap_err();

    assert_eq!(panic.field(), Some("nickname"));
    assert!(panic.to_string().contains("Rule"));
}

#[test]
fn each_kind_passes_only_its_own_predicate() {
    let value = nickname();
    let schema = schema(fields! { "nickname" => nickname() }).unwrap();
    let rule = small();
    let spec = spec::<u8, Error>().with_rule(rule.clone()).build();

    assert_eq!(verdicts(&value), [true, false, false, false]);
    assert_eq!(verdicts(&schema), [false, true, false, false]);
    assert_eq!(verdicts(&spec), [false, false, true, false]);
    assert_eq!(verdicts(&rule), [false, false, false, true]);
    assert_eq!(verdicts(&spec.not("SMALL")), [false, false, true, false]);
}

#[test]
fn doc_does_not_change_identity() {
    let plain = nickname();
    let documented = nickname().with_doc("public handle");

    assert_eq!(plain.meta().hash(), documented.meta().hash());
    assert!(is_value(&documented));
}

#[test]
fn output_type_is_part_of_identity() {
    let a = value(|v: &Json| v.as_bool().ok_or("NOT_BOOL"));
    let b = value(|v: &Json| v.as_i64().ok_or("NOT_INT"));

    assert_ne!(a.meta().hash(), b.meta().hash());
    assert_eq!(a.meta().hash(), a.clone().meta().hash());
}

#[test]
fn public_fingerprint_matches_across_key_order() {
    let left = fingerprint(Tag::Schema, &json!({ "a": 1, "b": [true, null] })).unwrap();
    let right = fingerprint(Tag::Schema, &json!({ "b": [true, null], "a": 1 })).unwrap();
    let other_tag = fingerprint(Tag::Rule, &json!({ "a": 1, "b": [true, null] })).unwrap();

    assert_eq!(left, right);
    assert_ne!(left, other_tag);
}
