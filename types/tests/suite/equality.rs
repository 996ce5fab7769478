//! Equality across input forms

use serde_json::json;
use tincan_types::{
    Activity, DocumentDefaults, DocumentResource, StateDocument, StateDocumentInit,
};

use crate::common::{ACTIVITY_ID, MBOX, TIMESTAMP, activity, agent, central_timestamp, fields};

fn typed() -> StateDocument {
    StateDocument::from_init(StateDocumentInit {
        id: Some("test".to_owned()),
        timestamp: Some(central_timestamp().into()),
        agent: Some(agent().into()),
        activity: Some(Activity::with_id(ACTIVITY_ID).unwrap().into()),
        registration: Some("test registration".to_owned()),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn mapping_inputs_equal_typed_inputs() {
    let loose = StateDocument::from_init(StateDocumentInit {
        id: Some("test".to_owned()),
        timestamp: Some(TIMESTAMP.into()),
        agent: Some(fields(json!({ "mbox": MBOX })).into()),
        activity: Some(fields(json!({ "id": ACTIVITY_ID })).into()),
        registration: Some("test registration".to_owned()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(loose, typed());
}

#[test]
fn timestamp_notation_does_not_affect_equality() {
    let mut utc = typed();
    utc.set_timestamp(Some("2014-06-23T20:25:00Z".into()))
        .unwrap();
    assert_eq!(utc, typed());

    let mut later = typed();
    later
        .set_timestamp(Some("2014-06-23T20:26:00Z".into()))
        .unwrap();
    assert_ne!(later, typed());
}

#[test]
fn differing_attribute_breaks_equality() {
    let mut other = typed();
    other.set_etag(Some("changed".to_owned()));
    assert_ne!(other, typed());

    let mut other = typed();
    other.set_activity(Some(activity().into())).unwrap();
    assert_ne!(other, typed(), "definition is part of activity equality");
}

#[test]
fn reassigning_same_value_is_idempotent() {
    let original = typed();
    let mut doc = original.clone();

    doc.set_id(Some("test".to_owned()));
    doc.set_content_type(None);
    doc.set_content(None);
    doc.set_etag(None);
    doc.set_timestamp(Some(TIMESTAMP.into())).unwrap();
    doc.set_agent(Some(agent().into())).unwrap();
    doc.set_activity(Some(fields(json!({ "id": ACTIVITY_ID })).into()))
        .unwrap();
    doc.set_registration(Some("test registration".to_owned()));

    assert_eq!(doc, original);
}

#[test]
fn defaults_do_not_change_equality_of_explicit_content_type() {
    let defaults = DocumentDefaults::new("application/octet-stream").unwrap();

    let mut explicit = typed();
    explicit.set_content_type(Some("application/json".to_owned()));
    let before = explicit.clone();
    explicit.apply_defaults(&defaults);
    assert_eq!(explicit, before);

    let mut implicit = typed();
    implicit.apply_defaults(&defaults);
    assert_eq!(implicit.content_type(), Some("application/octet-stream"));
}
