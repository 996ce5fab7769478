//! StateDocument construction and setter tests

use serde::Serialize;
use serde_json::json;
use tincan_types::{
    Activity, Agent, DocumentError, DocumentResource, StateDocument, StateDocumentInit,
};

use crate::common::{
    ACTIVITY_ID, MBOX, TIMESTAMP, activity, agent, central_timestamp, fields,
};

fn full_init() -> StateDocumentInit {
    StateDocumentInit {
        id: Some("test".to_owned()),
        content_type: Some("test type".to_owned()),
        content: Some(b"test bytearray".to_vec()),
        etag: Some("test etag".to_owned()),
        timestamp: Some(TIMESTAMP.into()),
        agent: Some(agent().into()),
        activity: Some(activity().into()),
        registration: Some("test registration".to_owned()),
    }
}

fn assert_full(doc: &StateDocument) {
    assert_eq!(doc.id(), Some("test"));
    assert_eq!(doc.content_type(), Some("test type"));
    assert_eq!(doc.content(), Some(&b"test bytearray"[..]));
    assert_eq!(doc.etag(), Some("test etag"));
    assert_eq!(doc.timestamp(), Some(central_timestamp()));
    assert_eq!(doc.agent(), Some(&agent()));
    assert_eq!(doc.activity(), Some(&activity()));
    assert_eq!(doc.registration(), Some("test registration"));
}

fn assert_empty(doc: &StateDocument) {
    assert!(doc.id().is_none());
    assert!(doc.content_type().is_none());
    assert!(doc.content().is_none());
    assert!(doc.etag().is_none());
    assert!(doc.timestamp().is_none());
    assert!(doc.agent().is_none());
    assert!(doc.activity().is_none());
    assert!(doc.registration().is_none());
}

#[test]
fn init_empty() {
    let doc = StateDocument::new();
    assert_empty(&doc);
    assert_eq!(doc, StateDocument::default());
}

#[test]
fn init_from_empty_mapping() {
    let doc = StateDocument::from_value(json!({})).unwrap();
    assert_empty(&doc);
}

#[test]
fn init_mapping_with_unknown_key_fails() {
    let err = StateDocument::from_value(json!({ "bad_test": "test", "id": "ok" })).unwrap_err();
    match err {
        DocumentError::UnknownAttribute {
            type_name,
            attribute,
        } => {
            assert_eq!(type_name, "StateDocument");
            assert_eq!(attribute, "bad_test");
        }
        other => panic!("expected an unknown attribute error, got {other:?}"),
    }
}

#[test]
fn init_object_with_unknown_attribute_fails() {
    #[derive(Serialize)]
    struct Tester {
        id: Option<String>,
        bad_test: String,
    }

    let obj = Tester {
        id: None,
        bad_test: "test".to_owned(),
    };
    let err = StateDocument::from_object(&obj).unwrap_err();
    assert!(err.is_unknown_attribute());
}

#[test]
fn init_object_with_declared_attributes() {
    #[derive(Serialize)]
    struct Saved<'a> {
        id: &'a str,
        etag: &'a str,
        timestamp: &'a str,
        agent: Agent,
    }

    let doc = StateDocument::from_object(&Saved {
        id: "test",
        etag: "test etag",
        timestamp: TIMESTAMP,
        agent: agent(),
    })
    .unwrap();
    assert_eq!(doc.id(), Some("test"));
    assert_eq!(doc.etag(), Some("test etag"));
    assert_eq!(doc.timestamp(), Some(central_timestamp()));
    assert_eq!(doc.agent(), Some(&agent()));
}

#[test]
fn init_partial() {
    let doc = StateDocument::from_init(StateDocumentInit {
        id: Some("test".to_owned()),
        content_type: Some("test type".to_owned()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(doc.id(), Some("test"));
    assert_eq!(doc.content_type(), Some("test type"));
    assert!(doc.content().is_none());
    assert!(doc.etag().is_none());
    assert!(doc.timestamp().is_none());
    assert!(doc.agent().is_none());
    assert!(doc.activity().is_none());
    assert!(doc.registration().is_none());
}

#[test]
fn init_all() {
    let doc = StateDocument::from_init(full_init()).unwrap();
    assert_full(&doc);
}

#[test]
fn init_all_from_mapping() {
    let doc = StateDocument::from_value(json!({
        "id": "test",
        "content_type": "test type",
        "content": b"test bytearray".to_vec(),
        "etag": "test etag",
        "timestamp": TIMESTAMP,
        "agent": { "mbox": MBOX },
        "activity": {
            "id": ACTIVITY_ID,
            "definition": {
                "type": "http://id.tincanapi.com/activitytype/unit-test",
                "name": { "en-US": "Python Tests" },
                "description": { "en-US": "Unit test in the test suite for the Python library" }
            }
        },
        "registration": "test registration"
    }))
    .unwrap();
    assert_full(&doc);
}

#[test]
fn init_with_bad_timestamp_fails() {
    let err = StateDocument::from_init(StateDocumentInit {
        timestamp: Some("2014-13-45T99:00:00".into()),
        ..Default::default()
    })
    .unwrap_err();
    assert!(err.is_invalid_timestamp());
}

#[test]
fn setters() {
    let mut doc = StateDocument::new();
    doc.set_id(Some("test".to_owned()));
    doc.set_content_type(Some("test type".to_owned()));
    doc.set_content(Some(b"test bytearray".to_vec()));
    doc.set_etag(Some("test etag".to_owned()));
    doc.set_timestamp(Some(TIMESTAMP.into())).unwrap();
    doc.set_agent(Some(agent().into())).unwrap();
    doc.set_activity(Some(activity().into())).unwrap();
    doc.set_registration(Some("test registration".to_owned()));

    assert_full(&doc);
}

#[test]
fn setters_none() {
    let mut doc = StateDocument::new();
    doc.set_id(None);
    doc.set_content_type(None);
    doc.set_content(None);
    doc.set_etag(None);
    doc.set_timestamp(None).unwrap();
    doc.set_agent(None).unwrap();
    doc.set_activity(None).unwrap();
    doc.set_registration(None);

    assert_empty(&doc);
}

#[test]
fn setters_none_clear_assigned_values() {
    let mut doc = StateDocument::from_init(full_init()).unwrap();
    doc.set_id(None);
    doc.set_content_type(None);
    doc.set_content(None);
    doc.set_etag(None);
    doc.set_timestamp(None).unwrap();
    doc.set_agent(None).unwrap();
    doc.set_activity(None).unwrap();
    doc.set_registration(None);

    assert_empty(&doc);
    assert_eq!(doc, StateDocument::new());
}

#[test]
fn agent_setter_coerces_mapping() {
    let mut doc = StateDocument::new();
    doc.set_agent(Some(fields(json!({ "mbox": MBOX })).into()))
        .unwrap();

    let assigned: &Agent = doc.agent().unwrap();
    assert_eq!(assigned.mbox(), agent().mbox());
}

#[test]
fn activity_setter_coerces_mapping() {
    let mut doc = StateDocument::new();
    doc.set_activity(Some(fields(json!({ "id": ACTIVITY_ID })).into()))
        .unwrap();

    let assigned: &Activity = doc.activity().unwrap();
    assert_eq!(assigned.id(), Some(ACTIVITY_ID));
}

#[test]
fn content_is_stored_unchanged() {
    let mut doc = StateDocument::new();
    doc.set_content(Some(vec![0, 159, 146, 150]));
    assert_eq!(doc.content(), Some(&[0, 159, 146, 150][..]));
    assert!(doc.content_str().is_none());

    doc.set_content(Some(b"{\"progress\":0.5}".to_vec()));
    assert_eq!(doc.content_str(), Some("{\"progress\":0.5}"));
}
