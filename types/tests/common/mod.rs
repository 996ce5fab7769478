//! Shared fixtures for the integration suite.

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, TimeZone};
use serde_json::Value;
use tincan_types::{Activity, ActivityDefinition, Agent, Fields, LanguageMap};

pub const MBOX: &str = "mailto:tincanpython@tincanapi.com";
pub const ACTIVITY_ID: &str = "http://tincanapi.com/TinCanPython/Test/Unit/0";
pub const TIMESTAMP: &str = "2014-06-23T15:25:00-05:00";

pub fn agent() -> Agent {
    Agent::with_mbox(MBOX)
}

pub fn activity() -> Activity {
    let definition = ActivityDefinition::new()
        .with_type("http://id.tincanapi.com/activitytype/unit-test")
        .with_name(language_map("Python Tests"))
        .with_description(language_map(
            "Unit test in the test suite for the Python library",
        ));
    Activity::with_id(ACTIVITY_ID)
        .expect("fixture id is non-empty")
        .with_definition(definition)
}

pub fn language_map(text: &str) -> LanguageMap {
    [("en-US", text)].into_iter().collect()
}

/// 15:25 on 2014-06-23 in US Central daylight time (UTC-05:00).
pub fn central_timestamp() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(5 * 3600)
        .expect("offset in range")
        .with_ymd_and_hms(2014, 6, 23, 15, 25, 0)
        .single()
        .expect("fixed offsets are unambiguous")
}

pub fn fields(value: Value) -> Fields {
    match value {
        Value::Object(fields) => fields,
        other => panic!("fixture must be a JSON object, got {other}"),
    }
}
