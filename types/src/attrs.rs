//! Boundary adapter for mapping-shaped construction input.
//!
//! Every value type that can be built from a key/value mapping funnels through
//! here: the key set is checked against the declared attribute names first,
//! and only then are individual values decoded. Nothing is decoded from a map
//! that carries an undeclared key, so a failed construction never leaves
//! partially applied state behind.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::DocumentError;

/// JSON object used as mapping input.
pub type Fields = Map<String, Value>;

/// Reject `fields` if it names any attribute outside `declared`.
///
/// The smallest offending key is reported so the error is stable regardless
/// of map ordering.
pub(crate) fn reject_unknown(
    type_name: &'static str,
    fields: &Fields,
    declared: &[&str],
) -> Result<(), DocumentError> {
    let unknown = fields
        .keys()
        .map(String::as_str)
        .filter(|key| !declared.contains(key))
        .min();

    match unknown {
        Some(attribute) => {
            tracing::debug!(type_name, attribute, "rejecting undeclared attribute");
            Err(DocumentError::unknown_attribute(type_name, attribute))
        }
        None => Ok(()),
    }
}

/// Remove the raw value stored under any of `names`.
///
/// `names` lists one attribute and its accepted spellings (`"moreInfo"`,
/// `"more_info"`). Supplying more than one spelling is an error. `null` is
/// treated as absent.
pub(crate) fn take_raw(
    type_name: &'static str,
    fields: &mut Fields,
    names: &[&'static str],
) -> Result<Option<Value>, DocumentError> {
    let mut found: Option<Value> = None;
    for name in names {
        let Some(value) = fields.remove(*name).filter(|value| !value.is_null()) else {
            continue;
        };
        if found.is_some() {
            return Err(DocumentError::invalid_value(
                type_name,
                names[0],
                "attribute supplied under more than one name",
            ));
        }
        found = Some(value);
    }
    Ok(found)
}

/// Remove and decode the value stored under any of `names`.
pub(crate) fn take<T: DeserializeOwned>(
    type_name: &'static str,
    fields: &mut Fields,
    names: &[&'static str],
) -> Result<Option<T>, DocumentError> {
    take_raw(type_name, fields, names)?
        .map(|value| {
            serde_json::from_value(value)
                .map_err(|err| DocumentError::invalid_value(type_name, names[0], err))
        })
        .transpose()
}

/// Unwrap a JSON value that must be an object.
pub(crate) fn expect_object(type_name: &'static str, value: Value) -> Result<Fields, DocumentError> {
    match value {
        Value::Object(fields) => Ok(fields),
        _ => Err(DocumentError::NotAMapping { type_name }),
    }
}

/// Read the attributes an arbitrary object exposes through `Serialize`.
pub(crate) fn object_fields<T: Serialize + ?Sized>(
    type_name: &'static str,
    object: &T,
) -> Result<Fields, DocumentError> {
    expect_object(type_name, serde_json::to_value(object)?)
}

/// Check the optional `objectType` discriminator carried by xAPI objects.
pub(crate) fn check_object_type(
    type_name: &'static str,
    fields: &mut Fields,
    expected: &str,
) -> Result<(), DocumentError> {
    let object_type: Option<String> = take(type_name, fields, &["objectType", "object_type"])?;
    match object_type {
        Some(found) if found != expected => Err(DocumentError::invalid_value(
            type_name,
            "objectType",
            format!("expected '{expected}', found '{found}'"),
        )),
        _ => Ok(()),
    }
}
