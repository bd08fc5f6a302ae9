//! Partial-update field shapes.
//!
//! Non-nullable columns use `Option<T>` decoded with [`non_null`]: omitted
//! means "leave alone", a value overwrites, and an explicit JSON `null` is a
//! decode error. Nullable columns use [`Patch<T>`], which keeps omitted and
//! `null` apart.

use sea_orm::ActiveValue::{self, NotSet, Set};
use sea_orm::Value;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self { Patch::Absent }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool { matches!(self, Patch::Absent) }

    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// `NotSet` when absent, so the column is left out of the `UPDATE`.
    pub fn into_active_value(self) -> ActiveValue<Option<T>>
    where
        Option<T>: Into<Value>,
    {
        match self {
            Patch::Absent => NotSet,
            Patch::Null => Set(None),
            Patch::Value(v) => Set(Some(v)),
        }
    }

    pub fn apply_to(self, slot: &mut Option<T>) {
        match self {
            Patch::Absent => {}
            Patch::Null => *slot = None,
            Patch::Value(v) => *slot = Some(v),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

// Only reached when the key is present; `#[serde(default)]` covers omission.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Value(v) => serializer.serialize_some(v),
            _ => serializer.serialize_none(),
        }
    }
}

/// Overwrite `slot` when an update carries a value.
pub fn assign<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// Column value for an optional update field; omitted fields stay `NotSet`.
pub fn set_if_present<T: Into<Value>>(value: Option<T>) -> ActiveValue<T> {
    match value {
        Some(v) => Set(v),
        None => NotSet,
    }
}

/// Update input of append-only kinds. Uninhabited, so decoding always fails.
#[derive(Debug, Deserialize)]
pub enum NoUpdate {}

impl crate::validation::Validate for NoUpdate {
    fn validate(&self) -> Result<(), crate::errors::ServiceError> { match *self {} }
}

/// `deserialize_with` for optional-but-not-nullable update fields.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(v) => Ok(Some(v)),
        None => Err(serde::de::Error::custom("null is not allowed for this field")),
    }
}
