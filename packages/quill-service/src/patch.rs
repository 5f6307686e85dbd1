//! Deserialization for updatable nullable fields, keeping "field absent"
//! (outer `None`, leave untouched) apart from "field set to null" (inner
//! `None`, clear the column). Pair with `#[serde(default)]` so absent
//! fields stay at the outer `None`.

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
	T: Deserialize<'de>,
	D: Deserializer<'de>,
{
	Option::<T>::deserialize(deserializer).map(Some)
}
