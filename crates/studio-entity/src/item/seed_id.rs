//! Serde codec for item identifiers in seed files.
//!
//! Always written as a hyphenated UUID. Reading accepts any UUID string as
//! is; any other string or integer key (`"1"`, `7`, `"f-1"`) is mapped to a
//! name-based v5 UUID of its decimal or literal text, so the same key always
//! yields the same id and `parentId` references keep pointing at their item.

use std::fmt;

use serde::{Deserializer, Serialize, Serializer, de};
use uuid::Uuid;

use studio_core::types::ItemId;

/// Map a seed key to an item id. UUID strings parse directly.
pub fn from_key(key: &str) -> ItemId {
    let key = key.trim();
    match Uuid::parse_str(key) {
        Ok(uuid) => ItemId::from_uuid(uuid),
        Err(_) => ItemId::from_uuid(Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes())),
    }
}

pub fn serialize<S>(value: &ItemId, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<ItemId, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(SeedIdVisitor)
}

struct SeedIdVisitor;

impl<'de> de::Visitor<'de> for SeedIdVisitor {
    type Value = ItemId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a UUID or a non-empty string or integer key")
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if s.trim().is_empty() {
            return Err(E::invalid_value(de::Unexpected::Str(s), &self));
        }
        Ok(from_key(s))
    }

    fn visit_u64<E>(self, n: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(from_key(&n.to_string()))
    }

    fn visit_i64<E>(self, n: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(from_key(&n.to_string()))
    }
}

/// The same codec for optional ids; `null` or a missing field is `None`.
pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<ItemId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ItemId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionVisitor)
    }

    struct OptionVisitor;

    impl<'de> de::Visitor<'de> for OptionVisitor {
        type Value = Option<ItemId>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "null or an item id")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            super::deserialize(deserializer).map(Some)
        }
    }
}
