//! serde support: an [`OrderedMap`] is written as a map in ascending key order
//! and read back by inserting each entry, so the sort invariant holds no
//! matter how the input was ordered.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::map::OrderedMap;
use crate::order::KeyOrder;

impl<K, V, O> Serialize for OrderedMap<K, V, O>
where
    K: Serialize,
    V: Serialize,
    O: KeyOrder<K>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, K, V, O> Deserialize<'de> for OrderedMap<K, V, O>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    O: KeyOrder<K> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: PhantomData,
        })
    }
}

struct OrderedMapVisitor<K, V, O> {
    marker: PhantomData<fn() -> OrderedMap<K, V, O>>,
}

impl<'de, K, V, O> Visitor<'de> for OrderedMapVisitor<K, V, O>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    O: KeyOrder<K> + Default,
{
    type Value = OrderedMap<K, V, O>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::with_order(O::default());
        while let Some((key, value)) = access.next_entry()? {
            map.put(key, value).map_err(de::Error::custom)?;
        }
        Ok(map)
    }
}
