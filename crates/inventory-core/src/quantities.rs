//! Insertion-ordered map from item name to quantity.
//!
//! Serializes as a plain JSON object in iteration order and deserializes
//! preserving the document's key order.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Item name -> quantity, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Quantities {
    order: Vec<String>,
    values: HashMap<String, i64>,
}

impl Quantities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, item: &str) -> Option<i64> {
        self.values.get(item).copied()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.values.contains_key(item)
    }

    /// Set `item` to `quantity`. A new key goes to the end of the order;
    /// an existing key keeps its position.
    pub fn insert(&mut self, item: impl Into<String>, quantity: i64) -> Option<i64> {
        let item = item.into();
        if let Some(slot) = self.values.get_mut(&item) {
            return Some(std::mem::replace(slot, quantity));
        }
        self.order.push(item.clone());
        self.values.insert(item, quantity);
        None
    }

    pub fn remove(&mut self, item: &str) -> Option<i64> {
        let removed = self.values.remove(item)?;
        self.order.retain(|name| name != item);
        Some(removed)
    }

    /// Keep only the entries for which `keep` returns true, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, i64) -> bool) {
        let values = &mut self.values;
        self.order.retain(|name| {
            let quantity = values[name.as_str()];
            if keep(name, quantity) {
                true
            } else {
                values.remove(name.as_str());
                false
            }
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.order
            .iter()
            .map(move |name| (name.as_str(), self.values[name.as_str()]))
    }

    pub fn items(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }
}

/// Logical equality: same keys, same quantities, same order.
impl PartialEq for Quantities {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.values == other.values
    }
}

impl Eq for Quantities {}

impl<S: Into<String>> FromIterator<(S, i64)> for Quantities {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut quantities = Quantities::new();
        for (item, quantity) in iter {
            quantities.insert(item, quantity);
        }
        quantities
    }
}

impl Serialize for Quantities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (item, quantity) in self.iter() {
            map.serialize_entry(item, &quantity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Quantities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(QuantitiesVisitor)
    }
}

struct QuantitiesVisitor;

impl<'de> Visitor<'de> for QuantitiesVisitor {
    type Value = Quantities;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of item names to integer quantities")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut quantities = Quantities::new();
        while let Some((item, quantity)) = access.next_entry::<String, i64>()? {
            quantities.insert(item, quantity);
        }
        Ok(quantities)
    }
}
