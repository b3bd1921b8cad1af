//! Pipeline output

use crate::{Country, LeaderRecord};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Mapping from country to its enriched leaders
///
/// Insertion order is preserved: countries appear in directory enumeration
/// order and leaders in the order the directory listed them. Serializes as a
/// JSON object whose keys follow that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineResult {
    entries: Vec<(Country, Vec<LeaderRecord>)>,
}

impl PipelineResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the leaders of a country
    ///
    /// Re-inserting a country replaces its leaders but keeps its original
    /// position.
    pub fn insert(&mut self, country: Country, leaders: Vec<LeaderRecord>) {
        match self.entries.iter_mut().find(|(c, _)| *c == country) {
            Some(entry) => entry.1 = leaders,
            None => self.entries.push((country, leaders)),
        }
    }

    /// Leaders recorded for a country
    pub fn get(&self, country: &Country) -> Option<&[LeaderRecord]> {
        self.entries
            .iter()
            .find(|(c, _)| c == country)
            .map(|(_, leaders)| leaders.as_slice())
    }

    /// Countries in insertion order
    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.entries.iter().map(|(c, _)| c)
    }

    /// `(country, leaders)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Country, &[LeaderRecord])> {
        self.entries.iter().map(|(c, l)| (c, l.as_slice()))
    }

    /// Number of countries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no country has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of leaders across all countries
    pub fn total_leaders(&self) -> usize {
        self.entries.iter().map(|(_, l)| l.len()).sum()
    }
}

impl Serialize for PipelineResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (country, leaders) in &self.entries {
            map.serialize_entry(country, leaders)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PipelineResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResultVisitor;

        impl<'de> Visitor<'de> for ResultVisitor {
            type Value = PipelineResult;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of country to leader list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut result = PipelineResult::new();
                while let Some((country, leaders)) =
                    access.next_entry::<Country, Vec<LeaderRecord>>()?
                {
                    result.insert(country, leaders);
                }
                Ok(result)
            }
        }

        deserializer.deserialize_map(ResultVisitor)
    }
}

impl<'a> IntoIterator for &'a PipelineResult {
    type Item = &'a (Country, Vec<LeaderRecord>);
    type IntoIter = std::slice::Iter<'a, (Country, Vec<LeaderRecord>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
