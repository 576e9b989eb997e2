//! Output document types: records, facets and the root JSON object.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One paper: column name to string value, in source column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field. Callers keep keys unique; the table stages do.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push((key.into(), value.into()));
    }

    /// Value for a column, if the record has it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A record field exposed to the viewer as a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub key: String,
    pub label: String,
}

impl Facet {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Root object written to the output file.
///
/// Field order is the serialized key order: `pillars`, `papers`, `facets`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputDocument {
    pub pillars: Vec<String>,
    pub papers: Vec<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<Vec<Facet>>,
}

impl OutputDocument {
    pub fn paper_count(&self) -> usize {
        self.papers.len()
    }

    pub fn pillar_count(&self) -> usize {
        self.pillars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_in_insertion_order() {
        let mut record = Record::new();
        record.push("Zeta", "1");
        record.push("Alpha", "2");
        let json = serde_json::to_string(&record).expect("serialize record");
        assert_eq!(json, r#"{"Zeta":"1","Alpha":"2"}"#);
    }

    #[test]
    fn facets_omitted_when_none() {
        let document = OutputDocument {
            pillars: vec!["Detection".to_string()],
            papers: vec![],
            facets: None,
        };
        let json = serde_json::to_string(&document).expect("serialize document");
        assert_eq!(json, r#"{"pillars":["Detection"],"papers":[]}"#);
    }

    #[test]
    fn facets_follow_papers() {
        let document = OutputDocument {
            pillars: vec![],
            papers: vec![],
            facets: Some(vec![Facet::new("DataSource", "Data source")]),
        };
        let json = serde_json::to_string(&document).expect("serialize document");
        assert_eq!(
            json,
            r#"{"pillars":[],"papers":[],"facets":[{"key":"DataSource","label":"Data source"}]}"#
        );
    }

    #[test]
    fn record_lookup() {
        let record: Record = vec![("Title".to_string(), "Paper X".to_string())]
            .into_iter()
            .collect();
        assert_eq!(record.get("Title"), Some("Paper X"));
        assert_eq!(record.get("Year"), None);
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["Title"]);
        assert_eq!(record.len(), 1);
    }
}
