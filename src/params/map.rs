// SPDX-License-Identifier: MIT

//! Mapping-backed parameter source

use super::Params;
use crate::error::ParamsError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A [`Params`] implementation backed by a plain string map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Map {
    entries: HashMap<String, String>,
}

impl Map {
    /// Create an empty Map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the previous value if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Decode an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored. When a key repeats, the first value wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut entries = HashMap::new();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match entries.entry(key.into_owned()) {
                Entry::Vacant(slot) => {
                    slot.insert(value.into_owned());
                }
                Entry::Occupied(slot) => {
                    log::warn!(
                        "Query parameter '{}' repeated, keeping first value",
                        slot.key()
                    );
                }
            }
        }

        log::debug!("Loaded {} parameters from query string", entries.len());
        Self { entries }
    }

    /// Flatten a JSON object into parameters.
    ///
    /// Nested objects become dotted keys (`user.role`), scalars are rendered
    /// as strings and `null` becomes the empty string. Arrays are rejected, as
    /// are documents where two entries flatten to the same key.
    pub fn from_json_value(value: &Value) -> Result<Self, ParamsError> {
        let object = value.as_object().ok_or(ParamsError::NotAnObject)?;
        let mut entries = HashMap::new();
        flatten(None, object, &mut entries)?;
        Ok(Self { entries })
    }

    /// Parse and flatten a JSON document
    pub fn from_json_str(content: &str) -> Result<Self, ParamsError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_json_value(&value)
    }

    /// Parse and flatten a YAML document. An empty document yields an empty Map.
    pub fn from_yaml_str(content: &str) -> Result<Self, ParamsError> {
        let value: Value = serde_yaml::from_str(content)?;
        if value.is_null() {
            return Ok(Self::new());
        }
        Self::from_json_value(&value)
    }

    /// Load parameters from a file. `.yaml` and `.yml` files are read as YAML,
    /// anything else as JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let map = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content)?,
            _ => Self::from_json_str(&content)?,
        };

        log::debug!("Loaded {} parameters from {}", map.len(), path.display());
        Ok(map)
    }
}

fn flatten(
    prefix: Option<&str>,
    object: &serde_json::Map<String, Value>,
    out: &mut HashMap<String, String>,
) -> Result<(), ParamsError> {
    for (name, value) in object {
        let key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, name),
            None => name.clone(),
        };

        let flat = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            Value::Object(nested) => {
                flatten(Some(&key), nested, out)?;
                continue;
            }
            Value::Array(_) => return Err(ParamsError::unsupported(key)),
        };

        match out.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(flat);
            }
            // `{"a": {"b": 1}, "a.b": 2}` flattens both values to `a.b`
            Entry::Occupied(slot) => return Err(ParamsError::duplicate(slot.key().as_str())),
        }
    }
    Ok(())
}

impl Params for Map {
    fn get(&self, key: &str) -> Cow<'_, str> {
        self.entries
            .get(key)
            .map_or(Cow::Borrowed(""), |v| Cow::Borrowed(v.as_str()))
    }
}

impl From<HashMap<String, String>> for Map {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Map
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Map
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_present_and_missing() {
        let map = Map::from([("a", "1")]);
        assert_eq!(map.get("a"), "1");
        assert_eq!(map.get("missing"), "");
    }

    #[test]
    fn test_insert_and_len() {
        let mut map = Map::new();
        assert!(map.is_empty());

        assert_eq!(map.insert("role", "guest"), None);
        assert_eq!(map.insert("role", "admin"), Some("guest".to_string()));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("role"), "admin");
    }

    #[test]
    fn test_iter() {
        let map = Map::from([("a", "1"), ("b", "2")]);
        let mut pairs: Vec<_> = map.iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_serde_is_a_plain_object() {
        let map = Map::from([("role", "admin")]);
        assert_eq!(serde_json::to_value(&map).unwrap(), json!({"role": "admin"}));

        let back: Map = serde_json::from_value(json!({"role": "owner"})).unwrap();
        assert_eq!(back.get("role"), "owner");
    }

    #[test]
    fn test_from_query() {
        let map = Map::from_query("?role=admin&name=Jane%20Doe&flag=");
        assert_eq!(map.get("role"), "admin");
        assert_eq!(map.get("name"), "Jane Doe");
        assert_eq!(map.get("flag"), "");
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_from_query_first_value_wins() {
        let map = Map::from_query("tag=a&tag=b");
        assert_eq!(map.get("tag"), "a");
    }

    #[test]
    fn test_from_json_value_flattens() {
        let value = json!({
            "role": "admin",
            "age": 42,
            "ratio": 0.5,
            "active": true,
            "note": null,
            "user": {"region": {"code": "eu"}}
        });
        let map = Map::from_json_value(&value).unwrap();

        assert_eq!(map.get("role"), "admin");
        assert_eq!(map.get("age"), "42");
        assert_eq!(map.get("ratio"), "0.5");
        assert_eq!(map.get("active"), "true");
        assert_eq!(map.get("note"), "");
        assert_eq!(map.get("user.region.code"), "eu");
        assert_eq!(map.get("user"), "");
    }

    #[test]
    fn test_from_json_value_rejects_arrays() {
        let err = Map::from_json_value(&json!({"user": {"tags": ["a"]}})).unwrap_err();
        match err {
            ParamsError::UnsupportedValue { key } => assert_eq!(key, "user.tags"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_json_value_rejects_colliding_keys() {
        let err = Map::from_json_str(r#"{"a": {"b": "nested"}, "a.b": "flat"}"#).unwrap_err();
        match err {
            ParamsError::DuplicateKey { key } => assert_eq!(key, "a.b"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_hash_map() {
        let entries = HashMap::from([("role".to_string(), "owner".to_string())]);
        assert_eq!(Map::from(entries).get("role"), "owner");
    }

    #[test]
    fn test_from_json_value_requires_object() {
        assert!(matches!(
            Map::from_json_value(&json!("role")),
            Err(ParamsError::NotAnObject)
        ));
    }

    #[test]
    fn test_from_json_str() {
        let map = Map::from_json_str(r#"{"role": "owner"}"#).unwrap();
        assert_eq!(map.get("role"), "owner");

        assert!(matches!(
            Map::from_json_str("{not json"),
            Err(ParamsError::Json(_))
        ));
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
role: admin
suspended: false
limits:
  daily: 10
"#;
        let map = Map::from_yaml_str(yaml).unwrap();
        assert_eq!(map.get("role"), "admin");
        assert_eq!(map.get("suspended"), "false");
        assert_eq!(map.get("limits.daily"), "10");
    }

    #[test]
    fn test_from_yaml_str_empty_document() {
        assert!(Map::from_yaml_str("").unwrap().is_empty());
        assert!(Map::from_yaml_str("# no parameters yet\n").unwrap().is_empty());
        assert!(matches!(
            Map::from_yaml_str("- admin\n"),
            Err(ParamsError::NotAnObject)
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Map::load("/nonexistent/params.json"),
            Err(ParamsError::Io(_))
        ));
    }
}
