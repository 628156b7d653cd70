//! Domain description entities

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Attributes collected per entity name, in the order the entities were first named
///
/// Serialized as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap(Vec<(String, Vec<String>)>);

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attributes of `entity`, keeping its position when already present
    pub fn insert(&mut self, entity: impl Into<String>, attributes: Vec<String>) {
        let entity = entity.into();
        match self.0.iter_mut().find(|(name, _)| *name == entity) {
            Some((_, existing)) => *existing = attributes,
            None => self.0.push((entity, attributes)),
        }
    }

    /// Add attributes to `entity`, appending the entity when it is new
    pub fn extend_entity(&mut self, entity: &str, attributes: impl IntoIterator<Item = String>) {
        match self.0.iter_mut().find(|(name, _)| name.as_str() == entity) {
            Some((_, existing)) => existing.extend(attributes),
            None => self.0.push((entity.to_string(), attributes.into_iter().collect())),
        }
    }

    pub fn get(&self, entity: &str) -> Option<&Vec<String>> {
        self.0
            .iter()
            .find(|(name, _)| name.as_str() == entity)
            .map(|(_, attributes)| attributes)
    }

    pub fn contains_key(&self, entity: &str) -> bool {
        self.get(entity).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, Vec<String>)> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = &'a (String, Vec<String>);
    type IntoIter = std::slice::Iter<'a, (String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (entity, attributes) in &self.0 {
            map.serialize_entry(entity, attributes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributeMapVisitor;

        impl<'de> Visitor<'de> for AttributeMapVisitor {
            type Value = AttributeMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of entity names to attribute lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = AttributeMap::new();
                while let Some((entity, attributes)) = access.next_entry::<String, Vec<String>>()? {
                    map.extend_entity(&entity, attributes);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(AttributeMapVisitor)
    }
}

/// A concept of the modeled domain (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<String>) -> Self {
        self.attributes = attributes;
        self
    }
}

/// A directed, labeled link between two concepts (Value Object)
///
/// Written by users and rendered back as `Source (label) Target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub source: String,
    pub relationship: String,
    pub target: String,
}

impl Relationship {
    pub fn new(
        source: impl Into<String>,
        relationship: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            relationship: relationship.into(),
            target: target.into(),
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) {}", self.source, self.relationship, self.target)
    }
}

/// The finished structured summary handed to generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainDescription {
    pub domain: String,
    pub entities: Vec<Entity>,
    pub relationships: Vec<Relationship>,
}

impl DomainDescription {
    pub fn entity_names(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.name.as_str()).collect()
    }

    /// True when at least one entity carries attributes
    pub fn has_attributes(&self) -> bool {
        self.entities.iter().any(|e| !e.attributes.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_name_is_trimmed() {
        assert_eq!(Entity::new("  Bike ").name, "Bike");
    }

    #[test]
    fn test_relationship_display() {
        let rel = Relationship::new("Bike", "owned by", "Rider");
        assert_eq!(rel.to_string(), "Bike (owned by) Rider");
    }

    #[test]
    fn test_attribute_map_keeps_insertion_order() {
        let mut attrs = AttributeMap::new();
        attrs.insert("Zebra", vec!["stripes".into()]);
        attrs.insert("Ape", vec!["fur".into()]);
        attrs.extend_entity("Zebra", vec!["legs".to_string()]);

        let names: Vec<&str> = attrs.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Ape"]);
        assert_eq!(attrs.get("Zebra").unwrap(), &vec!["stripes", "legs"]);
        assert_eq!(
            serde_json::to_string(&attrs).unwrap(),
            r#"{"Zebra":["stripes","legs"],"Ape":["fur"]}"#
        );
        let back: AttributeMap = serde_json::from_str(r#"{"Zebra":["stripes","legs"],"Ape":["fur"]}"#).unwrap();
        assert_eq!(back, attrs);
    }

    #[test]
    fn test_entity_serializes_without_empty_attributes() {
        let json = serde_json::to_value(Entity::new("Bike")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Bike"}));
    }

    #[test]
    fn test_has_attributes() {
        let mut desc = DomainDescription {
            domain: "cycling".to_string(),
            entities: vec![Entity::new("Bike"), Entity::new("Rider")],
            relationships: vec![],
        };
        assert!(!desc.has_attributes());
        desc.entities[1].attributes.push("name".to_string());
        assert!(desc.has_attributes());
        assert_eq!(desc.entity_names(), vec!["Bike", "Rider"]);
    }
}
