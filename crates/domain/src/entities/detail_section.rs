//! Detail sections - free-form blocks attached to an entity
//!
//! A section is either a note (free text in `note_content`) or a list of
//! label/value attributes. Sections and attributes live inside the entity
//! document; there is no endpoint that addresses them individually.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{AttributeId, SectionId};

/// What a section renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    /// Label/value pairs
    #[default]
    Attribute,
    /// Free text
    Note,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attribute => "attribute",
            Self::Note => "note",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attribute" => Ok(Self::Attribute),
            "note" => Ok(Self::Note),
            other => Err(DomainError::parse(format!("Unknown section type: {}", other))),
        }
    }
}

/// A titled block owned by an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailSection {
    pub id: SectionId,
    pub title: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_content: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// A label/value pair owned by a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: AttributeId,
    pub label: String,
    pub value: String,
}

/// Editable fields of a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionUpdate {
    pub title: String,
    pub section_type: SectionType,
    pub note_content: Option<String>,
}

impl DetailSection {
    /// New attribute-list section with a client-generated id
    pub fn attributes(title: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(),
            title: title.into(),
            section_type: SectionType::Attribute,
            note_content: None,
            attributes: Vec::new(),
        }
    }

    /// New note section with a client-generated id
    pub fn note(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(),
            title: title.into(),
            section_type: SectionType::Note,
            note_content: Some(content.into()),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(label, value));
        self
    }

    pub fn is_note(&self) -> bool {
        self.section_type == SectionType::Note
    }

    pub fn get_attribute(&self, attribute_id: &AttributeId) -> Option<&Attribute> {
        self.attributes.iter().find(|a| &a.id == attribute_id)
    }

    pub(crate) fn attribute_mut(
        &mut self,
        attribute_id: &AttributeId,
    ) -> Result<&mut Attribute, DomainError> {
        self.attributes
            .iter_mut()
            .find(|a| &a.id == attribute_id)
            .ok_or_else(|| DomainError::not_found("Attribute", attribute_id.as_str()))
    }

    pub(crate) fn apply(&mut self, update: SectionUpdate) {
        self.title = update.title;
        self.section_type = update.section_type;
        self.note_content = update.note_content;
    }
}

impl Attribute {
    /// New attribute with a client-generated id
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: AttributeId::new(),
            label: label.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_type_wire_format_is_lowercase() {
        let section = DetailSection::note("Backstory", "Born in a lighthouse.");
        let json = serde_json::to_value(&section).unwrap();

        assert_eq!(json["type"], "note");
        assert_eq!(json["noteContent"], "Born in a lighthouse.");
        assert!(json["attributes"].as_array().unwrap().is_empty());
    }

    #[test]
    fn missing_attributes_deserialize_as_empty() {
        let json = r#"{"id":"s1","title":"Stats","type":"attribute"}"#;
        let section: DetailSection = serde_json::from_str(json).unwrap();

        assert_eq!(section.section_type, SectionType::Attribute);
        assert!(section.attributes.is_empty());
        assert!(section.note_content.is_none());
    }

    #[test]
    fn section_type_from_str() {
        assert_eq!("Note".parse::<SectionType>().unwrap(), SectionType::Note);
        assert!("table".parse::<SectionType>().is_err());
    }

    #[test]
    fn attribute_lookup_reports_missing_id() {
        let mut section = DetailSection::attributes("Stats").with_attribute("Height", "2m");
        let missing = AttributeId::from("nope");

        let err = section.attribute_mut(&missing).unwrap_err();
        assert!(err.is_not_found());
    }
}
