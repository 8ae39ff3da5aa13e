//! Entity - a character, creature or location record
//!
//! All three kinds share one document shape: a header (name, avatar,
//! workspace, display order) plus a list of detail sections. Nested edits
//! never mutate in place: each `with_*`/`without_*` helper returns a new
//! document that the caller sends back as a full replace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::detail_section::{Attribute, DetailSection, SectionUpdate};
use crate::error::DomainError;
use crate::ids::{AttributeId, EntityId, FileId, SectionId, WorkspaceId};
use crate::ordering::{move_item, Ordered};

/// The kinds of entity an author can manage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Character,
    Creature,
    Location,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [Self::Character, Self::Creature, Self::Location];

    /// REST path segment for this kind
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Creature => "creature",
            Self::Location => "location",
        }
    }

    /// Human-readable singular label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Creature => "Creature",
            Self::Location => "Location",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" | "characters" => Ok(Self::Character),
            "creature" | "creatures" => Ok(Self::Creature),
            "location" | "locations" => Ok(Self::Location),
            other => Err(DomainError::parse(format!("Unknown entity kind: {}", other))),
        }
    }
}

/// A narrative entity document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub image_file_id: Option<FileId>,
    pub workspace_id: WorkspaceId,
    /// Dense 1-based display position among workspace siblings
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub detail_sections: Vec<DetailSection>,
}

impl Entity {
    pub fn new(
        id: impl Into<EntityId>,
        workspace_id: impl Into<WorkspaceId>,
        name: impl Into<String>,
        order: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_file_id: None,
            workspace_id: workspace_id.into(),
            order,
            detail_sections: Vec::new(),
        }
    }

    pub fn with_image(mut self, file_id: impl Into<FileId>) -> Self {
        self.image_file_id = Some(file_id.into());
        self
    }

    pub fn with_section(mut self, section: DetailSection) -> Self {
        self.detail_sections.push(section);
        self
    }

    /// Get section by ID
    pub fn get_section(&self, section_id: &SectionId) -> Option<&DetailSection> {
        self.detail_sections.iter().find(|s| &s.id == section_id)
    }

    fn section_index(&self, section_id: &SectionId) -> Result<usize, DomainError> {
        self.detail_sections
            .iter()
            .position(|s| &s.id == section_id)
            .ok_or_else(|| DomainError::not_found("DetailSection", section_id.as_str()))
    }

    fn section_mut(&mut self, section_id: &SectionId) -> Result<&mut DetailSection, DomainError> {
        let index = self.section_index(section_id)?;
        Ok(&mut self.detail_sections[index])
    }

    /// Copy of this entity with `section` appended
    pub fn with_section_added(&self, section: DetailSection) -> Self {
        let mut next = self.clone();
        next.detail_sections.push(section);
        next
    }

    /// Copy of this entity with the section's title, type and note replaced
    pub fn with_section_edited(
        &self,
        section_id: &SectionId,
        update: SectionUpdate,
    ) -> Result<Self, DomainError> {
        let mut next = self.clone();
        next.section_mut(section_id)?.apply(update);
        Ok(next)
    }

    /// Copy of this entity without the section (and all of its attributes)
    pub fn without_section(&self, section_id: &SectionId) -> Result<Self, DomainError> {
        let index = self.section_index(section_id)?;
        let mut next = self.clone();
        next.detail_sections.remove(index);
        Ok(next)
    }

    /// Copy of this entity with the section moved to `to_index`
    ///
    /// Indices past the end clamp to the last position.
    pub fn with_section_moved(
        &self,
        section_id: &SectionId,
        to_index: usize,
    ) -> Result<Self, DomainError> {
        let from = self.section_index(section_id)?;
        let mut next = self.clone();
        let last = next.detail_sections.len().saturating_sub(1);
        move_item(&mut next.detail_sections, from, to_index.min(last));
        Ok(next)
    }

    /// Copy of this entity with `attribute` appended to the section
    pub fn with_attribute_added(
        &self,
        section_id: &SectionId,
        attribute: Attribute,
    ) -> Result<Self, DomainError> {
        let mut next = self.clone();
        next.section_mut(section_id)?.attributes.push(attribute);
        Ok(next)
    }

    /// Copy of this entity with one attribute's label and value replaced
    pub fn with_attribute_edited(
        &self,
        section_id: &SectionId,
        attribute_id: &AttributeId,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let mut next = self.clone();
        let attribute = next.section_mut(section_id)?.attribute_mut(attribute_id)?;
        attribute.label = label.into();
        attribute.value = value.into();
        Ok(next)
    }

    /// Copy of this entity without one attribute
    pub fn without_attribute(
        &self,
        section_id: &SectionId,
        attribute_id: &AttributeId,
    ) -> Result<Self, DomainError> {
        let mut next = self.clone();
        let section = next.section_mut(section_id)?;
        let index = section
            .attributes
            .iter()
            .position(|a| &a.id == attribute_id)
            .ok_or_else(|| DomainError::not_found("Attribute", attribute_id.as_str()))?;
        section.attributes.remove(index);
        Ok(next)
    }
}

impl Ordered for Entity {
    type Id = EntityId;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}
