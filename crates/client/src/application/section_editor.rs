//! Detail section editor
//!
//! Every edit works on a copy of the parent entity and is persisted by
//! replacing the whole document. Unknown section or attribute ids fail
//! before anything is sent.

use authortools_domain::{
    Attribute, AttributeId, DetailSection, DomainError, Entity, EntityKind, SectionId,
    SectionUpdate,
};

use crate::application::data::EntityData;
use crate::application::ServiceError;

#[derive(Clone)]
pub struct SectionEditor {
    data: EntityData,
}

/// Log and convert a lookup failure; these are not shown to the user
fn located(kind: EntityKind, edited: Result<Entity, DomainError>) -> Result<Entity, ServiceError> {
    edited.map_err(|e| {
        tracing::error!(%kind, error = %e, "Section edit referenced a missing id");
        ServiceError::Domain(e)
    })
}

impl SectionEditor {
    pub fn new(data: EntityData) -> Self {
        Self { data }
    }

    pub async fn add_section(
        &self,
        kind: EntityKind,
        entity: &Entity,
        section: DetailSection,
    ) -> Result<Entity, ServiceError> {
        self.data.update(kind, entity.with_section_added(section)).await
    }

    /// Replace a section's title, type and note content
    pub async fn edit_section(
        &self,
        kind: EntityKind,
        entity: &Entity,
        section_id: &SectionId,
        update: SectionUpdate,
    ) -> Result<Entity, ServiceError> {
        let next = located(kind, entity.with_section_edited(section_id, update))?;
        self.data.update(kind, next).await
    }

    /// Remove a section together with its attributes
    pub async fn delete_section(
        &self,
        kind: EntityKind,
        entity: &Entity,
        section_id: &SectionId,
    ) -> Result<Entity, ServiceError> {
        let next = located(kind, entity.without_section(section_id))?;
        self.data.update(kind, next).await
    }

    pub async fn move_section(
        &self,
        kind: EntityKind,
        entity: &Entity,
        section_id: &SectionId,
        to_index: usize,
    ) -> Result<Entity, ServiceError> {
        let next = located(kind, entity.with_section_moved(section_id, to_index))?;
        self.data.update(kind, next).await
    }

    /// Append a new attribute with a fresh client-side id
    pub async fn add_attribute(
        &self,
        kind: EntityKind,
        entity: &Entity,
        section_id: &SectionId,
        label: &str,
        value: &str,
    ) -> Result<Entity, ServiceError> {
        let attribute = Attribute::new(label, value);
        let next = located(kind, entity.with_attribute_added(section_id, attribute))?;
        self.data.update(kind, next).await
    }

    pub async fn edit_attribute(
        &self,
        kind: EntityKind,
        entity: &Entity,
        section_id: &SectionId,
        attribute_id: &AttributeId,
        label: &str,
        value: &str,
    ) -> Result<Entity, ServiceError> {
        let next = located(
            kind,
            entity.with_attribute_edited(section_id, attribute_id, label, value),
        )?;
        self.data.update(kind, next).await
    }

    pub async fn delete_attribute(
        &self,
        kind: EntityKind,
        entity: &Entity,
        section_id: &SectionId,
        attribute_id: &AttributeId,
    ) -> Result<Entity, ServiceError> {
        let next = located(kind, entity.without_attribute(section_id, attribute_id))?;
        self.data.update(kind, next).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::application::query::QueryCache;
    use crate::application::services::EntityService;
    use crate::ports::outbound::{MockNotificationPort, MockRawApiPort};
    use authortools_domain::SectionType;
    use std::sync::Arc;

    fn editor(raw: MockRawApiPort) -> SectionEditor {
        let mut notifier = MockNotificationPort::new();
        notifier.expect_notify().never();
        SectionEditor::new(EntityData::new(
            EntityService::new(Api::new(Arc::new(raw))),
            QueryCache::new(),
            Arc::new(notifier),
        ))
    }

    fn echoing_put() -> MockRawApiPort {
        let mut raw = MockRawApiPort::new();
        raw.expect_put_json()
            .withf(|path, _| path == "/character/c1")
            .times(1)
            .returning(|_, body| Ok(body.clone()));
        raw
    }

    fn hero() -> Entity {
        Entity::new("c1", "w1", "Ada", 1)
            .with_section(DetailSection::attributes("Stats").with_attribute("Age", "36"))
            .with_section(DetailSection::note("Backstory", "Born in London"))
    }

    #[tokio::test]
    async fn adding_attribute_to_unknown_section_fails_before_any_request() {
        let mut raw = MockRawApiPort::new();
        raw.expect_put_json().never();
        raw.expect_patch_no_response_json().never();

        let err = editor(raw)
            .add_attribute(
                EntityKind::Character,
                &hero(),
                &SectionId::from("missing"),
                "Height",
                "1.65m",
            )
            .await
            .unwrap_err();

        assert!(err.is_invariant_violation());
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn add_attribute_replaces_the_whole_entity() {
        let entity = hero();
        let stats = entity.detail_sections[0].id.clone();

        let saved = editor(echoing_put())
            .add_attribute(EntityKind::Character, &entity, &stats, "Height", "1.65m")
            .await
            .unwrap();

        let attributes = &saved.detail_sections[0].attributes;
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes[1].label, "Height");
        assert_ne!(attributes[1].id, attributes[0].id);
        // Input entity is untouched
        assert_eq!(entity.detail_sections[0].attributes.len(), 1);
    }

    #[tokio::test]
    async fn deleting_a_section_drops_its_attributes() {
        let entity = hero();
        let stats = entity.detail_sections[0].id.clone();

        let saved = editor(echoing_put())
            .delete_section(EntityKind::Character, &entity, &stats)
            .await
            .unwrap();

        assert_eq!(saved.detail_sections.len(), 1);
        assert_eq!(saved.detail_sections[0].title, "Backstory");
    }

    #[tokio::test]
    async fn edit_section_switches_type_and_content() {
        let entity = hero();
        let stats = entity.detail_sections[0].id.clone();

        let saved = editor(echoing_put())
            .edit_section(
                EntityKind::Character,
                &entity,
                &stats,
                SectionUpdate {
                    title: "Notes".into(),
                    section_type: SectionType::Note,
                    note_content: Some("Prefers tea".into()),
                },
            )
            .await
            .unwrap();

        assert!(saved.detail_sections[0].is_note());
        assert_eq!(saved.detail_sections[0].note_content.as_deref(), Some("Prefers tea"));
    }

    #[tokio::test]
    async fn move_section_reorders_sections() {
        let entity = hero();
        let backstory = entity.detail_sections[1].id.clone();

        let saved = editor(echoing_put())
            .move_section(EntityKind::Character, &entity, &backstory, 0)
            .await
            .unwrap();

        assert_eq!(saved.detail_sections[0].title, "Backstory");
    }

    #[tokio::test]
    async fn editing_unknown_attribute_fails_before_any_request() {
        let entity = hero();
        let stats = entity.detail_sections[0].id.clone();
        let mut raw = MockRawApiPort::new();
        raw.expect_put_json().never();

        let err = editor(raw)
            .edit_attribute(
                EntityKind::Character,
                &entity,
                &stats,
                &AttributeId::from("nope"),
                "Age",
                "37",
            )
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
