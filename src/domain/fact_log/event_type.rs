//! Event and entity classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::foundation::{DogId, LitterId, PuppyId};

/// Kind of occurrence recorded in the fact log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Heat,
    Mating,
    PregnancyTest,
    Birth,
    Weighing,
    Vaccine,
    Deworming,
    VetVisit,
    Microchip,
    Weaning,
    Sale,
    Death,
    Note,
}

impl EventType {
    /// Event types that make up a dog's reproduction history.
    pub const REPRODUCTIVE: [EventType; 4] = [
        EventType::Heat,
        EventType::Mating,
        EventType::PregnancyTest,
        EventType::Birth,
    ];

    pub fn is_reproductive(&self) -> bool {
        Self::REPRODUCTIVE.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Heat => "heat",
            EventType::Mating => "mating",
            EventType::PregnancyTest => "pregnancy_test",
            EventType::Birth => "birth",
            EventType::Weighing => "weighing",
            EventType::Vaccine => "vaccine",
            EventType::Deworming => "deworming",
            EventType::VetVisit => "vet_visit",
            EventType::Microchip => "microchip",
            EventType::Weaning => "weaning",
            EventType::Sale => "sale",
            EventType::Death => "death",
            EventType::Note => "note",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let event_type = match value {
            "heat" => EventType::Heat,
            "mating" => EventType::Mating,
            "pregnancy_test" => EventType::PregnancyTest,
            "birth" => EventType::Birth,
            "weighing" => EventType::Weighing,
            "vaccine" => EventType::Vaccine,
            "deworming" => EventType::Deworming,
            "vet_visit" => EventType::VetVisit,
            "microchip" => EventType::Microchip,
            "weaning" => EventType::Weaning,
            "sale" => EventType::Sale,
            "death" => EventType::Death,
            "note" => EventType::Note,
            _ => return None,
        };
        Some(event_type)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of entity an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Dog,
    Litter,
    Puppy,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Dog => "dog",
            EntityType::Litter => "litter",
            EntityType::Puppy => "puppy",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dog" => Some(EntityType::Dog),
            "litter" => Some(EntityType::Litter),
            "puppy" => Some(EntityType::Puppy),
            _ => None,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The single entity that owns an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub entity_type: EntityType,
    pub entity_id: Uuid,
}

impl EntityRef {
    pub fn dog(id: DogId) -> Self {
        Self {
            entity_type: EntityType::Dog,
            entity_id: *id.as_uuid(),
        }
    }

    pub fn litter(id: LitterId) -> Self {
        Self {
            entity_type: EntityType::Litter,
            entity_id: *id.as_uuid(),
        }
    }

    pub fn puppy(id: PuppyId) -> Self {
        Self {
            entity_type: EntityType::Puppy,
            entity_id: *id.as_uuid(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.entity_id)
    }
}
