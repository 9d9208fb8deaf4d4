use std::fmt;

use serde::{Deserialize, Serialize};

/// Room kind as edited in the room form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoomType {
    /// Primary allocation target; needs a coordinator before anyone else.
    Passe,
    #[default]
    Outros,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomType::Passe => write!(f, "Passe"),
            RoomType::Outros => write!(f, "Outros"),
        }
    }
}

/// Explicit tag for rooms reserved to a single skill.
///
/// Rooms without a tag fall back to name matching, see
/// [`NameRules`](crate::eligibility::NameRules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialization {
    Reception,
    Interview,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub room_type: RoomType,
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<Specialization>,
}

impl Room {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        room_type: RoomType,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            room_type,
            capacity,
            description: None,
            specialization: None,
        }
    }

    pub fn passe(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, name, RoomType::Passe, capacity)
    }

    #[cfg(test)]
    pub fn with_specialization(mut self, specialization: Specialization) -> Self {
        self.specialization = Some(specialization);
        self
    }
}
