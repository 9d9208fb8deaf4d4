//! Eligibility predicates shared by the allocator and the report.
//!
//! Worker predicates read only role, coordinator and presence data. Room
//! categorization prefers the explicit [`Specialization`] tag and falls back
//! to name fragments, since room names and types are edited independently
//! and drift apart in real rosters.

use crate::model::{Role, Room, RoomType, Specialization, Worker};

pub fn is_present(worker: &Worker) -> bool {
    worker.present
}

pub fn has_role(worker: &Worker, role: Role) -> bool {
    worker.roles.contains(&role)
}

pub fn is_coordinator_candidate(worker: &Worker) -> bool {
    worker.is_coordinator
}

/// Case- and accent-insensitive substring test against the room name.
pub fn room_matches_name_fragment(room: &Room, fragment: &str) -> bool {
    let fragment = fold(fragment);
    !fragment.is_empty() && fold(&room.name).contains(&fragment)
}

/// Lowercases and strips the Portuguese diacritics that show up in room names.
fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Name fragments used to recognize rooms that carry no explicit tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRules {
    pub reception: Vec<String>,
    pub interview: Vec<String>,
    pub passe: String,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            reception: vec!["recepção".to_string(), "recepcao".to_string()],
            interview: vec!["entrevista".to_string()],
            passe: "passe".to_string(),
        }
    }
}

impl NameRules {
    /// Passe by type, or by name when the type was never updated.
    pub fn is_passe_room(&self, room: &Room) -> bool {
        room.room_type == RoomType::Passe || room_matches_name_fragment(room, &self.passe)
    }

    /// Resolves a room's specialization. An explicit tag always wins.
    pub fn specialization(&self, room: &Room) -> Option<Specialization> {
        if room.specialization.is_some() {
            return room.specialization;
        }
        let matches_any = |fragments: &[String]| {
            fragments
                .iter()
                .any(|f| room_matches_name_fragment(room, f))
        };
        if matches_any(&self.interview) {
            Some(Specialization::Interview)
        } else if matches_any(&self.reception) {
            Some(Specialization::Reception)
        } else {
            None
        }
    }

    pub fn is_reception_room(&self, room: &Room) -> bool {
        self.specialization(room) == Some(Specialization::Reception)
    }

    pub fn is_interview_room(&self, room: &Room) -> bool {
        self.specialization(room) == Some(Specialization::Interview)
    }
}
