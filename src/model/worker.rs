use std::fmt;

use serde::{Deserialize, Serialize};

/// Skill tags a worker can hold. A worker may hold several at once.
///
/// Serialized with the labels used by the roster files (`"Médium"`,
/// `"Diálogo"`, ...); the unaccented spellings are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Coordenador,
    #[serde(rename = "Médium", alias = "Medium")]
    Medium,
    #[serde(rename = "Diálogo", alias = "Dialogo")]
    Dialogo,
    Psicografa,
    #[serde(rename = "Sustentação", alias = "Sustentacao")]
    Sustentacao,
    #[serde(rename = "Recepção", alias = "Recepcao")]
    Recepcao,
    Entrevista,
}

impl Role {
    /// Roles handed out round-robin across Passe rooms, in priority order.
    pub const RANK_AND_FILE: [Role; 4] = [
        Role::Medium,
        Role::Dialogo,
        Role::Psicografa,
        Role::Sustentacao,
    ];

    /// Display priority used when listing a room's occupants.
    /// The coordinator flag ranks ahead of every tag and is handled by the caller.
    pub const DISPLAY_ORDER: [Role; 6] = [
        Role::Medium,
        Role::Dialogo,
        Role::Psicografa,
        Role::Sustentacao,
        Role::Recepcao,
        Role::Entrevista,
    ];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Coordenador => write!(f, "Coordenador"),
            Role::Medium => write!(f, "Médium"),
            Role::Dialogo => write!(f, "Diálogo"),
            Role::Psicografa => write!(f, "Psicografa"),
            Role::Sustentacao => write!(f, "Sustentação"),
            Role::Recepcao => write!(f, "Recepção"),
            Role::Entrevista => write!(f, "Entrevista"),
        }
    }
}

fn default_present() -> bool {
    true
}

/// A volunteer on the roster.
///
/// `is_coordinator` is the only coordinator signal the allocator reads.
/// Legacy files that carry a `Coordenador` tag are folded into the flag by
/// [`Worker::unify_coordinator`] when the roster is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub is_coordinator: bool,
    #[serde(default = "default_present")]
    pub present: bool,
    #[serde(default)]
    pub assigned_room_id: Option<String>,
}

impl Worker {
    pub fn new(id: impl Into<String>, name: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: None,
            roles,
            is_coordinator: false,
            present: true,
            assigned_room_id: None,
        }
    }

    /// Builder-style helper marking the worker as a coordinator.
    pub fn coordinator(mut self) -> Self {
        self.is_coordinator = true;
        self
    }

    /// Builder-style helper marking the worker as absent.
    #[cfg(test)]
    pub fn absent(mut self) -> Self {
        self.present = false;
        self
    }

    /// Folds a `Coordenador` tag into `is_coordinator` and drops the tag.
    /// Returns true when the worker was changed.
    pub fn unify_coordinator(&mut self) -> bool {
        let before = self.roles.len();
        self.roles.retain(|r| *r != Role::Coordenador);
        let had_tag = self.roles.len() != before;
        if had_tag {
            self.is_coordinator = true;
        }
        had_tag
    }
}
