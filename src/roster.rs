//! Arquivo de escala: importação, exportação e reparo dos dados.
//!
//! O [`Roster`] é o documento JSON `{ workers, rooms, exportedAt, version }`
//! usado para backup e restauração. Ao importar, os dados passam por
//! normalização (ids duplicados, flag de coordenador, salas inexistentes)
//! e validação antes de chegar ao alocador.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{MontagemError, ValidationError};
use crate::model::{Assignment, Role, Room, RoomType, Worker};

/// Versão do formato gravada nos arquivos exportados.
pub const FORMAT_VERSION: &str = "1.0";

fn default_version() -> String {
    FORMAT_VERSION.to_string()
}

/// Documento completo com trabalhadores e salas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub workers: Vec<Worker>,
    pub rooms: Vec<Room>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(default = "default_version")]
    pub version: String,
}

impl Roster {
    pub fn new(workers: Vec<Worker>, rooms: Vec<Room>) -> Self {
        Self {
            workers,
            rooms,
            exported_at: None,
            version: default_version(),
        }
    }

    /// Interpreta, normaliza e valida um documento JSON.
    pub fn from_json(json: &str) -> Result<Self, MontagemError> {
        let mut roster: Roster = serde_json::from_str(json)?;
        roster.normalize();
        roster.validate()?;
        Ok(roster)
    }

    /// Carrega o documento do caminho informado.
    pub fn load(path: &Path) -> Result<Self, MontagemError> {
        let contents = std::fs::read_to_string(path)?;
        let roster = Self::from_json(&contents)?;
        debug!(
            path = %path.display(),
            workers = roster.workers.len(),
            rooms = roster.rooms.len(),
            "Roster loaded"
        );
        Ok(roster)
    }

    /// Serializa uma cópia do documento com `exportedAt` no instante atual.
    pub fn export(&self) -> Result<String, MontagemError> {
        let stamped = Roster {
            exported_at: Some(Utc::now()),
            ..self.clone()
        };
        Ok(serde_json::to_string_pretty(&stamped)?)
    }

    /// Grava o documento exportado no caminho informado.
    pub fn save(&self, path: &Path) -> Result<(), MontagemError> {
        let json = self.export()?;
        std::fs::write(path, json)?;
        debug!(path = %path.display(), "Roster saved");
        Ok(())
    }

    /// Repara dados corrompidos ou herdados de versões antigas.
    ///
    /// - ids vazios ou repetidos recebem um id novo `fixed-<uuid>`;
    /// - a tag `Coordenador` vira a flag `is_coordinator`;
    /// - ausentes e salas inexistentes perdem a sala atribuída.
    pub fn normalize(&mut self) {
        let room_ids: HashSet<String> = self.rooms.iter().map(|r| r.id.clone()).collect();
        let mut seen: HashSet<String> = HashSet::new();

        for worker in &mut self.workers {
            if worker.id.is_empty() || seen.contains(&worker.id) {
                let fixed = format!("fixed-{}", Uuid::new_v4());
                warn!(old = %worker.id, new = %fixed, name = %worker.name, "Repaired worker id");
                worker.id = fixed;
            }
            seen.insert(worker.id.clone());

            if worker.unify_coordinator() {
                debug!(worker = %worker.id, "Coordenador tag folded into coordinator flag");
            }

            if !worker.present {
                worker.assigned_room_id = None;
            }
            if let Some(room_id) = &worker.assigned_room_id
                && !room_ids.contains(room_id)
            {
                warn!(worker = %worker.id, room = %room_id, "Cleared assignment to unknown room");
                worker.assigned_room_id = None;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for worker in &self.workers {
            if worker.name.trim().is_empty() {
                return Err(ValidationError::EmptyWorkerName {
                    id: worker.id.clone(),
                });
            }
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for room in &self.rooms {
            if room.id.is_empty() {
                return Err(ValidationError::EmptyRoomId {
                    name: room.name.clone(),
                });
            }
            if room.name.trim().is_empty() {
                return Err(ValidationError::EmptyRoomName {
                    id: room.id.clone(),
                });
            }
            if room.capacity == 0 {
                return Err(ValidationError::ZeroCapacity {
                    id: room.id.clone(),
                });
            }
            if !seen.insert(room.id.as_str()) {
                return Err(ValidationError::DuplicateRoomId(room.id.clone()));
            }
        }
        Ok(())
    }

    /// Aplica uma montagem: quem não aparece em `assignments` fica sem sala.
    pub fn apply(&mut self, assignments: &[Assignment]) {
        for worker in &mut self.workers {
            worker.assigned_room_id = assignments
                .iter()
                .find(|a| a.worker_id == worker.id)
                .map(|a| a.room_id.clone());
        }
    }

    /// Remove todas as atribuições de sala.
    pub fn clear_assignments(&mut self) {
        for worker in &mut self.workers {
            worker.assigned_room_id = None;
        }
    }

    /// Escala de exemplo: duas salas de passe, recepção e palestra.
    pub fn sample() -> Self {
        let w = |id: &str, name: &str, role: Role| Worker::new(id, name, vec![role]);
        let workers = vec![
            w("1", "Ana Silva", Role::Medium).coordinator(),
            w("2", "Carlos Souza", Role::Medium),
            w("3", "Beatriz Lima", Role::Dialogo),
            w("4", "Davi Rocha", Role::Sustentacao),
            w("5", "Elisa Costa", Role::Dialogo).coordinator(),
            w("6", "Felipe Almeida", Role::Medium),
            w("7", "Gabriela Dias", Role::Sustentacao),
            w("8", "Heitor Pereira", Role::Recepcao),
            w("9", "Isabela Gomes", Role::Recepcao),
            w("10", "Júlia Martins", Role::Dialogo),
            w("11", "Lucas Fernandes", Role::Sustentacao),
        ];
        let rooms = vec![
            Room::passe("room1", "Sala de Passe 1", 8),
            Room::passe("room2", "Sala de Passe 2", 8),
            Room::new("loc1", "Recepção", RoomType::Outros, 5),
            Room::new("loc2", "Palestra", RoomType::Outros, 50),
        ];
        Self::new(workers, rooms)
    }
}
