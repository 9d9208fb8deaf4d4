//! Ordering and grouping of an assembly for display.

use std::collections::HashMap;

use crate::model::{Assignment, Role, Room, Worker};

/// Rank given to workers with no listed role, or unknown ids.
const UNRANKED: usize = Role::DISPLAY_ORDER.len() + 1;

/// Coordinator first, then the first matching tag in display order.
pub fn role_priority(worker: &Worker) -> usize {
    if worker.is_coordinator {
        return 0;
    }
    Role::DISPLAY_ORDER
        .iter()
        .position(|role| worker.roles.contains(role))
        .map_or(UNRANKED, |i| i + 1)
}

/// Sorts assignments by room id, then by the worker's role priority.
///
/// The sort is stable, so workers of equal rank keep their claim order.
pub fn shape(mut assignments: Vec<Assignment>, workers: &[Worker]) -> Vec<Assignment> {
    let by_id: HashMap<&str, &Worker> = workers.iter().map(|w| (w.id.as_str(), w)).collect();
    let rank = |a: &Assignment| {
        by_id
            .get(a.worker_id.as_str())
            .map_or(UNRANKED, |w| role_priority(w))
    };
    assignments.sort_by(|a, b| {
        a.room_id
            .cmp(&b.room_id)
            .then_with(|| rank(a).cmp(&rank(b)))
    });
    assignments
}

/// One room's occupants after an assembly.
#[derive(Debug)]
pub struct RoomOccupancy<'a> {
    pub room: &'a Room,
    pub occupants: Vec<&'a Worker>,
}

impl RoomOccupancy<'_> {
    /// Overflow into Passe rooms is allowed; this only reports it.
    pub fn over_capacity(&self) -> bool {
        self.occupants.len() > self.room.capacity as usize
    }
}

#[derive(Debug)]
pub struct AssemblyReport<'a> {
    /// Every room, in supplied order, including empty ones.
    pub rooms: Vec<RoomOccupancy<'a>>,
    /// Present workers the assembly did not place.
    pub unassigned: Vec<&'a Worker>,
}

/// Groups assignments per room. Occupants keep the order of `assignments`.
pub fn occupancy<'a>(
    rooms: &'a [Room],
    workers: &'a [Worker],
    assignments: &[Assignment],
) -> AssemblyReport<'a> {
    let by_id: HashMap<&str, &Worker> = workers.iter().map(|w| (w.id.as_str(), w)).collect();

    let rooms: Vec<RoomOccupancy<'a>> = rooms
        .iter()
        .map(|room| RoomOccupancy {
            room,
            occupants: assignments
                .iter()
                .filter(|a| a.room_id == room.id)
                .filter_map(|a| by_id.get(a.worker_id.as_str()).copied())
                .collect(),
        })
        .collect();

    let unassigned = workers
        .iter()
        .filter(|w| w.present && !assignments.iter().any(|a| a.worker_id == w.id))
        .collect();

    AssemblyReport { rooms, unassigned }
}
