//! Room assembly engine.
//!
//! [`Allocator::allocate`] builds a fresh list of [`Assignment`]s from a
//! snapshot of the roster. It never touches its inputs and keeps no state
//! between runs, so identical inputs (in identical order) always produce the
//! identical output.
//!
//! A run executes these phases in order, each drawing only from workers left
//! unclaimed by the earlier ones:
//!
//! 1. Interview rooms take `Entrevista` workers up to capacity (optional).
//! 2. Reception rooms take `Recepção` workers up to capacity.
//! 3. Each Passe room that is not a reception or interview room, in
//!    supplied order, gets one coordinator. Rooms that
//!    get one become the *eligible* rooms for the rest of the run.
//! 4. `Médium`, `Diálogo`, `Psicografa` and `Sustentação` are dealt
//!    round-robin across the eligible rooms, one role at a time.
//! 5. Exhaustive mode only: every worker still unclaimed is dealt
//!    round-robin across the eligible rooms, ignoring capacity.
//!
//! Every move into the output goes through a first-match claim over the
//! present workers in input order; that is what makes runs deterministic.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::eligibility::{NameRules, has_role, is_coordinator_candidate, is_present};
use crate::model::{Assignment, Role, Room, Worker};

/// Which generation of the assembly rules to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Capacity bounds every room and leftover workers stay unassigned.
    Strict,
    /// Capacity bounds only specialized rooms; leftovers overflow into
    /// Passe rooms so no present worker is left out.
    #[default]
    Exhaustive,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Strict => write!(f, "strict"),
            Variant::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationPolicy {
    pub variant: Variant,
    /// Run the interview-room phase before reception.
    pub interview_phase: bool,
    pub rules: NameRules,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            variant: Variant::Exhaustive,
            interview_phase: true,
            rules: NameRules::default(),
        }
    }
}

/// Assigns present workers to rooms according to an [`AllocationPolicy`].
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    policy: AllocationPolicy,
}

/// Allocates with the default policy (exhaustive, interview phase on).
#[cfg(test)]
pub fn allocate(workers: &[Worker], rooms: &[Room]) -> Vec<Assignment> {
    Allocator::default().allocate(workers, rooms)
}

impl Allocator {
    pub fn new(policy: AllocationPolicy) -> Self {
        Self { policy }
    }

    /// Computes a full assembly from scratch.
    ///
    /// Stale `assigned_room_id` values on the inputs are ignored. The output
    /// holds at most one entry per worker id and is in claim order; pass it
    /// through [`shaping::shape`](crate::shaping::shape) for display.
    pub fn allocate(&self, workers: &[Worker], rooms: &[Room]) -> Vec<Assignment> {
        let rules = &self.policy.rules;
        let capped = self.policy.variant == Variant::Strict;
        let mut run = Run::new(workers);

        if self.policy.interview_phase {
            let claims: usize = rooms
                .iter()
                .filter(|room| rules.is_interview_room(room))
                .map(|room| run.fill_to_capacity(room, Role::Entrevista))
                .sum();
            debug!(phase = "interview", claims, "Phase finished");
        }

        let claims: usize = rooms
            .iter()
            .filter(|room| rules.is_reception_room(room))
            .map(|room| run.fill_to_capacity(room, Role::Recepcao))
            .sum();
        debug!(phase = "reception", claims, "Phase finished");

        // Specialized rooms keep their hard cap even when they also look like Passe.
        let passe_rooms = rooms
            .iter()
            .filter(|room| rules.is_passe_room(room) && rules.specialization(room).is_none());
        let mut eligible: Vec<&Room> = Vec::new();
        for room in passe_rooms {
            if capped && run.is_full(room) {
                continue;
            }
            if run.claim_one(room, is_coordinator_candidate) {
                eligible.push(room);
            } else {
                debug!(room = %room.id, "No coordinator left, room skipped");
            }
        }
        debug!(
            phase = "coordinator",
            eligible_rooms = eligible.len(),
            "Phase finished"
        );

        for role in Role::RANK_AND_FILE {
            let claims = run.deal_round_robin(&eligible, role, capped);
            debug!(phase = "round_robin", %role, claims, "Phase finished");
        }

        if self.policy.variant == Variant::Exhaustive {
            let claims = run.overflow(&eligible);
            debug!(phase = "overflow", claims, "Phase finished");
        }

        info!(
            variant = %self.policy.variant,
            present = run.pool.len(),
            assigned = run.assignments.len(),
            unassigned = run.pool.len() - run.claimed.len(),
            "Assembly computed"
        );

        run.assignments
    }
}

/// Scratch state for a single run.
struct Run<'a> {
    /// Present workers, in input order.
    pool: Vec<&'a Worker>,
    claimed: HashSet<&'a str>,
    occupancy: HashMap<&'a str, u32>,
    assignments: Vec<Assignment>,
}

impl<'a> Run<'a> {
    fn new(workers: &'a [Worker]) -> Self {
        Self {
            pool: workers.iter().filter(|w| is_present(w)).collect(),
            claimed: HashSet::new(),
            occupancy: HashMap::new(),
            assignments: Vec::new(),
        }
    }

    fn occupants(&self, room: &Room) -> u32 {
        self.occupancy.get(room.id.as_str()).copied().unwrap_or(0)
    }

    fn is_full(&self, room: &Room) -> bool {
        self.occupants(room) >= room.capacity
    }

    fn claim(&mut self, worker: &'a Worker, room: &'a Room) {
        self.claimed.insert(worker.id.as_str());
        *self.occupancy.entry(room.id.as_str()).or_insert(0) += 1;
        self.assignments
            .push(Assignment::new(worker.id.clone(), room.id.clone()));
    }

    /// Claims the first unclaimed worker matching `predicate` into `room`.
    fn claim_one(&mut self, room: &'a Room, predicate: impl Fn(&Worker) -> bool) -> bool {
        let found = self
            .pool
            .iter()
            .copied()
            .find(|w| !self.claimed.contains(w.id.as_str()) && predicate(*w));
        match found {
            Some(worker) => {
                self.claim(worker, room);
                true
            }
            None => false,
        }
    }

    fn fill_to_capacity(&mut self, room: &'a Room, role: Role) -> usize {
        let mut claims = 0;
        while !self.is_full(room) && self.claim_one(room, |w| has_role(w, role)) {
            claims += 1;
        }
        claims
    }

    /// Deals `role` one worker per room per cycle until a whole cycle claims
    /// nothing. With `capped`, full rooms are passed over.
    fn deal_round_robin(&mut self, rooms: &[&'a Room], role: Role, capped: bool) -> usize {
        let mut total = 0;
        loop {
            let mut cycle = 0;
            for &room in rooms {
                if capped && self.is_full(room) {
                    continue;
                }
                if self.claim_one(room, |w| has_role(w, role)) {
                    cycle += 1;
                }
            }
            if cycle == 0 {
                return total;
            }
            total += cycle;
        }
    }

    fn overflow(&mut self, rooms: &[&'a Room]) -> usize {
        if rooms.is_empty() {
            return 0;
        }
        let leftovers: Vec<&'a Worker> = self
            .pool
            .iter()
            .copied()
            .filter(|w| !self.claimed.contains(w.id.as_str()))
            .collect();
        let mut cursor = 0;
        for worker in leftovers {
            // A duplicated id may have been claimed through its twin.
            if self.claimed.contains(worker.id.as_str()) {
                continue;
            }
            self.claim(worker, rooms[cursor % rooms.len()]);
            cursor += 1;
        }
        cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RoomType, Specialization};
    use proptest::prelude::*;

    fn pairs(assignments: &[Assignment]) -> Vec<(&str, &str)> {
        assignments
            .iter()
            .map(|a| (a.worker_id.as_str(), a.room_id.as_str()))
            .collect()
    }

    fn count_in(assignments: &[Assignment], room_id: &str) -> usize {
        assignments.iter().filter(|a| a.room_id == room_id).count()
    }

    fn strict() -> Allocator {
        Allocator::new(AllocationPolicy {
            variant: Variant::Strict,
            ..AllocationPolicy::default()
        })
    }

    #[test]
    fn single_room_gets_coordinator_then_roles() {
        let workers = vec![
            Worker::new("x", "X", vec![Role::Coordenador]).coordinator(),
            Worker::new("y", "Y", vec![Role::Medium]),
            Worker::new("z", "Z", vec![Role::Dialogo]),
        ];
        let rooms = vec![Room::passe("room", "Sala 1", 4)];

        let out = allocate(&workers, &rooms);
        assert_eq!(
            pairs(&out),
            vec![("x", "room"), ("y", "room"), ("z", "room")]
        );
    }

    #[test]
    fn mediums_alternate_between_rooms() {
        let mut workers = vec![
            Worker::new("c1", "C1", vec![]).coordinator(),
            Worker::new("c2", "C2", vec![]).coordinator(),
        ];
        for i in 1..=4 {
            workers.push(Worker::new(format!("m{i}"), format!("M{i}"), vec![Role::Medium]));
        }
        let rooms = vec![Room::passe("r1", "R1", 4), Room::passe("r2", "R2", 4)];

        let out = allocate(&workers, &rooms);
        assert_eq!(
            pairs(&out),
            vec![
                ("c1", "r1"),
                ("c2", "r2"),
                ("m1", "r1"),
                ("m2", "r2"),
                ("m3", "r1"),
                ("m4", "r2"),
            ]
        );
    }

    #[test]
    fn single_room_overfills_past_capacity() {
        let mut workers = vec![Worker::new("c", "C", vec![]).coordinator()];
        for i in 0..5 {
            workers.push(Worker::new(format!("s{i}"), "S", vec![Role::Sustentacao]));
        }
        let rooms = vec![Room::passe("room", "Sala", 2)];

        let out = allocate(&workers, &rooms);
        assert_eq!(out.len(), 6);
        assert_eq!(count_in(&out, "room"), 6);
    }

    #[test]
    fn no_coordinator_leaves_everyone_unassigned() {
        let workers: Vec<Worker> = (0..3)
            .map(|i| Worker::new(format!("s{i}"), "S", vec![Role::Sustentacao]))
            .collect();
        let rooms = vec![Room::passe("room", "Sala", 4)];

        assert!(allocate(&workers, &rooms).is_empty());
    }

    #[test]
    fn absent_worker_with_stale_room_is_ignored() {
        let mut gone = Worker::new("gone", "G", vec![Role::Medium]).absent();
        gone.assigned_room_id = Some("room".to_string());
        let workers = vec![Worker::new("c", "C", vec![]).coordinator(), gone];
        let rooms = vec![Room::passe("room", "Sala", 4)];

        let out = allocate(&workers, &rooms);
        assert_eq!(pairs(&out), vec![("c", "room")]);
    }

    #[test]
    fn empty_inputs_produce_empty_output() {
        assert!(allocate(&[], &[]).is_empty());
        assert!(allocate(&[Worker::new("a", "A", vec![Role::Medium])], &[]).is_empty());
        assert!(allocate(&[], &[Room::passe("p", "P", 3)]).is_empty());
    }

    #[test]
    fn reception_is_filled_first_and_capped() {
        let workers = vec![
            Worker::new("r1", "R1", vec![Role::Recepcao]),
            Worker::new("r2", "R2", vec![Role::Recepcao, Role::Medium]),
            Worker::new("r3", "R3", vec![Role::Recepcao]),
            Worker::new("c", "C", vec![]).coordinator(),
        ];
        let rooms = vec![
            Room::passe("p", "Sala de Passe", 4),
            Room::new("rec", "Recepção", RoomType::Outros, 2),
        ];

        let out = allocate(&workers, &rooms);
        assert_eq!(
            pairs(&out),
            vec![("r1", "rec"), ("r2", "rec"), ("c", "p"), ("r3", "p")]
        );
    }

    #[test]
    fn zero_capacity_reception_takes_nobody() {
        let workers = vec![Worker::new("r", "R", vec![Role::Recepcao])];
        let rooms = vec![Room::new("rec", "Recepcao", RoomType::Outros, 0)];
        assert!(allocate(&workers, &rooms).is_empty());
    }

    #[test]
    fn interview_runs_before_reception() {
        let workers = vec![
            Worker::new("a", "A", vec![Role::Recepcao, Role::Entrevista]),
            Worker::new("b", "B", vec![Role::Recepcao]),
        ];
        let rooms = vec![
            Room::new("rec", "Recepção", RoomType::Outros, 2),
            Room::new("ent", "Sala de Entrevista", RoomType::Outros, 1),
        ];

        let out = allocate(&workers, &rooms);
        assert_eq!(pairs(&out), vec![("a", "ent"), ("b", "rec")]);
    }

    #[test]
    fn interview_phase_can_be_disabled() {
        let workers = vec![Worker::new("a", "A", vec![Role::Entrevista])];
        let rooms = vec![Room::new("ent", "Entrevista", RoomType::Outros, 1)];
        let allocator = Allocator::new(AllocationPolicy {
            interview_phase: false,
            ..AllocationPolicy::default()
        });
        assert!(allocator.allocate(&workers, &rooms).is_empty());
    }

    #[test]
    fn explicit_specialization_is_honored() {
        let workers = vec![Worker::new("a", "A", vec![Role::Recepcao])];
        let rooms = vec![
            Room::new("hall", "Hall", RoomType::Outros, 1)
                .with_specialization(Specialization::Reception),
        ];
        assert_eq!(pairs(&allocate(&workers, &rooms)), vec![("a", "hall")]);
    }

    #[test]
    fn passe_typed_reception_room_keeps_its_cap() {
        let workers = vec![
            Worker::new("r", "R", vec![Role::Recepcao]),
            Worker::new("c", "C", vec![]).coordinator(),
            Worker::new("m1", "M1", vec![Role::Medium]),
            Worker::new("m2", "M2", vec![Role::Medium]),
        ];
        let rooms = vec![Room::passe("rec", "Recepção", 1)];

        let out = allocate(&workers, &rooms);
        assert_eq!(pairs(&out), vec![("r", "rec")]);
    }

    #[test]
    fn tagged_interview_room_is_not_a_passe_target() {
        let workers = vec![
            Worker::new("c1", "C1", vec![]).coordinator(),
            Worker::new("c2", "C2", vec![]).coordinator(),
            Worker::new("e", "E", vec![Role::Entrevista]),
            Worker::new("m", "M", vec![Role::Medium]),
        ];
        let rooms = vec![
            Room::passe("ent", "Sala de Passe 9", 1).with_specialization(Specialization::Interview),
            Room::passe("p", "Sala de Passe 1", 4),
        ];

        let out = allocate(&workers, &rooms);
        assert_eq!(
            pairs(&out),
            vec![("e", "ent"), ("c1", "p"), ("m", "p"), ("c2", "p")]
        );
    }

    #[test]
    fn passe_room_detected_by_name() {
        let workers = vec![
            Worker::new("c", "C", vec![]).coordinator(),
            Worker::new("m", "M", vec![Role::Medium]),
        ];
        let rooms = vec![Room::new("p", "Sala de Passe 3", RoomType::Outros, 3)];
        assert_eq!(pairs(&allocate(&workers, &rooms)), vec![("c", "p"), ("m", "p")]);
    }

    #[test]
    fn room_without_coordinator_gets_no_rank_and_file() {
        let workers = vec![
            Worker::new("c", "C", vec![]).coordinator(),
            Worker::new("m1", "M1", vec![Role::Medium]),
            Worker::new("m2", "M2", vec![Role::Medium]),
            Worker::new("x", "X", vec![]),
        ];
        let rooms = vec![Room::passe("r1", "R1", 4), Room::passe("r2", "R2", 4)];

        let out = allocate(&workers, &rooms);
        assert_eq!(count_in(&out, "r2"), 0);
        assert_eq!(count_in(&out, "r1"), 4);
    }

    #[test]
    fn roles_are_dealt_in_priority_order() {
        let workers = vec![
            Worker::new("s", "S", vec![Role::Sustentacao]),
            Worker::new("p", "P", vec![Role::Psicografa]),
            Worker::new("d", "D", vec![Role::Dialogo]),
            Worker::new("m", "M", vec![Role::Medium]),
            Worker::new("c", "C", vec![]).coordinator(),
        ];
        let rooms = vec![Room::passe("r", "R", 10)];
        let order: Vec<String> = allocate(&workers, &rooms)
            .iter()
            .map(|a| a.worker_id.clone())
            .collect();
        assert_eq!(order, ["c", "m", "d", "p", "s"]);
    }

    #[test]
    fn overflow_cycles_through_eligible_rooms() {
        let workers = vec![
            Worker::new("c1", "C1", vec![]).coordinator(),
            Worker::new("c2", "C2", vec![]).coordinator(),
            Worker::new("c3", "C3", vec![]).coordinator(),
            Worker::new("a", "A", vec![]),
            Worker::new("b", "B", vec![]),
        ];
        let rooms = vec![Room::passe("r1", "R1", 1), Room::passe("r2", "R2", 1)];

        let out = allocate(&workers, &rooms);
        assert_eq!(
            pairs(&out),
            vec![
                ("c1", "r1"),
                ("c2", "r2"),
                ("c3", "r1"),
                ("a", "r2"),
                ("b", "r1"),
            ]
        );
    }

    #[test]
    fn strict_variant_respects_capacity_and_skips_overflow() {
        let mut workers = vec![Worker::new("c", "C", vec![]).coordinator()];
        for i in 0..5 {
            workers.push(Worker::new(format!("s{i}"), "S", vec![Role::Sustentacao]));
        }
        workers.push(Worker::new("idle", "I", vec![]));
        let rooms = vec![Room::passe("room", "Sala", 3)];

        let out = strict().allocate(&workers, &rooms);
        assert_eq!(pairs(&out), vec![("c", "room"), ("s0", "room"), ("s1", "room")]);
    }

    #[test]
    fn strict_variant_keeps_dealing_into_rooms_with_space() {
        let mut workers = vec![
            Worker::new("c1", "C1", vec![]).coordinator(),
            Worker::new("c2", "C2", vec![]).coordinator(),
        ];
        for i in 0..4 {
            workers.push(Worker::new(format!("m{i}"), "M", vec![Role::Medium]));
        }
        let rooms = vec![Room::passe("small", "Small", 2), Room::passe("big", "Big", 5)];

        let out = strict().allocate(&workers, &rooms);
        assert_eq!(count_in(&out, "small"), 2);
        assert_eq!(count_in(&out, "big"), 4);
    }

    #[test]
    fn strict_variant_skips_zero_capacity_passe_room() {
        let workers = vec![Worker::new("c", "C", vec![]).coordinator()];
        let rooms = vec![Room::passe("none", "None", 0), Room::passe("ok", "Ok", 2)];
        let out = strict().allocate(&workers, &rooms);
        assert_eq!(pairs(&out), vec![("c", "ok")]);
    }

    #[test]
    fn round_robin_spreads_roles_evenly() {
        let mut workers: Vec<Worker> = (0..3)
            .map(|i| Worker::new(format!("c{i}"), "C", vec![]).coordinator())
            .collect();
        for i in 0..7 {
            workers.push(Worker::new(format!("m{i}"), "M", vec![Role::Medium]));
        }
        let rooms: Vec<Room> = (0..3)
            .map(|i| Room::passe(format!("r{i}"), "R", 10))
            .collect();

        let out = allocate(&workers, &rooms);
        for room in &rooms {
            let mediums = out
                .iter()
                .filter(|a| a.room_id == room.id && a.worker_id.starts_with('m'))
                .count();
            assert!((2..=3).contains(&mediums), "{} got {mediums}", room.id);
        }
    }

    #[test]
    fn duplicated_worker_id_is_assigned_once() {
        let workers = vec![
            Worker::new("c", "C", vec![]).coordinator(),
            Worker::new("dup", "A", vec![]),
            Worker::new("dup", "B", vec![]),
        ];
        let rooms = vec![Room::passe("r", "R", 5)];
        let out = allocate(&workers, &rooms);
        assert_eq!(pairs(&out), vec![("c", "r"), ("dup", "r")]);
    }

    const SKILLS: [Role; 6] = [
        Role::Medium,
        Role::Dialogo,
        Role::Psicografa,
        Role::Sustentacao,
        Role::Recepcao,
        Role::Entrevista,
    ];

    fn roster_strategy() -> impl Strategy<Value = (Vec<Worker>, Vec<Room>)> {
        let worker = (
            proptest::sample::subsequence(SKILLS.to_vec(), 0..=3),
            any::<bool>(),
            proptest::bool::weighted(0.85),
        );
        let room = (0usize..7, 0u32..6);
        (
            proptest::collection::vec(worker, 0..24),
            proptest::collection::vec(room, 0..6),
        )
            .prop_map(|(workers, rooms)| {
                let workers: Vec<Worker> = workers
                    .into_iter()
                    .enumerate()
                    .map(|(i, (roles, coordinator, present))| {
                        let mut w = Worker::new(format!("w{i}"), format!("Worker {i}"), roles);
                        w.is_coordinator = coordinator;
                        w.present = present;
                        w
                    })
                    .collect();
                let rooms: Vec<Room> = rooms
                    .into_iter()
                    .enumerate()
                    .map(|(i, (kind, capacity))| match kind {
                        0 => Room::passe(format!("r{i}"), format!("Sala de Passe {i}"), capacity),
                        1 => Room::new(format!("r{i}"), "Recepção", RoomType::Outros, capacity),
                        2 => Room::new(format!("r{i}"), "Entrevista", RoomType::Outros, capacity),
                        3 => Room::passe(format!("r{i}"), "Recepção", capacity),
                        4 => Room::passe(format!("r{i}"), format!("Sala de Passe {i}"), capacity)
                            .with_specialization(Specialization::Interview),
                        5 => Room::new(format!("r{i}"), "Passe e Recepção", RoomType::Outros, capacity),
                        _ => Room::new(format!("r{i}"), "Palestra", RoomType::Outros, capacity),
                    })
                    .collect();
                (workers, rooms)
            })
    }

    fn worker<'a>(workers: &'a [Worker], id: &str) -> &'a Worker {
        workers.iter().find(|w| w.id == id).unwrap()
    }

    fn room<'a>(rooms: &'a [Room], id: &str) -> &'a Room {
        rooms.iter().find(|r| r.id == id).unwrap()
    }

    proptest! {
        #[test]
        fn repeated_runs_are_identical((workers, rooms) in roster_strategy()) {
            prop_assert_eq!(allocate(&workers, &rooms), allocate(&workers, &rooms));
        }

        #[test]
        fn nobody_is_assigned_twice((workers, rooms) in roster_strategy()) {
            let out = allocate(&workers, &rooms);
            let unique: HashSet<&str> = out.iter().map(|a| a.worker_id.as_str()).collect();
            prop_assert_eq!(unique.len(), out.len());
        }

        #[test]
        fn absent_workers_are_never_assigned((workers, rooms) in roster_strategy()) {
            for a in allocate(&workers, &rooms) {
                prop_assert!(worker(&workers, &a.worker_id).present);
            }
        }

        #[test]
        fn passe_rooms_with_occupants_have_a_coordinator((workers, rooms) in roster_strategy()) {
            let rules = NameRules::default();
            let out = allocate(&workers, &rooms);
            for a in &out {
                let target = room(&rooms, &a.room_id);
                if !rules.is_passe_room(target) || rules.specialization(target).is_some() {
                    continue;
                }
                let has_coordinator = out.iter().any(|b| {
                    b.room_id == a.room_id && worker(&workers, &b.worker_id).is_coordinator
                });
                prop_assert!(has_coordinator);
            }
        }

        #[test]
        fn specialized_rooms_respect_capacity((workers, rooms) in roster_strategy()) {
            let rules = NameRules::default();
            let out = allocate(&workers, &rooms);
            for r in rooms.iter().filter(|r| rules.specialization(r).is_some()) {
                prop_assert!(count_in(&out, &r.id) <= r.capacity as usize);
            }
        }

        #[test]
        fn everyone_present_is_placed_once_a_room_is_eligible((workers, rooms) in roster_strategy()) {
            let rules = NameRules::default();
            let out = allocate(&workers, &rooms);
            let any_eligible = out.iter().any(|a| {
                let target = room(&rooms, &a.room_id);
                rules.is_passe_room(target)
                    && rules.specialization(target).is_none()
                    && worker(&workers, &a.worker_id).is_coordinator
            });
            if any_eligible {
                let present = workers.iter().filter(|w| w.present).count();
                prop_assert_eq!(out.len(), present);
            }
        }

        #[test]
        fn strict_variant_never_exceeds_capacity((workers, rooms) in roster_strategy()) {
            let out = strict().allocate(&workers, &rooms);
            for r in &rooms {
                prop_assert!(count_in(&out, &r.id) <= r.capacity as usize);
            }
        }
    }
}
