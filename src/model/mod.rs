mod room;
mod worker;

use serde::{Deserialize, Serialize};

pub use room::{Room, RoomType, Specialization};
pub use worker::{Role, Worker};

/// One (worker, room) pair produced by the allocator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub worker_id: String,
    pub room_id: String,
}

impl Assignment {
    pub fn new(worker_id: impl Into<String>, room_id: impl Into<String>) -> Self {
        Self {
            worker_id: worker_id.into(),
            room_id: room_id.into(),
        }
    }
}
