use thiserror::Error;

#[derive(Debug, Error)]
pub enum MontagemError {
    #[error("Invalid roster: {0}")]
    Invalid(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shape problems caught when a roster is loaded, before any allocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("worker {id} has an empty name")]
    EmptyWorkerName { id: String },

    #[error("room {id} has an empty name")]
    EmptyRoomName { id: String },

    #[error("room id is empty (room \"{name}\")")]
    EmptyRoomId { name: String },

    #[error("room id {0} is used more than once")]
    DuplicateRoomId(String),

    #[error("room {id} must have a positive capacity")]
    ZeroCapacity { id: String },
}
