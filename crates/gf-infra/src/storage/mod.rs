mod checkin_state;
mod json_doc;
mod scheduling_state;

pub use checkin_state::{FileCheckInStateRepository, DEFAULT_CHECKIN_STATE_FILE};
pub use scheduling_state::{FileSchedulingStateRepository, DEFAULT_SCHEDULING_STATE_FILE};
