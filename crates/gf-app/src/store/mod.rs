mod actor;

pub use actor::{spawn, CheckInStore};
