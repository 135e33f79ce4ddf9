pub mod handle_frame_message;
pub mod reminder_check;
pub mod schedule_reminder;
pub mod send_contact_message;
pub mod watch_frame_load;
