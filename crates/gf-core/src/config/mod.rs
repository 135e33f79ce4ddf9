mod app_config;

pub use app_config::{
    AppConfig, FrameConfig, MailConfig, PushConfig, ReminderConfig, StorageConfig,
};
