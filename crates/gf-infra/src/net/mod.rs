mod mail_relay;
mod push_client;

pub use mail_relay::HttpMailRelay;
pub use push_client::HttpPushClient;
