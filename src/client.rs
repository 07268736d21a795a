mod email_client;

pub use self::email_client::*;
