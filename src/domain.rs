mod contact;
mod email_address;

pub use self::contact::*;
pub use self::email_address::*;
