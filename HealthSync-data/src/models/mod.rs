pub mod account;
pub mod otp;
pub mod session;

pub use account::AccountRecord;
pub use otp::OtpRecord;
pub use session::SessionRecord;
