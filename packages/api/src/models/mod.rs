//! Response types returned by the backend.

mod contact;
mod drive;
mod mail;
mod photo;
mod user;

pub use contact::Contact;
pub use drive::DriveFile;
pub use mail::MailMessage;
pub use photo::Photo;
pub use user::UserInfo;
