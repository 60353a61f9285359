mod modal_overlay;
pub use modal_overlay::ModalOverlay;

pub mod backend_list;

pub mod dashboard;
pub use dashboard::Dashboard;

mod notes;
pub use notes::NotesView;

pub mod reminders;
pub use reminders::RemindersView;

pub mod contacts;
pub use contacts::ContactsView;

mod mail;
pub use mail::MailView;

pub mod drive;
pub use drive::DriveView;

mod photos;
pub use photos::PhotosView;
