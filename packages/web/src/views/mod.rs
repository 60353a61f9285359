mod login;
pub use login::Login;

mod app_layout;
pub use app_layout::AppLayout;

mod not_found;
pub use not_found::NotFound;
