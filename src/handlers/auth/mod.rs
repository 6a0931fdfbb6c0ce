pub mod current;
pub mod login;
pub mod logout;
pub mod register;
pub mod utils;

// Re-export handler functions for use in routing
pub use current::current as current_user;
pub use login::login;
pub use logout::logout;
pub use register::register;
