pub mod login;
pub mod parse;
pub mod receive;
pub mod refresh;

pub use login::handle_login;
pub use parse::handle_parse;
pub use receive::handle_receive;
pub use refresh::handle_refresh;
