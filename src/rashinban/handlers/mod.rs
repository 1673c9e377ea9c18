pub mod analyze;
pub use self::analyze::analyze_csv;

pub mod health;
pub use self::health::health;

pub mod login;
pub use self::login::login;

pub mod logout;
pub use self::logout::logout;

pub mod root;
pub use self::root::root;

pub mod types;
