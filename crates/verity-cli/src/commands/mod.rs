pub mod analyze;
pub mod dispatch;
pub mod evidence;
pub mod health;
pub mod shared;
pub mod shell;
pub mod signup;
