pub mod format;
pub mod palette;
pub mod platform;
pub mod session;
