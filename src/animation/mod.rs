pub mod change;
pub mod driver;
pub mod timeline;
