pub mod file;
pub mod record_ref;
