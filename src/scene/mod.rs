pub mod document;
pub mod graph;
pub mod import;
pub mod model;
pub mod record;
pub mod value;
