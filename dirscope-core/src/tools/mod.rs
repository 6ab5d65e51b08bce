pub mod list_structure;
pub mod read_files;
pub mod registry;
pub mod r#trait;
