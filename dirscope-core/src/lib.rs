pub mod ignore;
pub mod path;
pub mod reader;
pub mod session;
pub mod tools;
pub mod tree;
pub mod walker;

// Public library API - the server binary builds its registry from these.
pub use ignore::{IgnoreList, Pattern};
pub use session::{shared_session, InspectSession, SharedSession};
pub use tools::list_structure::ListStructureTool;
pub use tools::read_files::ReadFilesTool;
pub use tools::registry::{ToolDefinition, ToolRegistry};
pub use tools::r#trait::{ToolExecutor, ToolOutput, ToolRequest};
