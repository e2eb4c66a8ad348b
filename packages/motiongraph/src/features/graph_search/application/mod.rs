mod search_tool;

pub use search_tool::SceneSearchTool;
