pub mod analyzer;
pub mod calls;
pub mod config;
pub mod graph;
pub mod scanner;

pub use analyzer::{Analysis, CodebaseAnalyzer};
pub use calls::{CallExtractor, CalleeShape};
pub use config::ProjectConfig;
pub use graph::{CallEdge, CallGraph, Definition, DependencyGraph, FunctionNode, GraphBuilder};
pub use scanner::{FileInfo, FileScanner};
