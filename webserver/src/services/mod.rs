//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod navigator;
pub mod scheduler;
pub mod search_index;
pub mod session_registry;
pub mod static_server;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use navigator::ChannelNavigator;
pub use scheduler::TokioTransitionScheduler;
pub use search_index::KeywordSearchIndex;
pub use session_registry::RealSessionRegistry;
pub use static_server::RealStaticFileServer;
