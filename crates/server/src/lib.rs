//! Server crate for the reel-chat recommendation engine.
//!
//! This crate contains the orchestrator that runs one chat turn end to end,
//! the per-user session store, and the engine configuration.
//!
//! ## Example Usage
//! ```ignore
//! use server::{ChatOrchestrator, EngineConfig, SessionStore};
//!
//! let orchestrator = ChatOrchestrator::new(Arc::new(Catalog::sample()?), EngineConfig::default())?;
//! let store = SessionStore::new();
//! let turn = orchestrator.chat(&store, "alice", "I love action movies");
//! println!("{}", turn.response);
//! ```

pub mod config;
pub mod orchestrator;
pub mod response;
pub mod session;

pub use config::EngineConfig;
pub use orchestrator::{ChatOrchestrator, Turn};
pub use session::SessionStore;
