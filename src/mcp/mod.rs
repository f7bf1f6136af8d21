//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes translation lookup and patient progress to AI assistants over
//! stdio.
//!
//! ## Module Structure
//!
//! - `server`: MCP server and its tools
//! - `types`: tool parameter and result types

mod server;
pub mod types;

pub use server::{OasisMcpServer, run_server};
