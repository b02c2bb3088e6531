//! Transport layer for the MCP server.
//!
//! MCP servers of this kind speak over standard input/output; the
//! orchestrating client owns the process and its pipes. The transport
//! binds the server handler to those streams and runs until the client
//! disconnects.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
