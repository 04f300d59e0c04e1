//! Library half of the `gridpath` command-line tool.
//!
//! - [`request`]: decoding and validating JSON path requests, dispatching
//!   them to the search engine by strategy name, and timing the search.
//! - [`render`]: plain-text drawing of a grid with its search trace.
//! - [`trace`]: stepping forwards and backwards through a finished search.

pub mod render;
pub mod request;
pub mod trace;

pub use render::Board;
pub use request::{Job, MAX_CELLS, PathRequest, PathResponse, RequestError};
pub use trace::{Frame, TraceCursor};
