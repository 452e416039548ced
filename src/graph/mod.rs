//! Traits and implementations for directed and undirected low-level graphs.
//!
//! Vertices and edges in low-level graphs are lightweight ID's.
//! They are essentially `usize`.
//! Callers may feel free to copy and store these ID's.
//!
//! Generators hand their edge lists over through [FromEdgeList].
//! Graphs with a fixed directedness, i.e., those in [directed] and [undirected],
//! refuse lists built for the other kind.
//! [Graph] picks its representation at run time instead.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod construct;
pub use self::construct::*;
mod any;
pub use self::any::*;

pub mod directed;
pub mod undirected;
