//! Implementations of low-level undirected graph

mod tree_backed;
pub use self::tree_backed::*;
mod adjacent_list;
pub use self::adjacent_list::*;
