//! Simulated filesystem.
//!
//! A tree of named folders and text files, serialized as one opaque JSON
//! blob under the `aurora-filesystem` storage key. The desktop shell only
//! ever round-trips the blob; apps (Finder) operate on the tree through
//! the path-based operations here. Paths are slices of segment names
//! relative to the root; there is no cwd, no permissions, no metadata.

mod tree;

pub use tree::{FileSystem, FsError, Node};
