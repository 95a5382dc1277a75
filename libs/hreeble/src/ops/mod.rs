//! Panel operations: subdivision and inset extrusion.
//!
//! Both operations build new polygons into the mesh and queue their source
//! polygon for deferred deletion.

pub mod extrude;
pub mod subdivide;
