/// Unit-sphere triangulation by recursive octahedron subdivision

pub mod octahedron;
pub mod triangulate;

pub use octahedron::{build_sphere, OCTAHEDRON_FACES, OCTAHEDRON_VERTICES};
pub use triangulate::subdivide;
