//! Directional Young's modulus surfaces for anisotropic elastic materials
//!
//! Given a stiffness tensor in Voigt notation and a crystal symmetry class,
//! this crate discretizes the unit sphere by recursive octahedron
//! subdivision, evaluates the directional Young's modulus at every node,
//! and scales each node outward by its modulus, producing a 3D modulus
//! surface. Exporters write the result as a VTK PolyData mesh or a
//! self-contained interactive HTML page.
//!
//! Pipeline:
//! constants + symmetry → stiffness (6×6) → compliance (6×6) →
//! rank-4 compliance → per-direction modulus → scaled surface.

pub mod config;
pub mod error;
pub mod export;
pub mod mesh;
pub mod orientation;
pub mod sphere;
pub mod surface;
pub mod tensor;

pub use config::MaterialFile;
pub use error::{Result, SurfaceError};
pub use export::{write_html, write_polydata, Colormap, ColormapName};
pub use mesh::{Triangle, TriangleMesh};
pub use sphere::{build_sphere, subdivide};
pub use surface::{assemble, ModulusSurface};
pub use tensor::{
    build_stiffness, expand, invert, ElasticConstants, Rank4Tensor, SymmetryClass, VoigtMatrix,
};
