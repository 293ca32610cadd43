/// Exporters consuming the assembled surface: VTK PolyData and x3dom HTML

pub mod colormap;
pub mod vtk_writer;
pub mod x3d_writer;

pub use colormap::{Colormap, ColormapName};
pub use vtk_writer::write_polydata;
pub use x3d_writer::write_html;
