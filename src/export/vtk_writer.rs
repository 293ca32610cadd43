//! VTK XML PolyData writer for the modulus surface
//!
//! Emits an ASCII `.vtp` file (the output extension is replaced) holding
//! the surface triangles plus one point-data scalar array "E" with each
//! point's distance from the origin, i.e. the directional modulus
//! magnitude. Readable by ParaView and any VTK-based tool.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;

use crate::error::Result;

/// Write points + triangle connectivity as VTK XML PolyData.
pub fn write_polydata(
    path: &Path,
    points: &[Point3<f64>],
    triangles: &[[usize; 3]],
) -> Result<()> {
    let path = path.with_extension("vtp");
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "<?xml version=\"1.0\"?>")?;
    writeln!(
        out,
        "<VTKFile type=\"PolyData\" version=\"1.0\" byte_order=\"LittleEndian\">"
    )?;
    writeln!(out, "  <PolyData>")?;
    writeln!(
        out,
        "    <Piece NumberOfPoints=\"{}\" NumberOfVerts=\"0\" NumberOfLines=\"0\" NumberOfStrips=\"0\" NumberOfPolys=\"{}\">",
        points.len(),
        triangles.len()
    )?;

    writeln!(out, "      <PointData Scalars=\"E\">")?;
    writeln!(
        out,
        "        <DataArray type=\"Float64\" Name=\"E\" format=\"ascii\">"
    )?;
    for p in points {
        writeln!(out, "          {}", p.coords.norm())?;
    }
    writeln!(out, "        </DataArray>")?;
    writeln!(out, "      </PointData>")?;

    writeln!(out, "      <Points>")?;
    writeln!(
        out,
        "        <DataArray type=\"Float64\" NumberOfComponents=\"3\" format=\"ascii\">"
    )?;
    for p in points {
        writeln!(out, "          {} {} {}", p.x, p.y, p.z)?;
    }
    writeln!(out, "        </DataArray>")?;
    writeln!(out, "      </Points>")?;

    writeln!(out, "      <Polys>")?;
    writeln!(
        out,
        "        <DataArray type=\"Int64\" Name=\"connectivity\" format=\"ascii\">"
    )?;
    for t in triangles {
        writeln!(out, "          {} {} {}", t[0], t[1], t[2])?;
    }
    writeln!(out, "        </DataArray>")?;
    writeln!(
        out,
        "        <DataArray type=\"Int64\" Name=\"offsets\" format=\"ascii\">"
    )?;
    for (i, _) in triangles.iter().enumerate() {
        writeln!(out, "          {}", 3 * (i + 1))?;
    }
    writeln!(out, "        </DataArray>")?;
    writeln!(out, "      </Polys>")?;

    writeln!(out, "    </Piece>")?;
    writeln!(out, "  </PolyData>")?;
    writeln!(out, "</VTKFile>")?;

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_well_formed_polydata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.out");

        let points = vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(0.0, 0.0, 3.0),
        ];
        let triangles = vec![[0usize, 1, 2]];

        write_polydata(&path, &points, &triangles).unwrap();

        let written = std::fs::read_to_string(dir.path().join("surface.vtp")).unwrap();
        assert!(written.contains("NumberOfPoints=\"3\""));
        assert!(written.contains("NumberOfPolys=\"1\""));
        assert!(written.contains("Name=\"E\""));
        // Modulus magnitude of the second point.
        assert!(written.contains("\n          2\n"));
        assert!(written.ends_with("</VTKFile>\n"));
    }
}
