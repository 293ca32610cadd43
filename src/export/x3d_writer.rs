//! Interactive HTML (x3dom) writer for the modulus surface
//!
//! Produces a single self-contained web page (extension replaced by
//! `.html`) with an x3dom scene: the colored modulus surface as an
//! IndexedFaceSet, three coordinate-axis cylinders for reference, and a
//! camera looking along the [1 0 1̄]-type direction, oriented by the
//! axis/angle of the fixed viewing matrix.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::{Matrix3, Point3};

use crate::error::Result;
use crate::export::colormap::Colormap;
use crate::orientation::om_to_axis_angle;

/// Rows of the reference viewing orientation, each normalized.
fn view_matrix() -> Matrix3<f64> {
    Matrix3::new(
        -1.0 / 2f64.sqrt(),
        1.0 / 2f64.sqrt(),
        0.0,
        -1.0 / 6f64.sqrt(),
        -1.0 / 6f64.sqrt(),
        2.0 / 6f64.sqrt(),
        1.0 / 3f64.sqrt(),
        1.0 / 3f64.sqrt(),
        1.0 / 3f64.sqrt(),
    )
}

/// Write the interactive visualization page.
pub fn write_html(
    path: &Path,
    points: &[Point3<f64>],
    triangles: &[[usize; 3]],
    colormap: &Colormap,
) -> Result<()> {
    let ax = om_to_axis_angle(&view_matrix());

    let radii: Vec<f64> = points.iter().map(|p| p.coords.norm()).collect();
    let auto = radii.iter().copied().filter(|r| !r.is_nan()).fold(0.0, f64::max);
    let minimum = radii
        .iter()
        .copied()
        .filter(|r| !r.is_nan())
        .fold(f64::INFINITY, f64::min);

    let path = path.with_extension("html");
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "  <title>Elastic Tensor visualization</title>")?;
    writeln!(
        out,
        "  <script type='text/javascript' src='https://www.x3dom.org/download/x3dom.js'> </script>"
    )?;
    writeln!(
        out,
        "  <link rel='stylesheet' type='text/css' href='https://www.x3dom.org/download/x3dom.css'></link>"
    )?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "  <h1>Elastic Tensor visualization</h1>")?;
    writeln!(out, "  <p>")?;
    writeln!(out, "  Range goes from {} to {}", minimum, auto)?;
    writeln!(out, "  </p>")?;
    writeln!(out, "  <x3d width='600px' height='600px'>")?;
    writeln!(out, "  <scene>")?;
    writeln!(
        out,
        "    <viewpoint position='{v} {v} {v}' orientation='{} {} {} {}'></viewpoint>",
        ax[0],
        ax[1],
        ax[2],
        ax[3],
        v = 3.0 * auto
    )?;

    // Coordinate-axis cylinders: x red, y green, z blue.
    let scale = 1.5 * auto;
    let radius = auto / 50.0;
    write_axis(&mut out, &format!("{} 0 0", scale), Some("0 0 1 1.5708"), "1 0 0", radius, auto)?;
    write_axis(&mut out, &format!("0 {} 0", scale), None, "0 1 0", radius, auto)?;
    write_axis(&mut out, &format!("0 0 {}", scale), Some("1 0 0 1.5708"), "0 0 1", radius, auto)?;

    writeln!(out, "    <shape>")?;
    writeln!(out, "      <appearance>")?;
    writeln!(
        out,
        "      <material diffuseColor=\"0.3 0.6 0.2\" ambientIntensity=\"0.167\" shininess=\"0.17\" transparency=\"0.0\"/>"
    )?;
    writeln!(out, "      </appearance>")?;
    writeln!(
        out,
        "      <IndexedFaceSet solid=\"false\" convex=\"true\" colorPerVertex=\"true\" creaseAngle=\"0.0\" coordIndex=\""
    )?;
    for t in triangles {
        writeln!(out, "{} {} {} -1,", t[0], t[1], t[2])?;
    }
    writeln!(out, "        \">")?;
    writeln!(out, "        <coordinate point=\"")?;
    for p in points {
        writeln!(out, "{} {} {}, ", p.x, p.y, p.z)?;
    }
    writeln!(out, "        \"></coordinate>")?;
    writeln!(out, "        <color color=\"")?;
    for r in &radii {
        let rgb = colormap.sample(r / auto);
        writeln!(out, "{} {} {}, ", rgb[0], rgb[1], rgb[2])?;
    }
    writeln!(out, "        \"></color>")?;
    writeln!(out, "      </IndexedFaceSet>")?;
    writeln!(out, "    </shape>")?;
    writeln!(out, "  </scene>")?;
    writeln!(out, "  </x3d>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;

    out.flush()?;
    Ok(())
}

fn write_axis(
    out: &mut impl Write,
    translation: &str,
    rotation: Option<&str>,
    color: &str,
    radius: f64,
    height: f64,
) -> std::io::Result<()> {
    match rotation {
        Some(rot) => writeln!(
            out,
            "    <transform translation='{}' rotation='{}'>",
            translation, rot
        )?,
        None => writeln!(out, "    <transform translation='{}'>", translation)?,
    }
    writeln!(out, "    <shape>")?;
    writeln!(out, "      <appearance>")?;
    writeln!(out, "      <material diffuseColor='{}'></material>", color)?;
    writeln!(out, "      </appearance>")?;
    writeln!(
        out,
        "      <cylinder radius='{}' height='{}'></cylinder>",
        radius, height
    )?;
    writeln!(out, "    </shape>")?;
    writeln!(out, "    </transform>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::colormap::{Colormap, ColormapName};

    #[test]
    fn writes_scene_with_geometry_and_colors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.out");

        let points = vec![
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let triangles = vec![[0usize, 1, 2]];
        let map = Colormap::new(ColormapName::Grayscale, false);

        write_html(&path, &points, &triangles, &map).unwrap();

        let html = std::fs::read_to_string(dir.path().join("surface.html")).unwrap();
        assert!(html.contains("<x3d"));
        assert!(html.contains("0 1 2 -1,"));
        assert!(html.contains("Range goes from 1 to 2"));
        // The longest point saturates the grayscale map at white.
        assert!(html.contains("1 1 1, "));
        // Camera sits at three times the maximum modulus.
        assert!(html.contains("position='6 6 6'"));
    }
}
