//! Wavefront OBJ export.
//!
//! Points become `v` lines, polygons `f` lines. Polygons carrying texture
//! coordinates emit one `vt` line per corner and reference it as `v/vt`.

use std::io::Write;

use crate::error::Result;
use crate::mesh::Mesh;

impl Mesh {
    /// Writes the mesh, including polygons still pending deletion.
    ///
    /// # Examples
    /// ```
    /// use hreeble::Mesh;
    /// use glam::DVec3;
    ///
    /// let mut mesh = Mesh::new();
    /// let a = mesh.append_point(DVec3::ZERO);
    /// let b = mesh.append_point(DVec3::X);
    /// let c = mesh.append_point(DVec3::Y);
    /// mesh.build_polygon(&[a, b, c], None).unwrap();
    ///
    /// let mut out = Vec::new();
    /// mesh.write_obj(&mut out).unwrap();
    /// let text = String::from_utf8(out).unwrap();
    /// assert!(text.contains("f 1 2 3"));
    /// ```
    pub fn write_obj<W: Write>(&self, out: &mut W) -> Result<()> {
        for p in &self.positions {
            writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
        }
        let mut next_uv = 1;
        for polygon in &self.polygons {
            let face = match polygon.uvs() {
                Some(uvs) => {
                    for uv in uvs {
                        writeln!(out, "vt {} {}", uv.x, uv.y)?;
                    }
                    let refs: Vec<String> = polygon
                        .points()
                        .iter()
                        .enumerate()
                        .map(|(i, p)| format!("{}/{}", p.0 + 1, next_uv + i))
                        .collect();
                    next_uv += uvs.len();
                    refs
                }
                None => polygon.points().iter().map(|p| (p.0 + 1).to_string()).collect(),
            };
            writeln!(out, "f {}", face.join(" "))?;
        }
        Ok(())
    }
}
