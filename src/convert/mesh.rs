use crate::domain::model::{DepthMap, SurfaceMesh};
use crate::utils::error::Result;
use nalgebra::Point3;
use std::fmt::Write as _;
use std::path::Path;

/// Build a surface mesh from a depth map.
///
/// Each pixel becomes the vertex `(x, y, depth)`, emitted row-major, and each
/// grid cell is split into two triangles.
pub fn mesh_from_depth(depth: &DepthMap) -> SurfaceMesh {
    let (w, h) = (depth.width(), depth.height());

    let mut vertices = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            vertices.push(Point3::new(x as f32, y as f32, depth.at(x, y)));
        }
    }

    let mut faces = Vec::new();
    if w >= 2 && h >= 2 {
        faces.reserve(2 * (w - 1) * (h - 1));
        for y in 0..h - 1 {
            for x in 0..w - 1 {
                let i = (y * w + x) as u32;
                let right = i + 1;
                let below = i + w as u32;
                let diagonal = below + 1;
                faces.push([i, right, below]);
                faces.push([right, diagonal, below]);
            }
        }
    }

    SurfaceMesh { vertices, faces }
}

/// Serialize a mesh to Wavefront OBJ. Face indices are 1-based per the format.
pub fn obj_string(mesh: &SurfaceMesh) -> String {
    let mut out = String::with_capacity(mesh.vertices.len() * 24 + mesh.faces.len() * 16);

    for v in &mesh.vertices {
        let _ = writeln!(out, "v {} {} {}", v.x, v.y, v.z);
    }
    for [a, b, c] in &mesh.faces {
        let _ = writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1);
    }

    out
}

pub fn export_obj(mesh: &SurfaceMesh, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, obj_string(mesh))?;
    Ok(())
}
