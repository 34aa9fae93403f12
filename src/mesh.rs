//! Read-only triangle mesh: a vertex list plus faces indexing into it.

use std::path::Path;

use crate::error::{RenderError, Result};
use crate::math::vec3::Vec3;
use crate::triangle::{Face, Triple};

/// A triangle mesh.
///
/// Every face index is checked against the vertex count on construction, so
/// `vert(face(i)[k])` never goes out of range.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh from vertices and zero-based faces.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Result<Self> {
        let vertex_count = vertices.len();
        for (face_index, face) in faces.iter().enumerate() {
            if let Some(&index) = face.iter().find(|&&i| i >= vertex_count) {
                return Err(RenderError::FaceIndexOutOfRange {
                    face: face_index,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Load a Wavefront OBJ file.
    ///
    /// Polygons are triangulated. All objects and groups in the file are
    /// merged into one mesh, in file order. Materials, texture coordinates
    /// and normals are ignored.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let options = tobj::LoadOptions {
            triangulate: true,
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        };
        let (models, _materials) =
            tobj::load_obj(path, &options).map_err(|source| RenderError::MeshLoad {
                path: path.to_path_buf(),
                source,
            })?;

        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        for model in &models {
            let offset = vertices.len();
            vertices.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            faces.extend(model.mesh.indices.chunks_exact(3).map(|i| {
                Triple::new(
                    offset + i[0] as usize,
                    offset + i[1] as usize,
                    offset + i[2] as usize,
                )
            }));
        }

        log::debug!(
            "Parsed {} objects from {}: {} vertices, {} faces",
            models.len(),
            path.display(),
            vertices.len(),
            faces.len()
        );
        Self::new(vertices, faces)
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The vertex indices of face `i`.
    ///
    /// # Panics
    /// Panics if `i >= face_count()`.
    pub fn face(&self, i: usize) -> Face {
        self.faces[i]
    }

    /// The position of vertex `i`.
    ///
    /// # Panics
    /// Panics if `i >= vertex_count()`.
    pub fn vert(&self, i: usize) -> Vec3 {
        self.vertices[i]
    }

    /// The world-space positions of face `i`, in face order.
    pub fn face_vertices(&self, i: usize) -> Triple<Vec3> {
        self.face(i).map(|v| self.vert(v))
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_obj(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "flatraster-mesh-{}-{}.obj",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn rejects_out_of_range_face() {
        let err = Mesh::new(vec![Vec3::ZERO; 3], vec![Triple::new(0, 1, 3)]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::FaceIndexOutOfRange {
                face: 0,
                index: 3,
                vertex_count: 3
            }
        ));
    }

    #[test]
    fn loads_obj_with_quads_and_texture_indices() {
        let path = temp_obj(
            "quad",
            "v -1 -1 0\nv 1 -1 0\nv 1 1 0\nv -1 1 0\nvt 0 0\nf 1/1 2/1 3/1 4/1\n",
        );
        let mesh = Mesh::from_obj(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.vert(2), Vec3::new(1.0, 1.0, 0.0));
        for face in mesh.faces() {
            assert!(face.iter().all(|&i| i < 4));
        }
    }

    #[test]
    fn merges_objects_with_offsets() {
        let path = temp_obj(
            "objects",
            "o first\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\no second\nv 0 0 1\nv 1 0 1\nv 0 1 1\nf 4 5 6\n",
        );
        let mesh = Mesh::from_obj(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(mesh.face_count(), 2);
        let second = mesh.face_vertices(1);
        assert_eq!(second.a().z, 1.0);
        assert_eq!(second.c(), Vec3::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = Mesh::from_obj("/definitely/not/here.obj").unwrap_err();
        assert!(matches!(err, RenderError::MeshLoad { .. }));
        assert!(err.to_string().contains("/definitely/not/here.obj"));
    }
}
