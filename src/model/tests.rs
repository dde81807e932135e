use super::*;
use super::texture::mip_level_count;
use approx::assert_relative_eq;
use assert_fs::prelude::*;
use image::{GrayImage, ImageBuffer, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

#[test]
fn test_model_vertex_size() {
    assert_eq!(
        std::mem::size_of::<ModelVertex>(),
        32, // 3 * 4 (position) + 2 * 4 (tex_coords) + 3 * 4 (normal)
        "ModelVertex size should be 32 bytes"
    );
}

#[test]
fn test_vertex_buffer_layout() {
    let layout = ModelVertex::desc();
    assert_eq!(layout.array_stride, 32);
    assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
    assert_eq!(layout.attributes.len(), 3);
}

#[test]
fn test_shapes_are_well_formed() {
    for shape in Shape::ALL {
        let mesh = shape.generate();
        assert!(!mesh.vertices.is_empty(), "{:?} has no vertices", shape);
        assert_eq!(mesh.indices.len() % 3, 0, "{:?} index count not a multiple of 3", shape);

        let vertex_count = mesh.vertices.len() as u32;
        assert!(
            mesh.indices.iter().all(|&i| i < vertex_count),
            "{:?} references a missing vertex",
            shape
        );

        for vertex in &mesh.vertices {
            let normal = glam::Vec3::from_array(vertex.normal);
            assert_relative_eq!(normal.length(), 1.0, epsilon = 0.001);
            assert!(vertex.tex_coords.iter().all(|c| c.is_finite()));
        }
    }
}

#[test]
fn test_box_geometry() {
    let mesh = Shape::Box.generate();
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36, "Cube should have 36 indices (12 triangles)");
    for vertex in &mesh.vertices {
        for coordinate in vertex.position {
            assert_relative_eq!(coordinate.abs(), 0.5, epsilon = 0.0001);
        }
    }
}

#[test]
fn test_plane_faces_up() {
    let mesh = Shape::Plane.generate();
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.indices.len(), 6);
    for vertex in &mesh.vertices {
        assert_eq!(vertex.position[1], 0.0);
        assert_relative_eq!(vertex.normal[1], 1.0, epsilon = 0.0001);
    }
}

#[test]
fn test_round_shape_extents() {
    let sphere = Shape::Sphere.generate();
    for vertex in &sphere.vertices {
        let radius = glam::Vec3::from_array(vertex.position).length();
        assert_relative_eq!(radius, 1.0, epsilon = 0.0001);
    }

    for shape in [Shape::Cylinder, Shape::Cone] {
        let mesh = shape.generate();
        let (min_y, max_y) = mesh.vertices.iter().fold((f32::MAX, f32::MIN), |(lo, hi), v| {
            (lo.min(v.position[1]), hi.max(v.position[1]))
        });
        assert_relative_eq!(min_y, 0.0, epsilon = 0.0001);
        assert_relative_eq!(max_y, 1.0, epsilon = 0.0001);
    }

    let torus = Shape::Torus.generate();
    let max_z = torus.vertices.iter().map(|v| v.position[2].abs()).fold(0.0, f32::max);
    assert_relative_eq!(max_z, shapes::TORUS_TUBE_RADIUS, epsilon = 0.001);
}

#[test]
fn test_pyramid_apex() {
    let mesh = Shape::Pyramid.generate();
    let top = mesh.vertices.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
    assert_relative_eq!(top, 0.5, epsilon = 0.0001);
    // Four triangular sides plus a two-triangle base.
    assert_eq!(mesh.indices.len(), 18);
}

#[test]
fn test_nursery_palette_tags_are_unique() {
    let palette = Material::nursery_palette();
    assert_eq!(palette.len(), 6);
    for (i, material) in palette.iter().enumerate() {
        assert!(
            palette[i + 1..].iter().all(|other| other.tag != material.tag),
            "duplicate material tag {}",
            material.tag
        );
    }
}

#[test]
fn test_decode_rgb_flips_rows() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("stripes.png");
    let mut img = RgbImage::new(1, 2);
    img.put_pixel(0, 0, Rgb([255, 0, 0]));
    img.put_pixel(0, 1, Rgb([0, 0, 255]));
    img.save(file.path()).unwrap();

    let decoded = DecodedImage::from_path(file.path()).unwrap();
    assert_eq!(decoded.channels, 3);
    assert_eq!((decoded.width, decoded.height), (1, 2));
    assert_eq!(*decoded.rgba.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
    assert_eq!(*decoded.rgba.get_pixel(0, 1), Rgba([255, 0, 0, 255]));
}

#[test]
fn test_decode_rgba() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("alpha.png");
    RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 40])).save(file.path()).unwrap();

    let decoded = DecodedImage::from_path(file.path()).unwrap();
    assert_eq!(decoded.channels, 4);
    assert_eq!(*decoded.rgba.get_pixel(1, 1), Rgba([10, 20, 30, 40]));
}

#[test]
fn test_decode_rejects_grey_images() {
    let temp = assert_fs::TempDir::new().unwrap();

    let grey = temp.child("grey.png");
    GrayImage::new(4, 4).save(grey.path()).unwrap();
    let result = DecodedImage::from_path(grey.path());
    assert!(matches!(result, Err(TextureError::UnsupportedChannels { channels: 1, .. })));

    let grey_alpha = temp.child("grey_alpha.png");
    ImageBuffer::<LumaA<u8>, Vec<u8>>::new(4, 4).save(grey_alpha.path()).unwrap();
    let result = DecodedImage::from_path(grey_alpha.path());
    assert!(matches!(result, Err(TextureError::UnsupportedChannels { channels: 2, .. })));
}

#[test]
fn test_decode_missing_file() {
    let temp = tempfile::tempdir().unwrap();
    let result = DecodedImage::from_path(&temp.path().join("missing.jpg"));
    match result {
        Err(err @ TextureError::Decode { .. }) => {
            assert!(err.to_string().contains("missing.jpg"));
        }
        other => panic!("expected a decode error, got {:?}", other.map(|d| d.channels)),
    }
}

#[test]
fn test_mip_chain() {
    assert_eq!(mip_level_count(1, 1), 1);
    assert_eq!(mip_level_count(8, 4), 4);
    assert_eq!(mip_level_count(1000, 3), 10);

    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("mips.png");
    RgbImage::from_pixel(8, 4, Rgb([90, 90, 90])).save(file.path()).unwrap();
    let decoded = DecodedImage::from_path(file.path()).unwrap();

    let chain = decoded.mip_chain();
    let sizes: Vec<(u32, u32)> = chain.iter().map(|level| level.dimensions()).collect();
    assert_eq!(sizes, vec![(8, 4), (4, 2), (2, 1), (1, 1)]);
}
