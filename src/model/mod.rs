mod material;
mod mesh;
pub mod shapes;
pub mod texture;
mod vertex;

pub use material::Material;
pub use mesh::Mesh;
pub use shapes::{MeshData, Shape};
pub use texture::{DecodedImage, Texture, TextureError};
pub use vertex::ModelVertex;

#[cfg(test)]
mod tests;
