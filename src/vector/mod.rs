pub mod functions;
pub mod ops;
pub mod vector3;

pub use vector3::Vector3;
