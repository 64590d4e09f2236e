mod point2d;
mod point3d;
mod size2d;
mod size3d;
mod vector2d;
mod vector3d;

pub use point2d::Point2D;
pub use point3d::Point3D;
pub use size2d::Size2D;
pub use size3d::Size3D;
pub use vector2d::Vector2D;
pub use vector3d::Vector3D;
