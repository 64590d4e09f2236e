//! Poses: rigid, scaled, and planar transforms.

mod pose2d;
mod pose3d;
mod scaled_pose3d;

pub use pose2d::Pose2D;
pub use pose3d::Pose3D;
pub use scaled_pose3d::ScaledPose3D;
