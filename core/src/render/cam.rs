//! Cameras and modeling transforms.

use crate::math::mat::{rotate_x, rotate_y, rotate_z, scale, translate};
use crate::math::{Angle, Mat4, Vec3};

use super::{Model, View, World};

/// A camera described by its position and orientation in world space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// The position of the camera.
    pub pos: Vec3<World>,
    /// The point the camera is looking at.
    pub target: Vec3<World>,
    /// The approximate up direction of the camera.
    pub up: Vec3<World>,
}

impl Camera {
    /// Returns the world-to-view transform of `self`.
    ///
    /// A right-handed look-at transform: the camera looks down its local
    /// -z axis with +y up and +x right. The up vector must not be
    /// collinear with the viewing direction.
    pub fn world_to_view(&self) -> Mat4<World, View> {
        let fwd = (self.target - self.pos).normalize();
        let right = fwd.cross(&self.up).normalize();
        let up = right.cross(&fwd);

        let eye = self.pos;
        Mat4::<(), ()>::new([
            [right.x(), right.y(), right.z(), -right.dot(&eye)],
            [up.x(), up.y(), up.z(), -up.dot(&eye)],
            [-fwd.x(), -fwd.y(), -fwd.z(), fwd.dot(&eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
        .to()
    }
}

/// Returns the model-to-world transform given by a translation, rotations
/// about the x, y, and z axes, and a scaling.
///
/// The transforms apply in the order scale, rotate z, rotate y, rotate x,
/// translate. A zero scale is permitted and yields degenerate geometry,
/// not an error.
pub fn model_matrix(
    translation: Vec3<World>,
    [rx, ry, rz]: [Angle; 3],
    scaling: Vec3,
) -> Mat4<Model, World> {
    scale(scaling)
        .then(&rotate_z(rz))
        .then(&rotate_y(ry))
        .then(&rotate_x(rx))
        .then(&translate(translation.to()))
        .to()
}
