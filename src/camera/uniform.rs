use super::core::CameraState;
use crate::options::TracingOptions;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block read by the tracing shader every frame.
///
/// Laid out for WGSL/std140: the `mat3x3<f32>` occupies three padded
/// `vec4` columns and the struct is a multiple of 16 bytes.
pub struct CameraUniform {
    /// Camera-to-world rotation, columns `(right, up, orientation)`, each
    /// padded to four floats.
    pub camera_to_world: [[f32; 4]; 3],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Horizontal field of view in degrees.
    pub fov: f32,
    /// Viewport size in pixels.
    pub resolution: [f32; 2],
    /// Index of the debug buffer to present (see
    /// [`DisplayBuffer::as_index`](crate::options::DisplayBuffer::as_index)).
    pub display_buffer: u32,
    /// Number of live entries in the sphere buffer.
    pub sphere_count: u32,
    /// Maximum ray bounces per sample.
    pub max_bounces: u32,
    /// Samples traced per pixel per frame.
    pub samples_per_pixel: u32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [u32; 2],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Uniform with an identity rotation and a single bounce and sample.
    #[must_use]
    pub fn new() -> Self {
        Self {
            camera_to_world: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
            ],
            position: [0.0; 3],
            fov: 90.0,
            resolution: [1.0, 1.0],
            display_buffer: 0,
            sphere_count: 0,
            max_bounces: 1,
            samples_per_pixel: 1,
            _pad: [0; 2],
        }
    }

    /// Update the view fields from the camera's current state.
    pub fn update_camera(&mut self, camera: &CameraState, fov: f32) {
        let m = camera.camera_to_world();
        self.camera_to_world = [
            m.x_axis.extend(0.0).to_array(),
            m.y_axis.extend(0.0).to_array(),
            m.z_axis.extend(0.0).to_array(),
        ];
        self.position = camera.position().to_array();
        self.fov = fov;
        self.resolution = camera.viewport().as_vec2().to_array();
        self.display_buffer = camera.display_buffer().as_index();
    }

    /// Update the tracing parameters and the live sphere count.
    pub fn update_scene(&mut self, tracing: &TracingOptions, sphere_count: usize) {
        self.max_bounces = tracing.max_bounces;
        self.samples_per_pixel = tracing.samples_per_pixel;
        self.sphere_count = u32::try_from(sphere_count).unwrap_or(u32::MAX);
    }
}

#[cfg(test)]
mod tests {
    use glam::{UVec2, Vec3};

    use super::*;
    use crate::camera::FrameInput;
    use crate::options::DisplayBuffer;

    #[test]
    fn size_is_std140_friendly() {
        assert_eq!(size_of::<CameraUniform>(), 96);
        assert_eq!(size_of::<CameraUniform>() % 16, 0);
    }

    #[test]
    fn update_camera_copies_basis_and_view() {
        let mut camera =
            CameraState::new(Vec3::new(1.0, 2.0, 3.0), UVec2::new(960, 540));
        camera.process_input(&FrameInput {
            viewport: UVec2::new(960, 540),
            display_buffer: Some(DisplayBuffer::Normal),
            ..FrameInput::default()
        });

        let mut uniform = CameraUniform::new();
        uniform.update_camera(&camera, 75.0);

        let cols = camera.camera_to_world_cols();
        for (c, column) in uniform.camera_to_world.iter().enumerate() {
            assert_eq!(&column[..3], &cols[c * 3..c * 3 + 3]);
            assert_eq!(column[3], 0.0);
        }
        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.fov, 75.0);
        assert_eq!(uniform.resolution, [960.0, 540.0]);
        assert_eq!(uniform.display_buffer, 1);
    }

    #[test]
    fn update_scene_copies_tracing_settings() {
        let mut uniform = CameraUniform::new();
        let tracing = TracingOptions {
            max_bounces: 4,
            samples_per_pixel: 16,
        };
        uniform.update_scene(&tracing, 3);
        assert_eq!(uniform.max_bounces, 4);
        assert_eq!(uniform.samples_per_pixel, 16);
        assert_eq!(uniform.sphere_count, 3);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 96);
    }
}
