use glam::Vec3;

use crate::error::RefractionError;

/// Number of spheres the GPU storage buffer is allocated for.
pub const MAX_SPHERES: usize = 256;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// One sphere as laid out in the GPU storage buffer.
pub struct Sphere {
    /// Center xyz, radius in w.
    pub position_radius: [f32; 4],
    /// Albedo rgba.
    pub base_color: [f32; 4],
    /// Emission rgb, strength in w.
    pub emission_color_strength: [f32; 4],
}

impl Sphere {
    /// Non-emissive sphere.
    #[must_use]
    pub fn new(center: Vec3, radius: f32, base_color: [f32; 4]) -> Self {
        Self {
            position_radius: center.extend(radius).to_array(),
            base_color,
            emission_color_strength: [0.0; 4],
        }
    }

    /// Set emission color and strength.
    #[must_use]
    pub fn with_emission(mut self, color: Vec3, strength: f32) -> Self {
        self.emission_color_strength = color.extend(strength).to_array();
        self
    }

    /// Sphere center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            self.position_radius[0],
            self.position_radius[1],
            self.position_radius[2],
        )
    }

    /// Sphere radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.position_radius[3]
    }

    /// Whether the sphere emits light.
    #[must_use]
    pub fn is_emissive(&self) -> bool {
        self.emission_color_strength[3] > 0.0
    }
}

impl Default for Sphere {
    /// White unit sphere at the origin.
    fn default() -> Self {
        Self::new(Vec3::ZERO, 1.0, [1.0; 4])
    }
}

/// Owned, bounded list of spheres uploaded to the tracer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SphereList {
    spheres: Vec<Sphere>,
}

impl SphereList {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene holding the startup light: a red emissive unit sphere at
    /// `(0, 0, 5)`.
    #[must_use]
    pub fn with_default_sphere() -> Self {
        let light = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, [0.8, 0.2, 0.2, 1.0])
            .with_emission(Vec3::ONE, 2.0);
        Self {
            spheres: vec![light],
        }
    }

    /// Append a sphere.
    ///
    /// # Errors
    ///
    /// [`RefractionError::SceneFull`] when the list already holds
    /// [`MAX_SPHERES`] spheres.
    pub fn push(&mut self, sphere: Sphere) -> Result<usize, RefractionError> {
        if self.spheres.len() >= MAX_SPHERES {
            return Err(RefractionError::SceneFull {
                capacity: MAX_SPHERES,
            });
        }
        self.spheres.push(sphere);
        Ok(self.spheres.len() - 1)
    }

    /// Append a [`Sphere::default`], returning its index.
    ///
    /// # Errors
    ///
    /// Same as [`push`](Self::push).
    pub fn add_default(&mut self) -> Result<usize, RefractionError> {
        self.push(Sphere::default())
    }

    /// Remove the sphere at `index`, shifting later spheres down. `None`
    /// when out of range.
    pub fn remove(&mut self, index: usize) -> Option<Sphere> {
        (index < self.spheres.len()).then(|| self.spheres.remove(index))
    }

    /// Mutable access for the editing UI.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Sphere> {
        self.spheres.get_mut(index)
    }

    /// Sphere at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Sphere> {
        self.spheres.get(index)
    }

    /// Number of spheres.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Whether the scene holds no spheres.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Spheres in upload order.
    pub fn iter(&self) -> impl Iterator<Item = &Sphere> {
        self.spheres.iter()
    }

    /// Bytes of the live spheres for a storage buffer write.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.spheres)
    }
}
