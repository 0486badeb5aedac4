//! Analytic sphere scene traced alongside the mesh.

mod sphere;

pub use sphere::{Sphere, SphereList, MAX_SPHERES};
