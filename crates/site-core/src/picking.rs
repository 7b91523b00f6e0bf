use crate::state::Ray;
use glam::Vec3;

/// Distance along a normalized ray to the first sphere hit in front of the origin.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// World-space hit point of `ray` on a sphere, if any.
#[inline]
pub fn hit_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<Vec3> {
    ray_sphere(ray.origin, ray.dir, center, radius).map(|t| ray.at(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_lands_on_surface() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        let p = hit_sphere(&ray, Vec3::ZERO, 1.0).unwrap();
        assert!((p - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn sphere_behind_origin_is_missed() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            dir: Vec3::new(0.0, 0.0, 1.0),
        };
        assert!(hit_sphere(&ray, Vec3::ZERO, 1.0).is_none());
    }
}
