//! Ray intersection tests

use crate::bounds::AABB;
use crate::ray::Ray;

/// Ray-AABB intersection using the slab method
///
/// Returns the distance along the ray to the first intersection in front of
/// the origin. A ray starting inside the box reports the exit distance.
pub fn ray_aabb(ray: &Ray, aabb: &AABB) -> Option<f32> {
    let inv_dir = ray.inverse_direction();

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    // Behind the origin, or a miss
    if tmax < 0.0 || tmin > tmax {
        None
    } else {
        Some(if tmin < 0.0 { tmax } else { tmin })
    }
}
