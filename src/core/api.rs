// others
use log::debug;
// pbrt
use crate::core::paramset::ParamSet;
use crate::core::pbrt::Float;
use crate::core::shape::{Shape, ShapeError};
use crate::core::transform::Transform;
use crate::shapes::cone::Cone;
use crate::shapes::cylinder::Cylinder;
use crate::shapes::snowman::create_snowman_shape;
use crate::shapes::sphere::Sphere;

// see api.cpp

fn create_sphere_shape(
    o2w: &Transform,
    w2o: &Transform,
    reverse_orientation: bool,
    params: &ParamSet,
) -> Sphere {
    let radius: Float = params.find_one_float("radius", 1.0);
    let z_min: Float = params.find_one_float("zmin", -radius);
    let z_max: Float = params.find_one_float("zmax", radius);
    let phi_max: Float = params.find_one_float("phimax", 360.0);
    Sphere::new(
        *o2w,
        *w2o,
        reverse_orientation,
        radius,
        z_min,
        z_max,
        phi_max,
    )
}

fn create_cylinder_shape(
    o2w: &Transform,
    w2o: &Transform,
    reverse_orientation: bool,
    params: &ParamSet,
) -> Cylinder {
    let radius: Float = params.find_one_float("radius", 1.0);
    let z_min: Float = params.find_one_float("zmin", -1.0);
    let z_max: Float = params.find_one_float("zmax", 1.0);
    let phi_max: Float = params.find_one_float("phimax", 360.0);
    Cylinder::new(
        *o2w,
        *w2o,
        reverse_orientation,
        radius,
        z_min,
        z_max,
        phi_max,
    )
}

fn create_cone_shape(
    o2w: &Transform,
    w2o: &Transform,
    reverse_orientation: bool,
    params: &ParamSet,
) -> Cone {
    let height: Float = params.find_one_float("height", 1.0);
    let radius: Float = params.find_one_float("radius", 1.0);
    let phi_max: Float = params.find_one_float("phimax", 360.0);
    Cone::new(*o2w, *w2o, reverse_orientation, height, radius, phi_max)
}

/// Create a shape by its scene-file type name. Parameters which were
/// not looked up are reported as warnings.
pub fn make_shape(
    name: &str,
    object2world: &Transform,
    world2object: &Transform,
    reverse_orientation: bool,
    params: &ParamSet,
) -> Result<Shape, ShapeError> {
    let shape: Shape = match name {
        "sphere" => Shape::Sphr(create_sphere_shape(
            object2world,
            world2object,
            reverse_orientation,
            params,
        )),
        "cylinder" => Shape::Clndr(create_cylinder_shape(
            object2world,
            world2object,
            reverse_orientation,
            params,
        )),
        "cone" => Shape::Cn(create_cone_shape(
            object2world,
            world2object,
            reverse_orientation,
            params,
        )),
        "snowman" | "snowmanex" => Shape::SnwMn(Box::new(create_snowman_shape(
            object2world,
            world2object,
            reverse_orientation,
            params,
        ))),
        _ => return Err(ShapeError::UnknownShape(name.to_string())),
    };
    debug!("created {:?} shape", name);
    params.report_unused();
    Ok(shape)
}
