//! The geometry of a particular point on a surface is represented by
//! a **SurfaceInteraction**. Having this abstraction lets most of the
//! system work with points on surfaces without needing to consider
//! the particular type of geometric shape the points lie on.
//!
//! Hits on compound shapes additionally record which part produced
//! them (**part_id** and **part_name**), so shading and statistics
//! code can tell the parts apart.

// pbrt
use crate::core::geometry::{vec3_cross_vec3, vec3_dot_vec3f};
use crate::core::geometry::{Normal3f, Point2f, Point3f, Vector3f};
use crate::core::pbrt::Float;

// see interaction.h

#[derive(Debug, Default, Copy, Clone)]
pub struct InteractionCommon {
    pub p: Point3f,
    pub time: Float,
    pub p_error: Vector3f,
    pub wo: Vector3f,
    pub n: Normal3f,
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Shading {
    pub n: Normal3f,
    pub dpdu: Vector3f,
    pub dpdv: Vector3f,
    pub dndu: Normal3f,
    pub dndv: Normal3f,
}

#[derive(Debug, Default, Copy, Clone)]
pub struct SurfaceInteraction {
    pub common: InteractionCommon,
    pub uv: Point2f,
    pub dpdu: Vector3f,
    pub dpdv: Vector3f,
    pub dndu: Normal3f,
    pub dndv: Normal3f,
    pub shading: Shading,
    /// index of the compound part that was hit
    pub part_id: Option<u8>,
    /// static label of the compound part that was hit
    pub part_name: Option<&'static str>,
}

impl SurfaceInteraction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        p: &Point3f,
        p_error: &Vector3f,
        uv: Point2f,
        wo: &Vector3f,
        dpdu: &Vector3f,
        dpdv: &Vector3f,
        dndu: &Normal3f,
        dndv: &Normal3f,
        time: Float,
        flip_normal: bool,
    ) -> Self {
        let nv: Vector3f = vec3_cross_vec3(dpdu, dpdv).normalize();
        let mut n: Normal3f = Normal3f::from(nv);
        // adjust normal based on orientation and handedness
        if flip_normal {
            n *= -1.0 as Float;
        }
        SurfaceInteraction {
            common: InteractionCommon {
                p: *p,
                time,
                p_error: *p_error,
                wo: wo.normalize(),
                n,
            },
            uv,
            dpdu: *dpdu,
            dpdv: *dpdv,
            dndu: *dndu,
            dndv: *dndv,
            shading: Shading {
                n,
                dpdu: *dpdu,
                dpdv: *dpdv,
                dndu: *dndu,
                dndv: *dndv,
            },
            part_id: None,
            part_name: None,
        }
    }
}

/// Compute $\dndu$ and $\dndv$ from the coefficients of the first and
/// second fundamental forms (Weingarten equations).
pub fn normal_derivatives(
    dpdu: &Vector3f,
    dpdv: &Vector3f,
    d2_p_duu: &Vector3f,
    d2_p_duv: &Vector3f,
    d2_p_dvv: &Vector3f,
) -> (Normal3f, Normal3f) {
    // compute coefficients for fundamental forms
    let ec: Float = vec3_dot_vec3f(dpdu, dpdu);
    let fc: Float = vec3_dot_vec3f(dpdu, dpdv);
    let gc: Float = vec3_dot_vec3f(dpdv, dpdv);
    let nc: Vector3f = vec3_cross_vec3(dpdu, dpdv).normalize();
    let el: Float = vec3_dot_vec3f(&nc, d2_p_duu);
    let fl: Float = vec3_dot_vec3f(&nc, d2_p_duv);
    let gl: Float = vec3_dot_vec3f(&nc, d2_p_dvv);
    // compute $\dndu$ and $\dndv$ from fundamental form coefficients
    let inv_egf2: Float = 1.0 / (ec * gc - fc * fc);
    let dndu: Vector3f =
        *dpdu * (fl * fc - el * gc) * inv_egf2 + *dpdv * (el * fc - fl * ec) * inv_egf2;
    let dndv: Vector3f =
        *dpdu * (gl * fc - fl * gc) * inv_egf2 + *dpdv * (fl * fc - gl * ec) * inv_egf2;
    (Normal3f::from(dndu), Normal3f::from(dndv))
}
