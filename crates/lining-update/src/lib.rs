#![warn(missing_docs)]

//! Ring parameter update driver for tunnel-lining project files.
//!
//! One invocation performs the whole pipeline: decode project text into the
//! schema model, patch a fixed set of fields on the first ring, and encode
//! back to indented text. Nothing persists between invocations and no other
//! ring, segment, or component is touched.

use lining_math::{ComponentError, Frame};
use lining_schema::{Project, SchemaError};
use thiserror::Error;

mod plane;

pub use plane::{frame_from_uvw, frame_to_uvw};

/// Errors from the ring update operation.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// The project text failed to decode.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The project contains no rings, so there is nothing to update.
    #[error("project has no rings to update")]
    NoRings,

    /// The first ring has no `build_pos` object to patch.
    ///
    /// The driver never constructs one on demand; a project that is
    /// missing build-position data must be fixed upstream.
    #[error("ring `{0}` has no build_pos to update")]
    MissingBuildPos(String),

    /// A plane component string failed to parse.
    #[error(transparent)]
    Plane(#[from] ComponentError),
}

/// Parameters patched onto the first ring of a project.
///
/// Widths are millimeters, diameters meters, angles degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct RingUpdate {
    /// Maximum ring width [mm].
    pub b_max: f64,
    /// Minimum ring width [mm].
    pub b_min: f64,
    /// Taper angle [deg].
    pub taper_angle: f64,
    /// Extrados diameter [m].
    pub dia_ext: f64,
    /// Intrados diameter [m].
    pub dia_int: f64,
    /// Build-position pitch angle [deg].
    pub pitch_angle: f64,
    /// Leading-edge ringbuild frame.
    pub uvw_leading: Frame,
    /// Trailing-edge ringbuild frame.
    pub uvw_trailing: Frame,
}

/// Apply a [`RingUpdate`] to project text and return the updated text.
///
/// Decodes the project, overwrites the five ring-dimension fields and the
/// three build-position fields on `ring[0]` (each becomes present even if
/// it was absent before), and re-serializes the whole tree indented. The
/// operation is all-or-nothing: any failure leaves no partial output.
pub fn apply_ring_update(json: &str, update: &RingUpdate) -> Result<String, UpdateError> {
    let mut proj = Project::from_json(json)?;

    let ring = proj.ring.first_mut().ok_or(UpdateError::NoRings)?;

    ring.ring_dims.b_max = Some(update.b_max);
    ring.ring_dims.b_min = Some(update.b_min);
    ring.ring_dims.taper_angle = Some(update.taper_angle);
    ring.ring_dims.dia_ext = Some(update.dia_ext);
    ring.ring_dims.dia_int = Some(update.dia_int);

    let build_pos = ring
        .build_pos
        .as_mut()
        .ok_or_else(|| UpdateError::MissingBuildPos(ring.name.clone()))?;
    build_pos.pitch_angle = Some(update.pitch_angle);
    build_pos.plane_uvw_leading = Some(frame_to_uvw(&update.uvw_leading));
    build_pos.plane_uvw_trailing = Some(frame_to_uvw(&update.uvw_trailing));

    Ok(proj.to_json()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lining_math::{Point3, Vec3};

    fn scenario_input() -> String {
        serde_json::json!({
            "job_number": 1,
            "project_name": "T",
            "ring": [{
                "id": 1,
                "name": "R1",
                "ring_type": "std",
                "ring_dims": {"Radius": 3.0, "Taper": 10, "Thickness": 300, "Width": 1500},
                "segment": [],
                "build_pos": {"qty": 6, "start_angle": 0}
            }]
        })
        .to_string()
    }

    fn scenario_update() -> RingUpdate {
        RingUpdate {
            b_max: 1520.0,
            b_min: 1480.0,
            taper_angle: 2.5,
            dia_ext: 6.5,
            dia_int: 5.9,
            pitch_angle: 60.0,
            uvw_leading: Frame::identity(),
            uvw_trailing: Frame::identity(),
        }
    }

    #[test]
    fn patches_first_ring() {
        let out = apply_ring_update(&scenario_input(), &scenario_update()).expect("update");
        let proj = Project::from_json(&out).expect("decode output");
        let ring = &proj.ring[0];

        assert_eq!(ring.ring_dims.b_max, Some(1520.0));
        assert_eq!(ring.ring_dims.b_min, Some(1480.0));
        assert_eq!(ring.ring_dims.taper_angle, Some(2.5));
        assert_eq!(ring.ring_dims.dia_ext, Some(6.5));
        assert_eq!(ring.ring_dims.dia_int, Some(5.9));

        let bp = ring.build_pos.as_ref().unwrap();
        assert_eq!(bp.pitch_angle, Some(60.0));
        let leading = bp.plane_uvw_leading.as_ref().unwrap();
        assert_eq!(leading.origin, "0,0,0");
        assert_eq!(leading.x_axis, "1,0,0");
        assert_eq!(leading.y_axis, "0,1,0");
        assert_eq!(bp.plane_uvw_trailing.as_ref().unwrap(), leading);

        // untouched fields pass through
        assert_eq!(ring.ring_dims.radius, 3.0);
        assert_eq!(bp.qty, 6);
        assert_eq!(bp.start_angle, 0.0);
        assert!(bp.allow.is_none());
    }

    #[test]
    fn update_is_idempotent() {
        let update = scenario_update();
        let once = apply_ring_update(&scenario_input(), &update).expect("first run");
        let twice = apply_ring_update(&once, &update).expect("second run");
        assert_eq!(once, twice);
    }

    #[test]
    fn only_ring_zero_is_touched() {
        let mut v: serde_json::Value = serde_json::from_str(&scenario_input()).unwrap();
        let mut second = v["ring"][0].clone();
        second["id"] = serde_json::json!(2);
        second["name"] = serde_json::json!("R2");
        v["ring"].as_array_mut().unwrap().push(second);

        let out = apply_ring_update(&v.to_string(), &scenario_update()).expect("update");
        let proj = Project::from_json(&out).expect("decode output");

        let r2 = &proj.ring[1];
        assert_eq!(r2.name, "R2");
        assert!(r2.ring_dims.b_max.is_none());
        assert!(r2.build_pos.as_ref().unwrap().pitch_angle.is_none());
    }

    #[test]
    fn empty_ring_list_fails() {
        let input = serde_json::json!({
            "job_number": 1,
            "project_name": "T",
            "ring": []
        })
        .to_string();
        let err = apply_ring_update(&input, &scenario_update()).unwrap_err();
        assert!(matches!(err, UpdateError::NoRings));
    }

    #[test]
    fn missing_build_pos_fails() {
        let mut v: serde_json::Value = serde_json::from_str(&scenario_input()).unwrap();
        v["ring"][0].as_object_mut().unwrap().remove("build_pos");
        let err = apply_ring_update(&v.to_string(), &scenario_update()).unwrap_err();
        match err {
            UpdateError::MissingBuildPos(name) => assert_eq!(name, "R1"),
            other => panic!("expected MissingBuildPos, got {:?}", other),
        }
    }

    #[test]
    fn schema_errors_propagate() {
        let err = apply_ring_update("{\"job_number\": 1}", &scenario_update()).unwrap_err();
        assert!(matches!(err, UpdateError::Schema(_)));
    }

    #[test]
    fn non_identity_frames_format_fully() {
        let mut update = scenario_update();
        update.uvw_leading = Frame::new(
            Point3::new(0.0, 0.0, 1600.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        let out = apply_ring_update(&scenario_input(), &update).expect("update");
        let proj = Project::from_json(&out).expect("decode output");
        let leading = proj.ring[0]
            .build_pos
            .as_ref()
            .unwrap()
            .plane_uvw_leading
            .as_ref()
            .unwrap();
        assert_eq!(leading.origin, "0,0,1600");
        assert_eq!(leading.x_axis, "0,-1,0");
        // and the text converts back to the same frame
        assert_eq!(frame_from_uvw(leading).unwrap(), update.uvw_leading);
    }
}
