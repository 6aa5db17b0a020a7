#![warn(missing_docs)]

//! JSON schema model for precast concrete tunnel-lining projects.
//!
//! A [`Project`] owns rings, rings own segments, and segments own joints
//! and embedded components (dowels, bolts, gaskets, ...). The tree is
//! strictly ownership-shaped: no back-references, no cycles.
//!
//! Wire contract:
//! - object keys serialize in declaration order, indented;
//! - optional fields are omitted when absent, never emitted as `null`;
//! - decoding fails with a [`SchemaError`] naming the entity and field
//!   when a required field is missing, any field is null, or a value has
//!   the wrong type.

mod decode;
mod error;
mod model;

pub use error::{Result, SchemaError};
pub use model::{
    Anchor, Bolt, BuildPos, Dowel, Gasket, GroutSocket, GuideRod, HandlingPocket, Indicator,
    IndicatorAdditional, Joint, Label, PlaneUvw, Project, Ring, RingDims, SegComponent, SegDims,
    Segment, SegmentationPoint,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// A project exercising every entity type and a mix of present and
    /// absent optional fields.
    fn full_project_text() -> String {
        serde_json::json!({
            "job_number": 24210034,
            "project_name": "Crossover Drive",
            "ring": [{
                "build_pos": {
                    "allow": [0, 2, 4, 6],
                    "from_previous": 3,
                    "qty": 8,
                    "start_angle": 22.5
                },
                "id": 1,
                "name": "R1",
                "ring_dims": {
                    "b_max": 1640.0,
                    "Radius": 2.85,
                    "Taper": 40.0,
                    "Thickness": 275.0,
                    "Width": 1600.0
                },
                "ring_type": "universal",
                "segment": [{
                    "component": {
                        "anchor": [{
                            "id": 1,
                            "plane_uvw": {"origin": "0,0,0", "x_axis": "1,0,0", "y_axis": "0,1,0"},
                            "void_geom": "blocks/anchor_void.3dm"
                        }],
                        "bolt": [{
                            "end": "socket",
                            "id": 1,
                            "joint_face": "L1",
                            "obj_geom": "blocks/bolt.3dm",
                            "void_geom": "blocks/bolt_void.3dm"
                        }],
                        "dowel": [{
                            "build_pos_num": 1,
                            "cl_radius": 2850.0,
                            "id": 1,
                            "joint_face": "C1",
                            "name": "D1",
                            "obj_geom": "blocks/dowel.3dm",
                            "plane_uvw": {"origin": "0,2850,0", "x_axis": "1,0,0", "y_axis": "0,0,1"},
                            "preinstalled": true,
                            "void_geom": "blocks/dowel_void.3dm"
                        }],
                        "gasket": [{
                            "cl_dist": 12.5,
                            "id": 1,
                            "joint_face": "L1"
                        }],
                        "grout_socket": [{
                            "id": 1,
                            "obj_geom": "blocks/socket.3dm",
                            "plane_uvw": {"origin": "0,0,0", "x_axis": "1,0,0", "y_axis": "0,1,0"},
                            "void_geom": "blocks/socket_void.3dm"
                        }],
                        "guide_rod": [{
                            "id": 1,
                            "joint_face": "L2",
                            "plane_uvw": {"origin": "0,0,0", "x_axis": "1,0,0", "y_axis": "0,1,0"},
                            "preinstalled": false,
                            "void_geom": "blocks/rod_void.3dm"
                        }],
                        "handling_pocket": [{
                            "id": 1,
                            "plane_uvw": {"origin": "0,0,0", "x_axis": "1,0,0", "y_axis": "0,1,0"},
                            "void_geom": "blocks/pocket_void.3dm"
                        }],
                        "indicator_additional": [{
                            "id": 1,
                            "plane_uvw": {"origin": "0,0,0", "x_axis": "1,0,0", "y_axis": "0,1,0"},
                            "void_geom": "blocks/ind2_void.3dm"
                        }],
                        "indicator": [{
                            "id": 1,
                            "joint_face": "C1",
                            "plane_uvw": {"origin": "0,0,0", "x_axis": "1,0,0", "y_axis": "0,1,0"},
                            "void_geom": "blocks/ind_void.3dm"
                        }],
                        "label": [{
                            "id": 1,
                            "joint_face": "C2",
                            "plane_uvw": {"origin": "0,0,0", "x_axis": "1,0,0", "y_axis": "0,1,0"},
                            "text": "R1-S1",
                            "void_geom": "blocks/label_void.3dm"
                        }]
                    },
                    "id": 1,
                    "joint": [{
                        "contact": "flat",
                        "location": "L1",
                        "pline_face": "blocks/face.3dm",
                        "pline_relief_left": "blocks/relief_l.3dm",
                        "pline_relief_right": "blocks/relief_r.3dm"
                    }],
                    "name": "S1",
                    "ring_dims": {
                        "Radius": 2.85,
                        "Taper": 40.0,
                        "Thickness": 275.0,
                        "Width": 1600.0
                    },
                    "ringbuild_seq": 1,
                    "seg_dims": {
                        "beta": 67.5,
                        "skew_end": 0.0,
                        "skew_start": 0.0,
                        "subtend_end": 67.5,
                        "subtend_start": 0.0,
                        "twist_end": 0.0,
                        "twist_start": 0.0
                    },
                    "seg_type": "standard",
                    "segmentation_point": [{
                        "pos_circ": "centreline",
                        "pos_long": "leading",
                        "pos_thru": "centroid",
                        "r": 2850.0, "t": 33.75,
                        "u": 0.0, "v": 0.0, "w": 0.0,
                        "x": 1583.7, "y": 2369.4, "z": 800.0
                    }],
                    "tags": ["alt"]
                }],
                "tags": ["north drive"]
            }]
        })
        .to_string()
    }

    #[test]
    fn roundtrip_is_byte_identical() {
        let proj = Project::from_json(&full_project_text()).expect("decode");
        let first = proj.to_json().expect("encode");
        let again = Project::from_json(&first).expect("re-decode");
        assert_eq!(proj, again);
        assert_eq!(first, again.to_json().expect("re-encode"));
    }

    #[test]
    fn absent_optionals_stay_absent() {
        let proj = Project::from_json(&full_project_text()).expect("decode");
        let out = proj.to_json().expect("encode");
        // build_pos has no pitch_angle or planes; ring_dims has no b_min.
        assert!(!out.contains("pitch_angle"));
        assert!(!out.contains("plane_uvw_leading"));
        assert!(!out.contains("b_min"));
        assert!(!out.contains("null"));
        // present optionals do come through
        assert!(out.contains("b_max"));
        assert!(out.contains("from_previous"));
    }

    #[test]
    fn keys_serialize_in_declaration_order() {
        let proj = Project::from_json(&full_project_text()).expect("decode");
        let out = proj.to_json().expect("encode");
        // Ring declares build_pos before id, and ring_dims keeps the
        // capitalized names between the snake_case optionals.
        let build_pos = out.find("\"build_pos\"").unwrap();
        let ring_id = out[build_pos..].find("\"id\"").unwrap() + build_pos;
        assert!(build_pos < ring_id);
        let b_max = out.find("\"b_max\"").unwrap();
        let radius = out.find("\"Radius\"").unwrap();
        let taper_angle = out.find("\"taper_angle\"");
        assert!(b_max < radius);
        assert!(taper_angle.is_none());
        let thickness = out.find("\"Thickness\"").unwrap();
        let width = out.find("\"Width\"").unwrap();
        assert!(radius < thickness && thickness < width);
    }

    #[test]
    fn capitalized_ring_dims_names_roundtrip() {
        let proj = Project::from_json(&full_project_text()).expect("decode");
        let out = proj.to_json().expect("encode");
        for key in ["\"Radius\"", "\"Taper\"", "\"Thickness\"", "\"Width\""] {
            assert!(out.contains(key), "missing {key}");
        }
        assert!(!out.contains("\"radius\""));
        assert!(!out.contains("\"thickness\""));
    }

    #[test]
    fn cloned_dowel_is_independent() {
        let proj = Project::from_json(&full_project_text()).expect("decode");
        let dowel = proj.ring[0].segment[0]
            .component
            .as_ref()
            .unwrap()
            .dowel
            .as_ref()
            .unwrap()[0]
            .clone();

        let mut copy = dowel.clone();
        copy.name = Some("D1-mod".to_string());
        copy.plane_uvw.as_mut().unwrap().origin = "9,9,9".to_string();

        assert_eq!(dowel.name.as_deref(), Some("D1"));
        assert_eq!(dowel.plane_uvw.as_ref().unwrap().origin, "0,2850,0");
    }

    #[test]
    fn plane_uvw_wire_shape() {
        let plane = PlaneUvw {
            origin: "1,2,3".to_string(),
            x_axis: "1,0,0".to_string(),
            y_axis: "0,1,0".to_string(),
        };
        let out = serde_json::to_string(&plane).unwrap();
        assert_eq!(
            out,
            r#"{"origin":"1,2,3","x_axis":"1,0,0","y_axis":"0,1,0"}"#
        );
    }
}
