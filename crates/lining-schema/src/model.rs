//! Entity types for the tunnel-lining project schema.
//!
//! Field declaration order is the wire order: serialization emits object
//! keys in the order fields are declared here, and that order is part of
//! the format. Optional fields are omitted entirely when absent — they are
//! never emitted as `null`.
//!
//! Four [`RingDims`] fields (`Radius`, `Taper`, `Thickness`, `Width`) keep
//! an atypical capitalized wire name for compatibility with existing
//! project files.

use serde::Serialize;

use crate::decode;
use crate::error::Result;

/// A precast concrete tunnel-lining project: one job and its rings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    /// Eight-digit job number (hyphen omitted).
    pub job_number: i64,
    /// Project name.
    pub project_name: String,
    /// Rings considered in this project.
    pub ring: Vec<Ring>,
}

impl Project {
    /// Decode a project from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        decode::project(&value)
    }

    /// Encode this project as indented JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One complete cross-sectional assembly of the tunnel lining.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ring {
    /// Ringbuild position rules for this ring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_pos: Option<BuildPos>,
    /// Unique numeric identifier.
    pub id: i64,
    /// User-defined name.
    pub name: String,
    /// Ring dimensions.
    pub ring_dims: RingDims,
    /// Tunnel ring type.
    pub ring_type: String,
    /// Segments comprising this ring.
    pub segment: Vec<Segment>,
    /// User-defined tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Discrete rotational positions at which a ring may be built relative to
/// the previous ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildPos {
    /// Allowable build positions, 0 (no rotation) to n-1, clockwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow: Option<Vec<i64>>,
    /// Build position number relative to the previous ring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_previous: Option<i64>,
    /// Angular pitch [deg] between adjacent theoretical positions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch_angle: Option<f64>,
    /// Coordinate frame of the leading-edge ringbuild plane, relative to
    /// the ring plane.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plane_uvw_leading: Option<PlaneUvw>,
    /// Coordinate frame of the trailing-edge ringbuild plane, relative to
    /// the ring plane.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plane_uvw_trailing: Option<PlaneUvw>,
    /// Number of theoretical positions (i.e. number of dowels).
    pub qty: i64,
    /// Angle [deg] to the first build position, clockwise from tunnel
    /// azimuth (+Y axis).
    pub start_angle: f64,
}

/// Dimensions of a tunnel ring.
///
/// The four capitalized wire names are historical and must round-trip
/// exactly as written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingDims {
    /// Maximum ring width [mm] (W+T).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b_max: Option<f64>,
    /// Minimum ring width [mm] (W-T).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b_min: Option<f64>,
    /// Diameter [m] at the extrados.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dia_ext: Option<f64>,
    /// Diameter [m] at the intrados.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dia_int: Option<f64>,
    /// Centroidal radius [m] of the lining.
    #[serde(rename = "Radius")]
    pub radius: f64,
    /// Nominal taper distance [mm].
    #[serde(rename = "Taper")]
    pub taper: f64,
    /// Taper angle of the ring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taper_angle: Option<f64>,
    /// Lining thickness [mm].
    #[serde(rename = "Thickness")]
    pub thickness: f64,
    /// Nominal ring width [mm].
    #[serde(rename = "Width")]
    pub width: f64,
}

/// One precast segment of a ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Embedded components within this segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<SegComponent>,
    /// Unique numeric identifier.
    pub id: i64,
    /// Joint faces at the segment perimeter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint: Option<Vec<Joint>>,
    /// User-defined name.
    pub name: String,
    /// Coordinate frame of the segment relative to the ring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plane_uvw: Option<PlaneUvw>,
    /// Ring dimensions this segment belongs to.
    pub ring_dims: RingDims,
    /// Install order during the ring build (key segment last).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ringbuild_seq: Option<i64>,
    /// Segment angular geometry.
    pub seg_dims: SegDims,
    /// User-defined segment type (standard/key/counterkey, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seg_type: Option<String>,
    /// Geometric control points for the theoretical segment extents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segmentation_point: Option<Vec<SegmentationPoint>>,
    /// User-defined tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Typed collections of components embedded in a segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegComponent {
    /// Anchor points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Vec<Anchor>>,
    /// Bolts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bolt: Option<Vec<Bolt>>,
    /// Circumferential dowels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dowel: Option<Vec<Dowel>>,
    /// Gaskets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gasket: Option<Vec<Gasket>>,
    /// Grout sockets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grout_socket: Option<Vec<GroutSocket>>,
    /// Guide rods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide_rod: Option<Vec<GuideRod>>,
    /// Handling pockets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling_pocket: Option<Vec<HandlingPocket>>,
    /// Additional indicators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator_additional: Option<Vec<IndicatorAdditional>>,
    /// Alignment indicators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<Vec<Indicator>>,
    /// Labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Vec<Label>>,
}

/// Anchor point for fixing internal structures or services to a segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anchor {
    /// Unique numeric identifier.
    pub id: i64,
    /// User-defined name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path to the block file with the anchor object geometry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj_geom: Option<String>,
    /// Coordinate frame relative to the segment.
    pub plane_uvw: PlaneUvw,
    /// Specified product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Path to the block file with the concrete void geometry.
    pub void_geom: String,
}

/// A local coordinate frame on the wire: origin point, X-axis vector, and
/// Y-axis vector, each encoded as a `"x,y,z"` string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaneUvw {
    /// Origin point, `"x,y,z"`.
    pub origin: String,
    /// X-axis vector, `"x,y,z"`.
    pub x_axis: String,
    /// Y-axis vector, `"x,y,z"`.
    pub y_axis: String,
}

/// Bolted connection between segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bolt {
    /// End type of the connection at this position.
    pub end: String,
    /// Unique numeric identifier.
    pub id: i64,
    /// Joint face on which the bolt sits.
    pub joint_face: String,
    /// User-defined name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path to the block file with the bolt object geometry.
    pub obj_geom: String,
    /// Coordinate frame relative to the joint face.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plane_uvw: Option<PlaneUvw>,
    /// Specified product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Path to the block file with the concrete void geometry.
    pub void_geom: String,
}

/// Circumferential dowel connecting adjacent rings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dowel {
    /// Build position number for this dowel.
    pub build_pos_num: i64,
    /// Radius from tunnel centreline to the installed dowel centre,
    /// measured in the circumferential joint plane.
    pub cl_radius: f64,
    /// Dowel type installed in the ring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dowel_type: Option<String>,
    /// Unique numeric identifier.
    pub id: i64,
    /// Joint face on which the dowel sits.
    pub joint_face: String,
    /// User-defined name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path to the block file with the dowel geometry.
    pub obj_geom: String,
    /// Coordinate frame relative to the joint face.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plane_uvw: Option<PlaneUvw>,
    /// Whether the dowel is installed in this segment (true) or the
    /// adjacent one (false).
    pub preinstalled: bool,
    /// Specified product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Path to the block file with the matching void geometry.
    pub void_geom: String,
}

/// Compressible gasket sealing a segment joint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gasket {
    /// Distance from joint centreline to gasket centreline; positive
    /// toward intrados.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cl_dist: Option<f64>,
    /// Unique numeric identifier.
    pub id: i64,
    /// Joint face on which the gasket sits.
    pub joint_face: String,
    /// User-defined name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path to the block file with the gasket geometry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj_geom: Option<String>,
    /// Path to the block file with the 2D gasket cross section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj_section: Option<String>,
    /// Coordinate frame relative to the joint face.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plane_uvw: Option<PlaneUvw>,
    /// Specified product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Path to the block file with the gasket recess void geometry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub void_geom: Option<String>,
}

/// Grout socket for secondary grouting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroutSocket {
    /// Unique numeric identifier.
    pub id: i64,
    /// User-defined name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path to the block file with the socket object geometry.
    pub obj_geom: String,
    /// Coordinate frame relative to the segment.
    pub plane_uvw: PlaneUvw,
    /// Specified product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Path to the block file with the concrete void geometry.
    pub void_geom: String,
}

/// Guide rod aligning adjacent segments along a longitudinal joint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuideRod {
    /// Unique numeric identifier.
    pub id: i64,
    /// Joint face on which the rod sits.
    pub joint_face: String,
    /// User-defined name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path to the block file with the rod object geometry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj_geom: Option<String>,
    /// Coordinate frame relative to the joint face.
    pub plane_uvw: PlaneUvw,
    /// Whether the rod is installed in this segment (true) or the
    /// adjacent one (false).
    pub preinstalled: bool,
    /// Specified product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Path to the block file with the concrete void geometry.
    pub void_geom: String,
}

/// Pocket in the lining to assist handling, e.g. by a vacuum erector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandlingPocket {
    /// Unique numeric identifier.
    pub id: i64,
    /// User-defined name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Coordinate frame relative to the segment.
    pub plane_uvw: PlaneUvw,
    /// Path to the block file with the pocket void geometry.
    pub void_geom: String,
}

/// Additional indicator mark located relative to the segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorAdditional {
    /// Unique numeric identifier.
    pub id: i64,
    /// User-defined name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Coordinate frame relative to the segment.
    pub plane_uvw: PlaneUvw,
    /// Path to the block file with the indicator void geometry.
    pub void_geom: String,
}

/// Indentation marking alignment between adjacent segments, e.g. at bolt
/// and dowel locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    /// Unique numeric identifier.
    pub id: i64,
    /// Joint face the indicator is located from.
    pub joint_face: String,
    /// User-defined name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Coordinate frame relative to the joint face.
    pub plane_uvw: PlaneUvw,
    /// Path to the block file with the indicator void geometry.
    pub void_geom: String,
}

/// Indentation labelling segment information; may carry an RFID tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    /// Unique numeric identifier.
    pub id: i64,
    /// Joint face the label is located from.
    pub joint_face: String,
    /// User-defined name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path to the block file with embedded label objects (e.g. RFID chip).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj_geom: Option<String>,
    /// Coordinate frame relative to the joint face.
    pub plane_uvw: PlaneUvw,
    /// Alphanumeric label text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Path to the block file with the label void geometry.
    pub void_geom: String,
}

/// A joint face at the perimeter of a segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Joint {
    /// Contact conditions toward adjoining segments.
    pub contact: String,
    /// Segment face defined by this joint.
    pub location: String,
    /// Coordinate frame relative to the segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plane_uvw: Option<PlaneUvw>,
    /// Path to the block file with the typical joint face polyline.
    pub pline_face: String,
    /// Path to the block file with the left joint-relief polyline.
    pub pline_relief_left: String,
    /// Path to the block file with the right joint-relief polyline.
    pub pline_relief_right: String,
}

/// Angular geometry of a segment within its ring.
///
/// Subtend angles are azimuths [deg] measured clockwise from the point of
/// minimum ring taper; skew is rotation about the radial axis and twist is
/// rotation about the longitudinal axis at each edge of the subtended
/// domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegDims {
    /// Angle [deg] subtended by this segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    /// Joint skew [deg] at the end (left edge) of the domain.
    pub skew_end: f64,
    /// Joint skew [deg] at the start (right edge) of the domain.
    pub skew_start: f64,
    /// Azimuth [deg] at the end (left edge) of the domain.
    pub subtend_end: f64,
    /// Azimuth [deg] at the start (right edge) of the domain.
    pub subtend_start: f64,
    /// Joint twist [deg] at the end of the domain.
    pub twist_end: f64,
    /// Joint twist [deg] at the start of the domain.
    pub twist_start: f64,
}

/// Geometric control point for theoretical segment extents, given in both
/// global and local coordinate systems.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentationPoint {
    /// Circumferential position: right edge, centreline, or left edge.
    pub pos_circ: String,
    /// Longitudinal position: leading edge, mid-plane, or trailing edge.
    pub pos_long: String,
    /// Through-thickness position: intrados, centroid, or extrados.
    pub pos_thru: String,
    /// r-coordinate [mm], global polar.
    pub r: f64,
    /// t-coordinate [deg], global polar.
    pub t: f64,
    /// u-coordinate [mm], local cartesian.
    pub u: f64,
    /// v-coordinate [mm], local cartesian.
    pub v: f64,
    /// w-coordinate [mm], local cartesian.
    pub w: f64,
    /// X-coordinate [mm], global cartesian.
    pub x: f64,
    /// Y-coordinate [mm], global cartesian.
    pub y: f64,
    /// Z-coordinate [mm], global cartesian.
    pub z: f64,
}
