//! Conversion between [`Frame`] and the textual [`PlaneUvw`] wire form.

use lining_math::{ComponentError, Frame, Point3, Vec3};
use lining_schema::PlaneUvw;

/// Convert a coordinate frame to its wire form.
///
/// Each record becomes a `"x,y,z"` string using default `f64` formatting;
/// no rounding is applied beyond shortest-round-trip printing.
pub fn frame_to_uvw(frame: &Frame) -> PlaneUvw {
    PlaneUvw {
        origin: lining_math::format_components(frame.origin.x, frame.origin.y, frame.origin.z),
        x_axis: lining_math::format_components(frame.x_axis.x, frame.x_axis.y, frame.x_axis.z),
        y_axis: lining_math::format_components(frame.y_axis.x, frame.y_axis.y, frame.y_axis.z),
    }
}

/// Parse a wire-form plane back into a coordinate frame.
///
/// The origin string becomes a point, the axis strings become direction
/// vectors. Any string that is not exactly three numeric components is an
/// error; malformed planes are never silently replaced by a zero frame.
pub fn frame_from_uvw(plane: &PlaneUvw) -> Result<Frame, ComponentError> {
    let [ox, oy, oz] = lining_math::parse_components(&plane.origin)?;
    let [xx, xy, xz] = lining_math::parse_components(&plane.x_axis)?;
    let [yx, yy, yz] = lining_math::parse_components(&plane.y_axis)?;
    Ok(Frame::new(
        Point3::new(ox, oy, oz),
        Vec3::new(xx, xy, xz),
        Vec3::new(yx, yy, yz),
    ))
}
