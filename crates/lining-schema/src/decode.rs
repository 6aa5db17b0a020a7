//! Hand-written decoder from JSON values into the schema model.
//!
//! Decoding is deliberately not derived: the schema distinguishes
//! "field absent" from "field present but null" (the latter is always an
//! error), and decode failures must name both the entity type and the wire
//! field. Each entity function below doubles as the field-mapping table —
//! one line per field, wire name and requiredness visible at a glance.

use serde_json::{Map, Value};

use crate::error::{Result, SchemaError};
use crate::model::*;

/// Reader over one JSON object, carrying the entity name for error context.
struct Obj<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Obj<'a> {
    fn new(entity: &'static str, value: &'a Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or(SchemaError::NotAnObject { entity })?;
        Ok(Self { entity, map })
    }

    /// Required field: absent and null are both errors.
    fn req(&self, field: &'static str) -> Result<&'a Value> {
        match self.map.get(field) {
            None => Err(SchemaError::MissingField {
                entity: self.entity,
                field,
            }),
            Some(Value::Null) => Err(SchemaError::NullField {
                entity: self.entity,
                field,
            }),
            Some(v) => Ok(v),
        }
    }

    /// Optional field: absent is fine, null is an error.
    fn opt(&self, field: &'static str) -> Result<Option<&'a Value>> {
        match self.map.get(field) {
            None => Ok(None),
            Some(Value::Null) => Err(SchemaError::NullField {
                entity: self.entity,
                field,
            }),
            Some(v) => Ok(Some(v)),
        }
    }

    fn wrong(&self, field: &'static str, expected: &'static str) -> SchemaError {
        SchemaError::WrongType {
            entity: self.entity,
            field,
            expected,
        }
    }

    fn req_i64(&self, field: &'static str) -> Result<i64> {
        self.req(field)?
            .as_i64()
            .ok_or_else(|| self.wrong(field, "an integer"))
    }

    fn opt_i64(&self, field: &'static str) -> Result<Option<i64>> {
        self.opt(field)?
            .map(|v| v.as_i64().ok_or_else(|| self.wrong(field, "an integer")))
            .transpose()
    }

    fn req_f64(&self, field: &'static str) -> Result<f64> {
        self.req(field)?
            .as_f64()
            .ok_or_else(|| self.wrong(field, "a number"))
    }

    fn opt_f64(&self, field: &'static str) -> Result<Option<f64>> {
        self.opt(field)?
            .map(|v| v.as_f64().ok_or_else(|| self.wrong(field, "a number")))
            .transpose()
    }

    fn req_bool(&self, field: &'static str) -> Result<bool> {
        self.req(field)?
            .as_bool()
            .ok_or_else(|| self.wrong(field, "a boolean"))
    }

    fn req_str(&self, field: &'static str) -> Result<String> {
        Ok(self
            .req(field)?
            .as_str()
            .ok_or_else(|| self.wrong(field, "a string"))?
            .to_string())
    }

    fn opt_str(&self, field: &'static str) -> Result<Option<String>> {
        self.opt(field)?
            .map(|v| {
                v.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.wrong(field, "a string"))
            })
            .transpose()
    }

    /// Required array of nested entities, decoded element-wise.
    fn req_seq<T>(
        &self,
        field: &'static str,
        item: impl Fn(&Value) -> Result<T>,
    ) -> Result<Vec<T>> {
        self.req(field)?
            .as_array()
            .ok_or_else(|| self.wrong(field, "an array"))?
            .iter()
            .map(item)
            .collect()
    }

    /// Optional array of nested entities.
    fn opt_seq<T>(
        &self,
        field: &'static str,
        item: impl Fn(&Value) -> Result<T>,
    ) -> Result<Option<Vec<T>>> {
        match self.opt(field)? {
            None => Ok(None),
            Some(v) => v
                .as_array()
                .ok_or_else(|| self.wrong(field, "an array"))?
                .iter()
                .map(item)
                .collect::<Result<Vec<T>>>()
                .map(Some),
        }
    }

    fn opt_str_seq(&self, field: &'static str) -> Result<Option<Vec<String>>> {
        self.opt_seq(field, |v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| self.wrong(field, "an array of strings"))
        })
    }

    fn opt_i64_seq(&self, field: &'static str) -> Result<Option<Vec<i64>>> {
        self.opt_seq(field, |v| {
            v.as_i64()
                .ok_or_else(|| self.wrong(field, "an array of integers"))
        })
    }

    /// Required nested entity.
    fn req_with<T>(&self, field: &'static str, item: impl Fn(&Value) -> Result<T>) -> Result<T> {
        item(self.req(field)?)
    }

    /// Optional nested entity.
    fn opt_with<T>(
        &self,
        field: &'static str,
        item: impl Fn(&Value) -> Result<T>,
    ) -> Result<Option<T>> {
        self.opt(field)?.map(item).transpose()
    }
}

pub(crate) fn project(v: &Value) -> Result<Project> {
    let o = Obj::new("project", v)?;
    Ok(Project {
        job_number: o.req_i64("job_number")?,
        project_name: o.req_str("project_name")?,
        ring: o.req_seq("ring", ring)?,
    })
}

fn ring(v: &Value) -> Result<Ring> {
    let o = Obj::new("ring", v)?;
    Ok(Ring {
        build_pos: o.opt_with("build_pos", build_pos)?,
        id: o.req_i64("id")?,
        name: o.req_str("name")?,
        ring_dims: o.req_with("ring_dims", ring_dims)?,
        ring_type: o.req_str("ring_type")?,
        segment: o.req_seq("segment", segment)?,
        tags: o.opt_str_seq("tags")?,
    })
}

fn build_pos(v: &Value) -> Result<BuildPos> {
    let o = Obj::new("build_pos", v)?;
    Ok(BuildPos {
        allow: o.opt_i64_seq("allow")?,
        from_previous: o.opt_i64("from_previous")?,
        pitch_angle: o.opt_f64("pitch_angle")?,
        plane_uvw_leading: o.opt_with("plane_uvw_leading", plane_uvw)?,
        plane_uvw_trailing: o.opt_with("plane_uvw_trailing", plane_uvw)?,
        qty: o.req_i64("qty")?,
        start_angle: o.req_f64("start_angle")?,
    })
}

fn ring_dims(v: &Value) -> Result<RingDims> {
    let o = Obj::new("ring_dims", v)?;
    Ok(RingDims {
        b_max: o.opt_f64("b_max")?,
        b_min: o.opt_f64("b_min")?,
        dia_ext: o.opt_f64("dia_ext")?,
        dia_int: o.opt_f64("dia_int")?,
        radius: o.req_f64("Radius")?,
        taper: o.req_f64("Taper")?,
        taper_angle: o.opt_f64("taper_angle")?,
        thickness: o.req_f64("Thickness")?,
        width: o.req_f64("Width")?,
    })
}

fn segment(v: &Value) -> Result<Segment> {
    let o = Obj::new("segment", v)?;
    Ok(Segment {
        component: o.opt_with("component", seg_component)?,
        id: o.req_i64("id")?,
        joint: o.opt_seq("joint", joint)?,
        name: o.req_str("name")?,
        plane_uvw: o.opt_with("plane_uvw", plane_uvw)?,
        ring_dims: o.req_with("ring_dims", ring_dims)?,
        ringbuild_seq: o.opt_i64("ringbuild_seq")?,
        seg_dims: o.req_with("seg_dims", seg_dims)?,
        seg_type: o.opt_str("seg_type")?,
        segmentation_point: o.opt_seq("segmentation_point", segmentation_point)?,
        tags: o.opt_str_seq("tags")?,
    })
}

fn seg_component(v: &Value) -> Result<SegComponent> {
    let o = Obj::new("component", v)?;
    Ok(SegComponent {
        anchor: o.opt_seq("anchor", anchor)?,
        bolt: o.opt_seq("bolt", bolt)?,
        dowel: o.opt_seq("dowel", dowel)?,
        gasket: o.opt_seq("gasket", gasket)?,
        grout_socket: o.opt_seq("grout_socket", grout_socket)?,
        guide_rod: o.opt_seq("guide_rod", guide_rod)?,
        handling_pocket: o.opt_seq("handling_pocket", handling_pocket)?,
        indicator_additional: o.opt_seq("indicator_additional", indicator_additional)?,
        indicator: o.opt_seq("indicator", indicator)?,
        label: o.opt_seq("label", label)?,
    })
}

fn anchor(v: &Value) -> Result<Anchor> {
    let o = Obj::new("anchor", v)?;
    Ok(Anchor {
        id: o.req_i64("id")?,
        name: o.opt_str("name")?,
        obj_geom: o.opt_str("obj_geom")?,
        plane_uvw: o.req_with("plane_uvw", plane_uvw)?,
        product: o.opt_str("product")?,
        void_geom: o.req_str("void_geom")?,
    })
}

fn plane_uvw(v: &Value) -> Result<PlaneUvw> {
    let o = Obj::new("plane_uvw", v)?;
    Ok(PlaneUvw {
        origin: o.req_str("origin")?,
        x_axis: o.req_str("x_axis")?,
        y_axis: o.req_str("y_axis")?,
    })
}

fn bolt(v: &Value) -> Result<Bolt> {
    let o = Obj::new("bolt", v)?;
    Ok(Bolt {
        end: o.req_str("end")?,
        id: o.req_i64("id")?,
        joint_face: o.req_str("joint_face")?,
        name: o.opt_str("name")?,
        obj_geom: o.req_str("obj_geom")?,
        plane_uvw: o.opt_with("plane_uvw", plane_uvw)?,
        product: o.opt_str("product")?,
        void_geom: o.req_str("void_geom")?,
    })
}

fn dowel(v: &Value) -> Result<Dowel> {
    let o = Obj::new("dowel", v)?;
    Ok(Dowel {
        build_pos_num: o.req_i64("build_pos_num")?,
        cl_radius: o.req_f64("cl_radius")?,
        dowel_type: o.opt_str("dowel_type")?,
        id: o.req_i64("id")?,
        joint_face: o.req_str("joint_face")?,
        name: o.opt_str("name")?,
        obj_geom: o.req_str("obj_geom")?,
        plane_uvw: o.opt_with("plane_uvw", plane_uvw)?,
        preinstalled: o.req_bool("preinstalled")?,
        product: o.opt_str("product")?,
        void_geom: o.req_str("void_geom")?,
    })
}

fn gasket(v: &Value) -> Result<Gasket> {
    let o = Obj::new("gasket", v)?;
    Ok(Gasket {
        cl_dist: o.opt_f64("cl_dist")?,
        id: o.req_i64("id")?,
        joint_face: o.req_str("joint_face")?,
        name: o.opt_str("name")?,
        obj_geom: o.opt_str("obj_geom")?,
        obj_section: o.opt_str("obj_section")?,
        plane_uvw: o.opt_with("plane_uvw", plane_uvw)?,
        product: o.opt_str("product")?,
        void_geom: o.opt_str("void_geom")?,
    })
}

fn grout_socket(v: &Value) -> Result<GroutSocket> {
    let o = Obj::new("grout_socket", v)?;
    Ok(GroutSocket {
        id: o.req_i64("id")?,
        name: o.opt_str("name")?,
        obj_geom: o.req_str("obj_geom")?,
        plane_uvw: o.req_with("plane_uvw", plane_uvw)?,
        product: o.opt_str("product")?,
        void_geom: o.req_str("void_geom")?,
    })
}

fn guide_rod(v: &Value) -> Result<GuideRod> {
    let o = Obj::new("guide_rod", v)?;
    Ok(GuideRod {
        id: o.req_i64("id")?,
        joint_face: o.req_str("joint_face")?,
        name: o.opt_str("name")?,
        obj_geom: o.opt_str("obj_geom")?,
        plane_uvw: o.req_with("plane_uvw", plane_uvw)?,
        preinstalled: o.req_bool("preinstalled")?,
        product: o.opt_str("product")?,
        void_geom: o.req_str("void_geom")?,
    })
}

fn handling_pocket(v: &Value) -> Result<HandlingPocket> {
    let o = Obj::new("handling_pocket", v)?;
    Ok(HandlingPocket {
        id: o.req_i64("id")?,
        name: o.opt_str("name")?,
        plane_uvw: o.req_with("plane_uvw", plane_uvw)?,
        void_geom: o.req_str("void_geom")?,
    })
}

fn indicator_additional(v: &Value) -> Result<IndicatorAdditional> {
    let o = Obj::new("indicator_additional", v)?;
    Ok(IndicatorAdditional {
        id: o.req_i64("id")?,
        name: o.opt_str("name")?,
        plane_uvw: o.req_with("plane_uvw", plane_uvw)?,
        void_geom: o.req_str("void_geom")?,
    })
}

fn indicator(v: &Value) -> Result<Indicator> {
    let o = Obj::new("indicator", v)?;
    Ok(Indicator {
        id: o.req_i64("id")?,
        joint_face: o.req_str("joint_face")?,
        name: o.opt_str("name")?,
        plane_uvw: o.req_with("plane_uvw", plane_uvw)?,
        void_geom: o.req_str("void_geom")?,
    })
}

fn label(v: &Value) -> Result<Label> {
    let o = Obj::new("label", v)?;
    Ok(Label {
        id: o.req_i64("id")?,
        joint_face: o.req_str("joint_face")?,
        name: o.opt_str("name")?,
        obj_geom: o.opt_str("obj_geom")?,
        plane_uvw: o.req_with("plane_uvw", plane_uvw)?,
        text: o.opt_str("text")?,
        void_geom: o.req_str("void_geom")?,
    })
}

fn joint(v: &Value) -> Result<Joint> {
    let o = Obj::new("joint", v)?;
    Ok(Joint {
        contact: o.req_str("contact")?,
        location: o.req_str("location")?,
        plane_uvw: o.opt_with("plane_uvw", plane_uvw)?,
        pline_face: o.req_str("pline_face")?,
        pline_relief_left: o.req_str("pline_relief_left")?,
        pline_relief_right: o.req_str("pline_relief_right")?,
    })
}

fn seg_dims(v: &Value) -> Result<SegDims> {
    let o = Obj::new("seg_dims", v)?;
    Ok(SegDims {
        beta: o.opt_f64("beta")?,
        skew_end: o.req_f64("skew_end")?,
        skew_start: o.req_f64("skew_start")?,
        subtend_end: o.req_f64("subtend_end")?,
        subtend_start: o.req_f64("subtend_start")?,
        twist_end: o.req_f64("twist_end")?,
        twist_start: o.req_f64("twist_start")?,
    })
}

fn segmentation_point(v: &Value) -> Result<SegmentationPoint> {
    let o = Obj::new("segmentation_point", v)?;
    Ok(SegmentationPoint {
        pos_circ: o.req_str("pos_circ")?,
        pos_long: o.req_str("pos_long")?,
        pos_thru: o.req_str("pos_thru")?,
        r: o.req_f64("r")?,
        t: o.req_f64("t")?,
        u: o.req_f64("u")?,
        v: o.req_f64("v")?,
        w: o.req_f64("w")?,
        x: o.req_f64("x")?,
        y: o.req_f64("y")?,
        z: o.req_f64("z")?,
    })
}
