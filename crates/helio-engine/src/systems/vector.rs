//! Flat-colored 2D geometry drawn beneath the SDF spheres.
//!
//! Everything here works in projected viewport pixels. Orbits are stroked
//! with lyon, rings are filled with lyon's even-odd fill, and stars skip
//! tessellation entirely because there are thousands of them per frame.
//! The host reads the result as a plain triangle list.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::{path::Builder, Path};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

const TOLERANCE: f32 = 0.5;
const DEFAULT_MAX_VERTICES: usize = 65536;

/// One triangle-list vertex as the host sees it: position then RGBA.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    pub const FLOATS: usize = 6;

    fn at(x: f32, y: f32, color: VectorColor) -> Self {
        Self { x, y, r: color.r, g: color.g, b: color.b, a: color.a }
    }
}

/// Straight (non-premultiplied) RGBA in 0..1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub fn hex(rgb: u32) -> Self {
        let channel = |shift: u32| ((rgb >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0), 1.0)
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Fully transparent colors draw nothing, so callers can skip them.
    pub fn is_invisible(&self) -> bool {
        self.a <= 0.0
    }
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Stamps a single color onto every vertex lyon produces.
struct Tint(VectorColor);

impl FillVertexConstructor<VectorVertex> for Tint {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex::at(p.x, p.y, self.0)
    }
}

impl StrokeVertexConstructor<VectorVertex> for Tint {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex::at(p.x, p.y, self.0)
    }
}

/// Per-frame vertex sink with a hard budget.
///
/// A shape either lands whole or not at all; rejected shapes are counted so
/// the runner can report them.
pub struct VectorState {
    fill: FillTessellator,
    stroke: StrokeTessellator,
    scratch: VertexBuffers<VectorVertex, u32>,
    vertices: Vec<VectorVertex>,
    max_vertices: usize,
    dropped: usize,
}

impl VectorState {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_VERTICES)
    }

    pub fn with_capacity(max_vertices: usize) -> Self {
        Self {
            fill: FillTessellator::new(),
            stroke: StrokeTessellator::new(),
            scratch: VertexBuffers::new(),
            vertices: Vec::with_capacity(max_vertices),
            max_vertices,
            dropped: 0,
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.dropped = 0;
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    pub fn dropped_shapes(&self) -> usize {
        self.dropped
    }

    /// Emitted vertices in draw order.
    pub fn vertices(&self) -> &[VectorVertex] {
        &self.vertices
    }

    /// Start of the flat float view of [`Self::vertices`], for the shared buffer copy.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.vertices.as_ptr().cast()
    }

    fn reserve(&mut self, count: usize) -> bool {
        let fits = self.vertices.len() + count <= self.max_vertices;
        if !fits {
            self.dropped += 1;
        }
        fits
    }

    /// Axis-aligned square of half-size `half` around `center`, as two triangles.
    pub fn fill_point(&mut self, center: Vec2, half: f32, color: VectorColor) {
        if half <= 0.0 || !self.reserve(6) {
            return;
        }
        let lo = center - Vec2::splat(half);
        let hi = center + Vec2::splat(half);
        let corners = [(lo.x, lo.y), (hi.x, lo.y), (hi.x, hi.y), (lo.x, hi.y)];
        for i in [0, 1, 2, 0, 2, 3] {
            let (x, y) = corners[i];
            self.vertices.push(VectorVertex::at(x, y, color));
        }
    }

    /// Open polyline of constant width.
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: VectorColor) {
        if points.len() < 2 || width <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        trace(&mut builder, points, false);
        let path = builder.build();

        let options = StrokeOptions::tolerance(TOLERANCE).with_line_width(width);
        let outcome = self.stroke.tessellate_path(
            &path,
            &options,
            &mut BuffersBuilder::new(&mut self.scratch, Tint(color)),
        );
        self.commit_scratch(outcome.is_ok());
        if let Err(e) = outcome {
            log::debug!("stroke of {} points failed: {e:?}", points.len());
        }
    }

    /// Region between two closed outlines; the inner one is left uncovered.
    pub fn fill_annulus(&mut self, outer: &[Vec2], inner: &[Vec2], color: VectorColor) {
        if outer.len() < 3 || inner.len() < 3 {
            return;
        }
        let mut builder = Path::builder();
        trace(&mut builder, outer, true);
        trace(&mut builder, inner, true);
        let path = builder.build();

        let options = FillOptions::tolerance(TOLERANCE).with_fill_rule(FillRule::EvenOdd);
        let outcome = self.fill.tessellate_path(
            &path,
            &options,
            &mut BuffersBuilder::new(&mut self.scratch, Tint(color)),
        );
        self.commit_scratch(outcome.is_ok());
        if let Err(e) = outcome {
            log::debug!("annulus fill failed: {e:?}");
        }
    }

    /// Moves indexed lyon output into the flat list when the tessellation
    /// succeeded and the budget can hold all of it. Scratch is always emptied.
    fn commit_scratch(&mut self, succeeded: bool) {
        let count = self.scratch.indices.len();
        if succeeded && count > 0 && self.reserve(count) {
            let produced = &self.scratch.vertices;
            self.vertices
                .extend(self.scratch.indices.iter().map(|&i| produced[i as usize]));
        }
        self.scratch.vertices.clear();
        self.scratch.indices.clear();
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}

fn trace(builder: &mut Builder, points: &[Vec2], closed: bool) {
    let mut rest = points.iter().map(|p| point(p.x, p.y));
    let Some(first) = rest.next() else {
        return;
    };
    builder.begin(first);
    for p in rest {
        builder.line_to(p);
    }
    builder.end(closed);
}
