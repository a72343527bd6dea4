//! Rendering statistics.

use core::fmt::{self, Display, Formatter};
use core::ops::AddAssign;

/// Collects and accumulates rendering statistics.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Number of render calls issued.
    pub calls: usize,
    /// Number of frames rendered.
    pub frames: usize,
    /// Vertices submitted.
    pub verts: Throughput,
    /// Triangles submitted / rasterized.
    pub tris: Throughput,
    /// Fragments emitted / written to the target.
    pub frags: Throughput,
}

/// Counts of items entering and leaving a pipeline stage.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Throughput {
    /// Count of items submitted.
    pub i: usize,
    /// Count of items output.
    pub o: usize,
}

impl Stats {
    /// Returns a new zeroed `Stats` instance.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "calls: {}  frames: {}  verts: {}  tris: {}  frags: {}",
            self.calls, self.frames, self.verts, self.tris, self.frags
        )
    }
}

impl Display for Throughput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} in / {} out", self.i, self.o)
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Self) {
        self.calls += other.calls;
        self.frames += other.frames;
        self.verts += other.verts;
        self.tris += other.tris;
        self.frags += other.frags;
    }
}

impl AddAssign for Throughput {
    fn add_assign(&mut self, rhs: Self) {
        self.i += rhs.i;
        self.o += rhs.o;
    }
}
