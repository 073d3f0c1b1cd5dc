//! Working point buffer installed into the subject polygon.
//!
//! Acquisition moves a freshly allocated buffer into the polygon and keeps the
//! polygon's original `Vec` aside; release moves the original back and drops
//! the working buffer. The original is never freed here.

use std::mem;

use log::warn;

use crate::error::MorphError;
use crate::geometry::{Point, Polygon};

#[derive(Debug)]
pub struct PointBuffer {
    saved: Option<Vec<Point>>,
}

impl PointBuffer {
    /// Install a working buffer into `subject`, seeded from `initial` or, when
    /// `None`, from the subject's current points.
    ///
    /// On failure the subject is left untouched.
    pub fn acquire(subject: &mut Polygon, initial: Option<&[Point]>) -> Result<Self, MorphError> {
        let n = subject.num_points();
        let initial = initial.unwrap_or(subject.points.as_slice());
        debug_assert_eq!(initial.len(), n);

        let mut working = Vec::new();
        if working.try_reserve_exact(n).is_err() {
            warn!("working buffer allocation failed ({n} points)");
            return Err(MorphError::Allocation { points: n });
        }
        working.extend_from_slice(initial);

        let saved = mem::replace(&mut subject.points, working);
        Ok(Self { saved: Some(saved) })
    }

    /// The subject's points as they were before acquisition. Empty once released.
    pub fn original(&self) -> &[Point] {
        self.saved.as_deref().unwrap_or(&[])
    }

    #[inline]
    pub fn is_installed(&self) -> bool {
        self.saved.is_some()
    }

    /// Put the original points back into `subject` and drop the working buffer.
    /// Returns false if the buffer was already released.
    pub fn release(&mut self, subject: &mut Polygon) -> bool {
        match self.saved.take() {
            Some(saved) => {
                drop(mem::replace(&mut subject.points, saved));
                true
            }
            None => false,
        }
    }
}
