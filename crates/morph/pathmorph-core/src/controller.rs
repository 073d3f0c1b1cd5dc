//! Morph endpoints and user lifecycle handlers.
//!
//! Scheduling is not touched here; the animation unschedules its host before
//! it calls any mutating method on these types.

use crate::animation::PathAnimation;
use crate::error::{MorphError, SnapshotRole};
use crate::geometry::{PathInfo, Point};
use crate::host::HostAnimation;

/// Where the current segment starts.
#[derive(Copy, Clone, Debug)]
enum Source<'a> {
    /// The subject's points from before the animation was created.
    Original,
    Path(&'a PathInfo),
}

/// Current `from`/`to` pair of a morph, both with `num_points` vertices.
#[derive(Debug)]
pub struct Targets<'a> {
    num_points: usize,
    from: Source<'a>,
    to: &'a PathInfo,
}

impl<'a> Targets<'a> {
    pub fn new(
        num_points: usize,
        from: Option<&'a PathInfo>,
        to: &'a PathInfo,
    ) -> Result<Self, MorphError> {
        let targets = Self {
            num_points,
            from: from.map_or(Source::Original, Source::Path),
            to,
        };
        if let Some(from) = from {
            targets.check(from, SnapshotRole::From)?;
        }
        targets.check(to, SnapshotRole::To)?;
        Ok(targets)
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn check(&self, path: &PathInfo, role: SnapshotRole) -> Result<(), MorphError> {
        if path.num_points() == self.num_points {
            Ok(())
        } else {
            Err(MorphError::PointCountMismatch {
                role,
                expected: self.num_points,
                actual: path.num_points(),
            })
        }
    }

    /// Make the current destination the new source and head for `to`.
    /// Leaves everything unchanged if `to` is incompatible.
    pub fn set_target(&mut self, to: &'a PathInfo) -> Result<(), MorphError> {
        self.check(to, SnapshotRole::To)?;
        self.from = Source::Path(self.to);
        self.to = to;
        Ok(())
    }

    /// Source points; `original` backs the case where no explicit source was given.
    pub fn from_points<'s>(&'s self, original: &'s [Point]) -> &'s [Point] {
        match self.from {
            Source::Original => original,
            Source::Path(path) => &path.points,
        }
    }

    pub fn to_points(&self) -> &'a [Point] {
        &self.to.points
    }
}

pub type StartedHandler<'a, H, C> = Box<dyn FnMut(&mut PathAnimation<'a, H, C>) + 'a>;
pub type StoppedHandler<'a, H, C> = Box<dyn FnMut(&mut PathAnimation<'a, H, C>, bool) + 'a>;

/// Callbacks invoked when the host starts or stops a run.
///
/// Handlers receive the animation itself, so a stopped handler can retarget,
/// change the curve and schedule the next run.
pub struct AnimationHandlers<'a, H: HostAnimation, C> {
    pub started: Option<StartedHandler<'a, H, C>>,
    pub stopped: Option<StoppedHandler<'a, H, C>>,
}

impl<'a, H: HostAnimation, C> Default for AnimationHandlers<'a, H, C> {
    fn default() -> Self {
        Self {
            started: None,
            stopped: None,
        }
    }
}

impl<'a, H: HostAnimation, C> AnimationHandlers<'a, H, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_started<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut PathAnimation<'a, H, C>) + 'a,
    {
        self.started = Some(Box::new(f));
        self
    }

    pub fn on_stopped<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut PathAnimation<'a, H, C>, bool) + 'a,
    {
        self.stopped = Some(Box::new(f));
        self
    }
}

impl<'a, H: HostAnimation, C> std::fmt::Debug for AnimationHandlers<'a, H, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationHandlers")
            .field("started", &self.started.is_some())
            .field("stopped", &self.stopped.is_some())
            .finish()
    }
}

/// Handler table plus the user context handed back through `context()`.
///
/// `generation` changes on every replacement so a handler that swaps the
/// table while running is not put back afterwards.
pub(crate) struct HandlerSlot<'a, H: HostAnimation, C> {
    pub(crate) handlers: AnimationHandlers<'a, H, C>,
    pub(crate) context: Option<C>,
    pub(crate) generation: u64,
}

impl<'a, H: HostAnimation, C> HandlerSlot<'a, H, C> {
    pub(crate) fn new() -> Self {
        Self {
            handlers: AnimationHandlers::default(),
            context: None,
            generation: 0,
        }
    }

    pub(crate) fn replace(&mut self, handlers: AnimationHandlers<'a, H, C>, context: Option<C>) {
        self.handlers = handlers;
        self.context = context;
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize, base: i16) -> PathInfo {
        (0..n as i16).map(|i| (base + i, base - i)).collect()
    }

    #[test]
    fn construction_checks_both_endpoints() {
        let to = path(4, 0);
        let bad = path(3, 0);
        assert!(Targets::new(4, None, &to).is_ok());
        assert_eq!(
            Targets::new(4, Some(&bad), &to).unwrap_err(),
            MorphError::PointCountMismatch {
                role: SnapshotRole::From,
                expected: 4,
                actual: 3
            }
        );
        assert!(matches!(
            Targets::new(3, None, &to),
            Err(MorphError::PointCountMismatch {
                role: SnapshotRole::To,
                ..
            })
        ));
    }

    #[test]
    fn retarget_chains_previous_destination() {
        let a = path(3, 0);
        let b = path(3, 10);
        let c = path(3, 20);
        let original = path(3, -5);

        let mut t = Targets::new(3, None, &a).unwrap();
        assert_eq!(t.from_points(&original.points), original.points.as_slice());

        t.set_target(&b).unwrap();
        t.set_target(&c).unwrap();
        assert_eq!(t.from_points(&original.points), b.points.as_slice());
        assert_eq!(t.to_points(), c.points.as_slice());
    }

    #[test]
    fn incompatible_target_is_a_noop() {
        let a = path(3, 0);
        let b = path(3, 10);
        let wrong = path(5, 0);
        let mut t = Targets::new(3, Some(&a), &b).unwrap();

        assert!(t.set_target(&wrong).is_err());
        assert_eq!(t.from_points(&[]), a.points.as_slice());
        assert_eq!(t.to_points(), b.points.as_slice());
    }
}
