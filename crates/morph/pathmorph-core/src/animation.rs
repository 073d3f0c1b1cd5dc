//! PathAnimation: a host animation specialised for polygon morphing.
//!
//! Lifecycle:
//! - `create` validates point counts, then installs a working buffer in the
//!   subject. Failure leaves the subject untouched.
//! - The host schedules and unschedules runs; each frame rewrites the working
//!   buffer in place and marks the render target dirty.
//! - Retargeting and handler changes unschedule first.
//! - Dropping (or `destroy`) unschedules, then moves the subject's original
//!   points back.
//!
//! The subject polygon and every snapshot are borrowed for `'a`, so they
//! cannot be dropped while the animation is alive.

use log::{debug, trace, warn};

use crate::buffer::PointBuffer;
use crate::config::Config;
use crate::controller::{AnimationHandlers, HandlerSlot, Targets};
use crate::curve::EasingCurve;
use crate::error::{MorphError, SnapshotRole};
use crate::geometry::{PathInfo, Point, Polygon};
use crate::host::{HostAnimation, HostEvent, Timer};
use crate::interp::{self, FrameKind};
use crate::render::RenderTarget;

pub struct PathAnimation<'a, H: HostAnimation = Timer, C = ()> {
    host: H,
    subject: &'a mut Polygon,
    buffer: PointBuffer,
    targets: Targets<'a>,
    slot: HandlerSlot<'a, H, C>,
    render_target: Option<&'a dyn RenderTarget>,
    /// Bumped whenever a run starts or is cut short.
    run: u64,
}

impl<'a, C> PathAnimation<'a, Timer, C> {
    /// Create an animation driven by a [`Timer`] configured from `cfg`.
    pub fn with_config(
        cfg: &Config,
        subject: &'a mut Polygon,
        from: Option<&'a PathInfo>,
        to: &'a PathInfo,
    ) -> Result<Self, MorphError> {
        Self::create(Timer::new(cfg), subject, from, to)
    }
}

impl<'a, H: HostAnimation, C> PathAnimation<'a, H, C> {
    /// Wrap `host` to morph `subject` from `from` (or its current points when
    /// `None`) to `to`. All three must have the same number of points.
    pub fn create(
        host: H,
        subject: &'a mut Polygon,
        from: Option<&'a PathInfo>,
        to: &'a PathInfo,
    ) -> Result<Self, MorphError> {
        let targets = Targets::new(subject.num_points(), from, to)?;
        let buffer = PointBuffer::acquire(subject, from.map(|p| p.points.as_slice()))?;
        debug!(
            "path animation created ({} points, from {})",
            targets.num_points(),
            if from.is_some() { "snapshot" } else { "subject" }
        );
        Ok(Self {
            host,
            subject,
            buffer,
            targets,
            slot: HandlerSlot::new(),
            render_target: None,
            run: 0,
        })
    }

    /// Tear the animation down now. Equivalent to dropping it.
    pub fn destroy(self) {
        drop(self);
    }

    /// Target to notify after every computed frame, or `None` to stop notifying.
    pub fn set_render_target(&mut self, target: Option<&'a dyn RenderTarget>) {
        self.render_target = target;
    }

    /// Replace the start/stop handlers and the user context.
    pub fn set_handlers(&mut self, handlers: AnimationHandlers<'a, H, C>, context: Option<C>) {
        self.unschedule();
        debug!("path animation handlers replaced: {handlers:?}");
        self.slot.replace(handlers, context);
    }

    /// Head for `to`, starting from the current destination.
    ///
    /// An incompatible snapshot is rejected and nothing changes, including
    /// the scheduling state.
    pub fn retarget(&mut self, to: &'a PathInfo) -> Result<(), MorphError> {
        if let Err(err) = self.targets.check(to, SnapshotRole::To) {
            warn!("path animation retarget rejected: {err}");
            return Err(err);
        }
        self.unschedule();
        self.targets.set_target(to)?;
        debug!("path animation retargeted");
        Ok(())
    }

    pub fn context(&self) -> Option<&C> {
        self.slot.context.as_ref()
    }

    pub fn context_mut(&mut self) -> Option<&mut C> {
        self.slot.context.as_mut()
    }

    /// Compute the frame for `time_normalized` into the subject's points.
    pub fn update(&mut self, time_normalized: u32) {
        let curve = self.host.curve();
        let from = self.targets.from_points(self.buffer.original());
        let to = self.targets.to_points();
        let kind = interp::compute_frame_into(
            &mut self.subject.points,
            from,
            to,
            time_normalized,
            curve,
        );
        match kind {
            FrameKind::Eased => trace!("frame t={time_normalized} curve={curve}"),
            FrameKind::Start | FrameKind::End => trace!("frame t={time_normalized} ({kind:?})"),
        }
        if let Some(target) = self.render_target {
            target.mark_dirty();
        }
    }

    /// Advance the host clock and react to what it reports.
    ///
    /// Events left over after a handler unschedules or restarts the run are
    /// dropped.
    pub fn tick(&mut self, dt_ms: u32) {
        let run = self.run;
        for event in self.host.advance(dt_ms) {
            if self.run != run {
                trace!("dropping stale {event:?}");
                break;
            }
            self.dispatch(event);
        }
    }

    pub fn dispatch(&mut self, event: HostEvent) {
        match event {
            HostEvent::Started => self.notify_started(),
            HostEvent::Update(t) => self.update(t),
            HostEvent::Stopped { finished } => self.notify_stopped(finished),
        }
    }

    /// Start a run, cutting short any run in progress.
    pub fn schedule(&mut self) {
        self.unschedule();
        self.run = self.run.wrapping_add(1);
        self.host.schedule();
    }

    /// Stop the current run, if any. The stopped handler sees `finished == false`.
    pub fn unschedule(&mut self) -> bool {
        let was = self.host.unschedule();
        if was {
            self.run = self.run.wrapping_add(1);
            self.notify_stopped(false);
        }
        was
    }

    pub fn is_scheduled(&self) -> bool {
        self.host.is_scheduled()
    }

    pub fn curve(&self) -> EasingCurve {
        self.host.curve()
    }

    pub fn set_curve(&mut self, curve: EasingCurve) {
        self.host.set_curve(curve);
    }

    pub fn set_duration(&mut self, duration_ms: u32) {
        self.host.set_duration(duration_ms);
    }

    pub fn set_delay(&mut self, delay_ms: u32) {
        self.host.set_delay(delay_ms);
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The animated polygon, for drawing.
    pub fn subject(&self) -> &Polygon {
        &*self.subject
    }

    /// Current working points.
    pub fn points(&self) -> &[Point] {
        &self.subject.points
    }

    pub fn from_points(&self) -> &[Point] {
        self.targets.from_points(self.buffer.original())
    }

    pub fn to_points(&self) -> &[Point] {
        self.targets.to_points()
    }

    fn notify_started(&mut self) {
        let Some(mut handler) = self.slot.handlers.started.take() else {
            return;
        };
        let generation = self.slot.generation;
        handler(self);
        if self.slot.generation == generation {
            self.slot.handlers.started = Some(handler);
        }
    }

    fn notify_stopped(&mut self, finished: bool) {
        let Some(mut handler) = self.slot.handlers.stopped.take() else {
            return;
        };
        let generation = self.slot.generation;
        handler(self, finished);
        if self.slot.generation == generation {
            self.slot.handlers.stopped = Some(handler);
        }
    }
}

impl<'a, H: HostAnimation, C> Drop for PathAnimation<'a, H, C> {
    fn drop(&mut self) {
        self.unschedule();
        if self.buffer.release(&mut *self.subject) {
            debug!("path animation destroyed, subject points restored");
        }
    }
}

impl<'a, H: HostAnimation + std::fmt::Debug, C: std::fmt::Debug> std::fmt::Debug
    for PathAnimation<'a, H, C>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathAnimation")
            .field("host", &self.host)
            .field("points", &self.subject.points)
            .field("targets", &self.targets)
            .field("handlers", &self.slot.handlers)
            .field("context", &self.slot.context)
            .field("has_render_target", &self.render_target.is_some())
            .finish()
    }
}
