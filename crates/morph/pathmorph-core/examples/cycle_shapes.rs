//! Morph a polygon through square -> star -> decagon, printing the outline
//! after every completed segment.
//!
//! Run with `RUST_LOG=debug` to see the engine's lifecycle logging.

use pathmorph_core::{
    AnimationHandlers, Config, EasingCurve, Layer, PathAnimation, PathInfo, Point, Polygon, Timer,
};
use pathmorph_test_fixtures::{configs, shapes};

const FRAME_MS: u32 = 33;

/// After each completed segment: count it, head for the next shape with the
/// next curve and start again.
fn segment_handlers<'a>(
    cycle: [&'a PathInfo; 3],
    curves: [EasingCurve; 3],
) -> AnimationHandlers<'a, Timer, usize> {
    AnimationHandlers::new().on_stopped(
        move |anim: &mut PathAnimation<'a, Timer, usize>, finished| {
            if !finished {
                return;
            }
            let done = anim.context().copied().unwrap_or(0) + 1;
            if let Some(count) = anim.context_mut() {
                *count = done;
            }
            println!("segment {done} done: {:?}", anim.subject().points);
            if anim.retarget(cycle[done % cycle.len()]).is_ok() {
                anim.set_curve(curves[done % curves.len()]);
                anim.schedule();
            }
        },
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let square: PathInfo = shapes::load("square")?;
    let star: PathInfo = shapes::load("star")?;
    let decagon: PathInfo = shapes::load("decagon")?;
    let cycle = [&star, &decagon, &square];
    let curves = [EasingCurve::Linear, EasingCurve::EaseIn, EasingCurve::EaseOut];
    let cfg = Config::from_json(&configs::json("demo")?)?;

    let layer = Layer::new();
    let mut path = Polygon::from_info(&decagon);
    path.move_to(Point::new(72, 84));

    let mut anim: PathAnimation<'_, Timer, usize> =
        PathAnimation::with_config(&cfg, &mut path, None, cycle[0])?;
    anim.set_render_target(Some(&layer));
    anim.set_handlers(segment_handlers(cycle, curves), Some(0));
    anim.schedule();

    let mut redraws = 0u32;
    while anim.context().copied().unwrap_or(0) < 6 {
        anim.tick(FRAME_MS);
        if layer.take_dirty() {
            redraws += 1;
        }
    }
    println!("{redraws} redraws");

    anim.destroy();
    println!("restored: {:?}", path.points);
    Ok(())
}
