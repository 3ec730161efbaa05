//! Frames from the marquee, circular rotator and slideshow engines.

use std::time::{Duration, Instant};

use tracing::{info, info_span};
use vitrine_components::{
    circular::{CircularArgs, CircularCarousel},
    collection::ItemCollection,
    marquee::{Marquee, MarqueeArgs},
    slideshow::Slideshow,
};
use vitrine_ui::Dp;

pub fn marquee(args: &MarqueeArgs) {
    let _span = info_span!("marquee").entered();
    let mut marquee = Marquee::new(args.clone());
    marquee.set_item_widths(&[Dp(180.0), Dp(240.0), Dp(200.0), Dp(260.0)]);
    info!(
        period = %marquee.period(),
        copies = marquee.copies_for(Dp(1280.0)),
        "marquee measured"
    );

    let frame = quarter_loop(args.loop_seconds);
    for n in 0..=4u32 {
        let elapsed = frame.saturating_mul(n);
        info!(
            elapsed_ms = elapsed.as_millis() as u64,
            offset = %marquee.offset_at(elapsed),
            "marquee frame"
        );
    }
}

/// A quarter of the loop, or zero when the configured length is unusable.
fn quarter_loop(loop_seconds: f64) -> Duration {
    Duration::try_from_secs_f64(loop_seconds / 4.0).unwrap_or(Duration::ZERO)
}

pub fn circular(args: &CircularArgs) {
    let _span = info_span!("circular").entered();
    let mut ring = CircularCarousel::new(args.clone(), 5);
    let start = Instant::now();
    ring.tick(start);

    for n in 0..=3u32 {
        let steps = ring.tick(start + args.interval() * n);
        let poses: Vec<String> = ring
            .poses()
            .map(|pose| format!("{}@{}x{}", pose.position, pose.translate_x, pose.scale))
            .collect();
        info!(
            steps,
            current = ?ring.current(),
            poses = %poses.join(" "),
            "ring frame"
        );
    }
}

pub fn slideshow() {
    let _span = info_span!("slideshow").entered();
    let mut slideshow = Slideshow::new(ItemCollection::from_keys(["/hero/1.jpg", "/hero/2.jpg", "/hero/3.jpg"]));

    for _ in 0..3 {
        if let Some(fade) = slideshow.advance() {
            info!(
                from = fade.outgoing,
                to = fade.incoming,
                duration_ms = fade.duration.as_millis() as u64,
                "crossfade"
            );
        }
    }
    if let Some(fade) = slideshow.select(1) {
        info!(from = fade.outgoing, to = fade.incoming, "dot clicked");
    }

    slideshow.set_collection(ItemCollection::from_keys(["/hero/4.jpg", "/hero/5.jpg", "/hero/6.jpg"]));
    info!(active = ?slideshow.active(), "images replaced");
}
