//! Carousel walkthroughs driven by simulated host events.

use tracing::{info, info_span};
use vitrine_components::{
    carousel::{Carousel, CarouselArgs},
    collection::ItemCollection,
};
use vitrine_ui::{ContainerSize, Dp, PointerChannel, PointerEvent};

const ITEM_COUNT: usize = 9;

fn step(args: &CarouselArgs) -> Dp {
    args.item_width.non_negative() + args.gap.non_negative()
}

fn mount(args: &CarouselArgs, container: &ContainerSize, pointer: &PointerChannel) -> Carousel {
    let images = (0..ITEM_COUNT).map(|i| format!("/cards/{i}.png"));
    Carousel::mount(args.clone(), ItemCollection::from_keys(images), container, pointer)
}

fn log_state(carousel: &Carousel, label: &str) {
    let dots: String = carousel
        .page_dots()
        .iter()
        .map(|dot| if dot.active { '●' } else { '○' })
        .collect();
    info!(
        page = carousel.current_page(),
        pages = carousel.total_pages(),
        offset = %carousel.offset(),
        px = carousel.offset().to_pixels_f32(),
        dots = %dots,
        "{label}"
    );
}

/// Three cards per page, then jump to the last page.
pub fn navigate(args: &CarouselArgs) {
    let _span = info_span!("navigate").entered();
    let container = ContainerSize::with_width(step(args) * 3.0);
    let pointer = PointerChannel::new();
    let carousel = mount(args, &container, &pointer);
    log_state(&carousel, "mounted");

    carousel.next();
    log_state(&carousel, "next");
    carousel.go_to_page(2);
    log_state(&carousel, "go_to_page(2)");
    carousel.next();
    log_state(&carousel, "next at the end");
}

/// Widen the container while sitting on the last page.
pub fn resize(args: &CarouselArgs) {
    let _span = info_span!("resize").entered();
    let container = ContainerSize::with_width(step(args) * 3.0);
    let pointer = PointerChannel::new();
    let carousel = mount(args, &container, &pointer);
    carousel.go_to_page(2);
    log_state(&carousel, "before resize");

    container.report(step(args) * 6.0);
    log_state(&carousel, "after widening");
    container.report(step(args) * 6.0);
    log_state(&carousel, "identical width coalesced");
}

/// Drag one-and-a-half cards to the left in a one-card container.
pub fn drag(args: &CarouselArgs) {
    let _span = info_span!("drag").entered();
    let container = ContainerSize::with_width(step(args) * 1.25);
    let pointer = PointerChannel::new();
    let mut carousel = mount(args, &container, &pointer);
    let _offsets = carousel.subscribe_offset(|offset| {
        tracing::trace!(%offset, "offset committed");
    });

    let start = Dp(600.0);
    let travel = step(args) * 1.55;
    pointer.emit(PointerEvent::Pressed { x: start });
    for fraction in [0.25, 0.5, 0.75, 1.0] {
        pointer.emit(PointerEvent::Moved {
            x: start - travel * fraction,
        });
        log_state(&carousel, "dragging");
    }
    pointer.emit(PointerEvent::Released);
    log_state(&carousel, "released");

    carousel.set_items(ItemCollection::with_len(4));
    log_state(&carousel, "new collection");
    carousel.teardown();
    info!(
        container_observers = container.observer_count(),
        pointer_subscribers = pointer.subscriber_count(),
        "torn down"
    );
}
