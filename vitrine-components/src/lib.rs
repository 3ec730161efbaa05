//! Headless widget engines for vitrine.
//!
//! Every engine here owns the state of one widget instance and leaves
//! rendering to the host: it consumes container sizes, pointer events and
//! timestamps, and answers with offsets, page indices and per-item poses.
//!
//! # Example
//!
//! ```
//! use vitrine_components::{
//!     carousel::{Carousel, CarouselArgs},
//!     collection::ItemCollection,
//! };
//! use vitrine_ui::{ContainerSize, Dp, PointerChannel, PointerEvent};
//!
//! let container = ContainerSize::with_width(Dp(400.0));
//! let pointer = PointerChannel::new();
//! let carousel = Carousel::mount(
//!     CarouselArgs::default(),
//!     ItemCollection::with_len(9),
//!     &container,
//!     &pointer,
//! );
//!
//! // Drag 500dp to the left and let go.
//! pointer.emit(PointerEvent::Pressed { x: Dp(600.0) });
//! pointer.emit(PointerEvent::Moved { x: Dp(100.0) });
//! assert_eq!(carousel.current_page(), 2);
//! pointer.emit(PointerEvent::Released);
//! assert_eq!(carousel.offset(), Dp(-648.0));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod carousel;
pub mod circular;
pub mod collection;
pub mod indicator;
pub mod marquee;
pub mod slideshow;
