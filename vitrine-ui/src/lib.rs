//! Foundation primitives for vitrine widgets.
//!
//! vitrine widgets are headless engines: the host measures containers,
//! forwards pointer input and renders whatever state the widget publishes.
//! This crate holds the pieces every widget shares:
//!
//! - [`Dp`], the length unit all widget state is expressed in.
//! - [`Observable`] and [`Listeners`], synchronous change notification with
//!   RAII [`Subscription`] guards.
//! - [`ContainerSize`] and [`PointerChannel`], the host event sources.
//! - [`Lifecycle`], the mount/teardown precondition guard.
//! - [`config`] and [`logging`], the ambient process setup.
//!
//! # Example
//!
//! ```
//! use vitrine_ui::{ContainerSize, Dp};
//!
//! let container = ContainerSize::new();
//! let _observer = container.observe(|width| {
//!     assert!(width >= Dp::ZERO);
//! });
//! container.report(Dp(972.0));
//! assert!(container.is_measured());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod config;
pub mod container;
pub mod dp;
pub mod lifecycle;
pub mod logging;
pub mod observable;
pub mod pointer;
#[cfg(feature = "testing")]
pub mod testing;

pub use config::{ConfigError, VitrineConfig};
pub use container::ContainerSize;
pub use dp::Dp;
pub use lifecycle::{Lifecycle, MountState};
pub use observable::{Listeners, Observable, Subscription};
pub use pointer::{PointerChannel, PointerEvent};
