//! # Starfolio UI Engine
//!
//! Platform-neutral half of the portfolio page:
//! - A drifting, twinkling starfield painted through render commands
//! - A one-shot waving-hand tween
//! - The static view tree of the page and its link behavior
//! - Owned frame loops that stop the moment their handle is dropped
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         PAGE PIPELINE                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  FrameHost tick → Animator::frame → RenderCommands → Surface  │
//! │        ↓                 ↓                                    │
//! │  AnimationTask     WaveGreeting → glyph transform            │
//! │  (drop = cancel)                                              │
//! │                                                                │
//! │  SiteConfig → PortfolioView → ViewNode tree → host DOM        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The browser binding lives in the `starfolio` crate and only implements
//! the host traits defined here.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod animation;
pub mod frame;
pub mod icons;
pub mod layout;
pub mod link;
pub mod render;
pub mod starfield;
pub mod style;
pub mod view;
pub mod wave;

pub use animation::{Easing, Tween};
pub use frame::{
    AnimationTask, Animator, FrameCallback, FrameControl, FrameHost, FrameId, FrameTime, ManualFrames,
};
pub use layout::{Rect, Viewport};
pub use link::{activate_link, ClickEvent, LinkOutcome, Navigator};
pub use render::{FrameRenderer, RenderCommand, Surface};
pub use starfield::{twinkle, Star, Starfield, StarfieldRenderer};
pub use style::Color;
pub use view::{Element, PortfolioView, ViewNode};
pub use wave::{rotation_at, wave, WaveGreeting, WavePhase};
