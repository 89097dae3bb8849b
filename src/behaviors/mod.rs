//! View-state machines shared by the pages.
//!
//! Nothing in here touches the DOM: the frontend feeds geometry, clicks and
//! timer ticks in and renders whatever comes out.

pub mod carousel;
pub mod dropdown;
pub mod scroll_spy;
pub mod theme;
pub mod typewriter;
