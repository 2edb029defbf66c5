//! Frame- and timer-driven animation primitives.
//!
//! Each primitive is a [`Component`]: it takes its subscriptions from the
//! [`Scheduler`] on mount, reacts to the frames that fire them, and gives
//! every subscription back on unmount.

pub mod count_up;
pub mod marquee;
pub mod mvi;
pub mod rain;
pub mod reveal;
pub mod scheduler;
pub mod scroll_threshold;
pub mod transition;

pub use count_up::CountUp;
pub use marquee::{Direction, Marquee, MarqueeOptions};
pub use rain::{RainGrid, RainOptions};
pub use reveal::TextReveal;
pub use scheduler::{Fired, Scheduler, SubscriptionId};
pub use scroll_threshold::ScrollThresholdObserver;
pub use transition::{Transition, TransitionSpec};

/// Lifecycle shared by every animation primitive.
pub trait Component {
    /// Take the subscriptions the component needs. Calling `mount` on an
    /// already-mounted component restarts it without leaking.
    fn mount(&mut self, scheduler: &mut Scheduler);

    /// Release every subscription the component holds.
    fn unmount(&mut self, scheduler: &mut Scheduler);

    /// React to one frame. Returns true when visible state changed.
    fn on_frame(&mut self, fired: &Fired, scheduler: &mut Scheduler) -> bool;
}
