//! The seam between the controller and whatever draws the ruler.

/// Imperative visual commands issued by [`crate::controller::RulerCore`].
///
/// Both commands position the handle and the fill bar at the same pixel
/// offset on the track. Commands are fire-and-forget: the controller never
/// waits for an animation to finish and never observes failures, so
/// implementations report their own errors.
pub trait VisualAdapter {
    /// Move the handle and fill to `px` immediately, tracking the pointer.
    fn set_immediate(&mut self, px: f64);

    /// Animate the handle and fill to `px` over a short fixed duration.
    fn animate_to(&mut self, px: f64);
}
