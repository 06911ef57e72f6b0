use core::{
    panic::Location,
    sync::atomic::{AtomicBool, Ordering},
};

/// Process-wide location-capture flag. Off by default.
static CAPTURE_LOCATIONS: AtomicBool = AtomicBool::new(false);

/// Enables or disables source-location capture for subsequently constructed
/// errors.
///
/// When enabled, every constructor records the file and line of its call
/// site, and rendering prefixes each captured link with a `file:line`
/// header. Already-constructed errors are unaffected.
///
/// The flag is a single relaxed atomic: it is safe to toggle from any
/// thread, but there is no ordering guarantee between a toggle and
/// constructions racing with it on other threads. Set it once at startup,
/// before errors are being constructed concurrently.
///
/// # Examples
///
/// ```
/// causelink::set_stack_capture_mode(true);
/// let err = causelink::new("boom");
/// assert!(err.location().is_some());
/// # causelink::set_stack_capture_mode(false);
/// ```
pub fn set_stack_capture_mode(enabled: bool) {
    CAPTURE_LOCATIONS.store(enabled, Ordering::Relaxed);
}

/// Returns the caller's location if capture mode is enabled.
///
/// Every function between here and the public constructor is
/// `#[track_caller]`, so the reported location is the user's call site.
#[inline]
#[track_caller]
pub(crate) fn current_location() -> Option<&'static Location<'static>> {
    if CAPTURE_LOCATIONS.load(Ordering::Relaxed) {
        Some(Location::caller())
    } else {
        None
    }
}
