//! Timer scheduling for delayed UI work.
//!
//! Client-side (hydrate): `gloo-timers` futures on the Leptos task pool.
//! Server-side (SSR): no-op, since delayed navigation and toast dismissal
//! only matter in the browser. Scheduled tasks are independent; no ordering
//! is guaranteed between them.

/// Delay before navigating away after a successful submit, so the success
/// toast is visible before the transition.
pub const NAVIGATE_DELAY_MS: u32 = 500;

/// Run `f` after `delay_ms` milliseconds on the browser event loop.
pub fn after<F>(delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            f();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, f);
    }
}
