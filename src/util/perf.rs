//! Wall-clock instrumentation around a callback.

#[cfg(test)]
#[path = "perf_test.rs"]
mod perf_test;

/// Run `f`, log how long it took under `name`, and return its result.
///
/// In the browser this also drops `performance.mark` entries around the
/// call so the timing shows up in devtools. Without the Performance API
/// the callback still runs, just unmeasured; outside the browser the
/// standard library clock is used instead.
pub fn measure<T>(name: &str, f: impl FnOnce() -> T) -> T {
    #[cfg(feature = "web")]
    {
        let Some(perf) = web_sys::window().and_then(|w| w.performance()) else {
            return f();
        };
        let _ = perf.mark(&format!("{name}-start"));
        let started = perf.now();
        let result = f();
        let elapsed = perf.now() - started;
        let _ = perf.mark(&format!("{name}-end"));
        log::info!("{name}: {elapsed:.1}ms");
        result
    }
    #[cfg(not(feature = "web"))]
    {
        let started = std::time::Instant::now();
        let result = f();
        let elapsed = started.elapsed().as_secs_f64() * 1000.0;
        log::info!("{name}: {elapsed:.1}ms");
        result
    }
}
