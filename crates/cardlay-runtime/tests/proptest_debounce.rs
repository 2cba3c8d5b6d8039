//! Property-based tests for the resize debouncer.
//!
//! 1. For any event stream, the release carries the latest dimensions.
//! 2. No release ever happens before the quiescence window elapses.
//! 3. Poll never releases while a computation is in flight.

use std::time::{Duration, Instant};

use cardlay_runtime::{DebounceConfig, ResizeDebouncer};
use proptest::prelude::*;

fn event_stream() -> impl Strategy<Value = Vec<(u64, f32, f32)>> {
    // (inter-event gap in ms, width, height)
    prop::collection::vec((0u64..=300, 100.0f32..=4000.0, 100.0f32..=4000.0), 1..20)
}

proptest! {
    #[test]
    fn release_carries_latest_dimensions(events in event_stream()) {
        let base = Instant::now();
        let mut d = ResizeDebouncer::new(DebounceConfig::default());

        let mut t = 0u64;
        let mut last = (0.0, 0.0);
        for &(gap, w, h) in &events {
            t += gap;
            d.notify_resize(w, h, base + Duration::from_millis(t));
            last = (w, h);
        }

        // Well past the window, exactly the last dimensions release.
        let release = d.poll(base + Duration::from_millis(t + 120));
        prop_assert_eq!(release, Some(last));
    }

    #[test]
    fn no_release_before_quiescence(events in event_stream()) {
        let base = Instant::now();
        let mut d = ResizeDebouncer::new(DebounceConfig::default());

        let mut t = 0u64;
        for &(gap, w, h) in &events {
            t += gap;
            let now = base + Duration::from_millis(t);
            d.notify_resize(w, h, now);
            // Immediately after any event the window has restarted.
            prop_assert_eq!(d.poll(now + Duration::from_millis(119)), None);
        }
    }

    #[test]
    fn in_flight_blocks_until_finish(
        events in event_stream(),
        extra_w in 100.0f32..=4000.0,
        extra_h in 100.0f32..=4000.0,
    ) {
        let base = Instant::now();
        let mut d = ResizeDebouncer::new(DebounceConfig::default());

        let mut t = 0u64;
        for &(gap, w, h) in &events {
            t += gap;
            d.notify_resize(w, h, base + Duration::from_millis(t));
        }

        let release_at = base + Duration::from_millis(t + 120);
        prop_assert!(d.poll(release_at).is_some());

        // An event during the computation is deferred, not released.
        d.notify_resize(extra_w, extra_h, release_at + Duration::from_millis(1));
        prop_assert_eq!(d.poll(release_at + Duration::from_millis(1000)), None);

        d.finish(Duration::from_millis(5), release_at + Duration::from_millis(10));
        let rearmed = d.poll(release_at + Duration::from_millis(130));
        prop_assert_eq!(rearmed, Some((extra_w, extra_h)));
    }
}
