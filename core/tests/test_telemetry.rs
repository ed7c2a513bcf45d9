#[cfg(test)]
mod telemetry_snapshot_tests {
    use std::time::Duration;

    use seedstream_core::telemetry::{RunCounters, RunSnapshot, Stage, TelemetryTimer};

    fn make_counters() -> RunCounters {
        let mut c = RunCounters::default();
        c.add_header(21);
        c.add_seed(64);
        c.add_seed(64);
        c.add_skipped(1);
        c
    }

    fn make_timer() -> TelemetryTimer {
        let mut timer = TelemetryTimer::new();
        std::thread::sleep(Duration::from_millis(20));
        timer.add_stage_time(Stage::Read, Duration::from_millis(2));
        timer.add_stage_time(Stage::Encrypt, Duration::from_millis(5));
        timer.add_stage_time(Stage::Encrypt, Duration::from_millis(5));
        timer.finish();
        timer
    }

    #[test]
    fn counters_accumulate() {
        let mut c = make_counters();
        assert_eq!(c.seeds_processed, 2);
        assert_eq!(c.bytes_written(), 21 + 128);

        c += make_counters();
        assert_eq!(c.seeds_processed, 4);
        assert_eq!(c.seeds_skipped, 2);
    }

    #[test]
    fn stage_times_accumulate_per_stage() {
        let timer = make_timer();
        assert_eq!(timer.stage_times.get(Stage::Encrypt), Duration::from_millis(10));
        assert_eq!(timer.stage_times.get(Stage::Write), Duration::ZERO);
        assert_eq!(timer.stage_times.total(), Duration::from_millis(12));
        assert!(timer.stage_times.has_all(&[Stage::Read, Stage::Encrypt]));
        assert!(!timer.stage_times.has_all(&Stage::ALL));
    }

    #[test]
    fn timed_closure_is_charged_to_its_stage() {
        let mut timer = TelemetryTimer::new();
        let v = timer.time(Stage::Derive, || 7);
        assert_eq!(v, 7);
        assert!(timer.stage_times.has_all(&[Stage::Derive]));
    }

    #[test]
    fn snapshot_is_consistent() {
        let snap = RunSnapshot::from("aes-256-ctr", Some(2), 64, &make_counters(), &make_timer(), false);
        assert_eq!(snap.bytes_keystream, 128);
        assert_eq!(snap.bytes_written, 149);
        assert!(snap.elapsed >= Duration::from_millis(20));
        assert!(snap.throughput_bytes_per_sec > 0.0);
        assert!(snap.sanity_check());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snap = RunSnapshot::from("rc4", None, 64, &make_counters(), &make_timer(), true);
        let json = snap.to_json().unwrap();
        assert!(json.contains("\"cipher\": \"rc4\""));
        assert!(json.contains("\"truncated\": true"));
        assert!(json.contains("\"encrypt\""));
    }

    #[test]
    fn stage_display_names() {
        let names: Vec<String> = Stage::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["read", "derive", "encrypt", "write"]);
    }
}
