use bit_tracker::{bytes_for, BitTracker};
use simple_logger::SimpleLogger;

const UNITS: usize = 4096;
const RESERVED: usize = 256;

fn logger_init() {
    SimpleLogger::new().init().unwrap();
}

fn open_tracker(storage: &mut [u8]) -> BitTracker<'_> {
    let mut tracker = BitTracker::new(storage, UNITS).expect("create tracker failed");
    tracker
        .mark_free(RESERVED, UNITS - RESERVED)
        .expect("mark free failed");
    tracker
}

fn bit_test(tracker: &mut BitTracker) {
    for i in [RESERVED, RESERVED + 7, UNITS - 1] {
        tracker.set_bit(i, true);
        assert!(tracker.get_bit(i));
        tracker.set_bit(i, false);
        assert!(!tracker.get_bit(i));
    }
}

fn allocate_test(tracker: &mut BitTracker) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    for len in [1, 2, 8, 33, 512] {
        let start = tracker.allocate(len).expect("allocate failed");
        for i in start..start + len {
            assert!(tracker.is_used(i));
        }
        runs.push((start, len));
    }
    assert_eq!(runs[0].0, RESERVED);
    runs
}

fn free_test(tracker: &mut BitTracker, runs: &[(usize, usize)]) {
    for &(start, len) in runs {
        tracker.mark_free(start, len).expect("mark free failed");
    }
    assert_eq!(tracker.free_count(), UNITS - RESERVED);
}

fn large_allocate_test(tracker: &mut BitTracker) {
    let len = UNITS - RESERVED;
    let start = tracker.allocate(len).expect("allocate failed");
    assert_eq!(start, RESERVED);
    assert_eq!(tracker.free_count(), 0);
    tracker.mark_free(start, len).expect("mark free failed");
}

fn main() {
    logger_init();
    log::set_max_level(log::LevelFilter::Info);
    let mut storage = vec![0u8; bytes_for(UNITS)];
    let mut tracker = open_tracker(&mut storage);
    println!("tracker opened");
    bit_test(&mut tracker);
    println!("bit test done");
    let runs = allocate_test(&mut tracker);
    println!("allocate test done");
    free_test(&mut tracker, &runs);
    println!("free test done");
    large_allocate_test(&mut tracker);
    println!("large allocate test done");
    println!("free units: {}", tracker.free_count());
}
