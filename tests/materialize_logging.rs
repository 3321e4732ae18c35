//! Diagnostics emitted while materializing expressions.
//!
//! A counting logger checks that each materialization emits one `debug!`
//! record and that element reads log nothing at that level.

use ewise::{AssignOptions, apply, assign_mat, pow2, to_mat, to_vec};
use faer::Mat;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::atomic::{AtomicUsize, Ordering};

struct CountingLogger {
    debug: AtomicUsize,
}

impl Log for CountingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Debug && record.target().starts_with("ewise") {
            self.debug.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static LOGGER: CountingLogger = CountingLogger { debug: AtomicUsize::new(0) };

fn debug_records_during(f: impl FnOnce()) -> usize {
    let before = LOGGER.debug.load(Ordering::SeqCst);
    f();
    LOGGER.debug.load(Ordering::SeqCst) - before
}

/// One debug record per materialization, including a resizing assignment.
#[test]
fn one_debug_record_per_materialization() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let a = Mat::from_fn(3, 4, |i, j| (i * 4 + j) as f64);

    let mut dst = Mat::from_fn(1, 1, |_, _| 0.0);
    let n = debug_records_during(|| {
        assign_mat(&mut dst, pow2(&a), &AssignOptions::default()).unwrap();
    });
    assert_eq!(n, 1);

    let n = debug_records_during(|| {
        assign_mat(&mut dst, pow2(&a), &AssignOptions::strict()).unwrap();
    });
    assert_eq!(n, 1);

    let n = debug_records_during(|| {
        let _ = to_mat(pow2(&a));
    });
    assert_eq!(n, 1);

    let v = vec![1.0f64, 2.0, 3.0];
    let n = debug_records_during(|| {
        let e = apply(&v, |x: f64| x + 1.0);
        let _ = to_vec(&e);
    });
    assert_eq!(n, 1);
}
