//! Heap allocations per codec operation.
//!
//! ```sh
//! cargo bench --bench alloc
//! ```

use std::alloc::{GlobalAlloc, Layout, System};
use std::fmt;
use std::hint::black_box;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use basenum::{make_codec, Codec};

static COUNTING: AtomicBool = AtomicBool::new(false);
static CALLS: AtomicUsize = AtomicUsize::new(0);
static BYTES: AtomicUsize = AtomicUsize::new(0);

/// Forwards to [`System`], tallying requests while [`COUNTING`] is set
struct Tally;

unsafe impl GlobalAlloc for Tally {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNTING.load(Ordering::Relaxed) {
            CALLS.fetch_add(1, Ordering::Relaxed);
            BYTES.fetch_add(layout.size(), Ordering::Relaxed);
        }
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: Tally = Tally;

#[derive(Default)]
struct Report {
    entries: Vec<(String, usize, usize)>,
}

impl Report {
    /// Run `op` once with counting enabled and keep its totals under `label`
    fn record<T>(&mut self, label: impl Into<String>, op: impl FnOnce() -> T) {
        CALLS.store(0, Ordering::SeqCst);
        BYTES.store(0, Ordering::SeqCst);
        COUNTING.store(true, Ordering::SeqCst);
        black_box(op());
        COUNTING.store(false, Ordering::SeqCst);
        self.entries.push((
            label.into(),
            CALLS.load(Ordering::SeqCst),
            BYTES.load(Ordering::SeqCst),
        ));
    }

    fn codec(&mut self, codec: &Codec) {
        let radix = codec.radix();
        self.record(format!("encode 123456789 ({radix})"), || {
            codec.encode(123_456_789.0)
        });
        self.record(format!("encode 123.456789 ({radix})"), || {
            codec.encode(123.456_789)
        });
        if let Ok(numeral) = codec.encode(123.456_789) {
            self.record(format!("decode {numeral} ({radix})"), || {
                codec.decode(numeral.as_str())
            });
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.entries.iter().map(|(l, ..)| l.len()).max().unwrap_or(0);
        writeln!(f, "{:<width$}  {:>6}  {:>8}", "operation", "allocs", "bytes")?;
        for (label, calls, bytes) in &self.entries {
            writeln!(f, "{label:<width$}  {calls:>6}  {bytes:>8}")?;
        }
        Ok(())
    }
}

fn main() {
    let mut report = Report::default();

    for radix in [2, 16, 62, -2, -10] {
        let codec = make_codec(radix).unwrap();
        report.codec(&codec);
    }

    let hex = make_codec(16).unwrap();
    report.record("plus ff 1 (16)", || hex.plus("ff", "1"));
    report.record("divide 1 3 (-10)", || {
        make_codec(-10).and_then(|c| c.divide("1", "3"))
    });

    println!("{report}");
}
