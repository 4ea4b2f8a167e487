//! Fixed-size worker pool mapping a function over a slice, results in input
//! order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use tracing::debug;

/// Applies `f` to every item on `workers` scoped threads.
///
/// Each worker calls `init` once for its private state, then pulls the next
/// unclaimed index until the slice is exhausted. `on_progress(done, total)`
/// runs on the calling thread after every completion. A worker count of 0 is
/// treated as 1; there is no cancellation or per-item timeout.
pub fn map_ordered<T, R, S, I, F, P>(
    items: &[T],
    workers: usize,
    init: I,
    f: F,
    mut on_progress: P,
) -> Vec<R>
where
    T: Sync,
    R: Send,
    I: Fn() -> S + Sync,
    F: Fn(&mut S, &T) -> R + Sync,
    P: FnMut(usize, usize),
{
    let total = items.len();
    if total == 0 {
        return Vec::new();
    }
    let workers = workers.clamp(1, total);
    debug!(workers, total, "starting worker pool");

    let next = AtomicUsize::new(0);
    let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(total).collect();

    thread::scope(|scope| {
        let (tx, rx) = mpsc::channel::<(usize, R)>();
        for _ in 0..workers {
            let tx = tx.clone();
            let (next, init, f) = (&next, &init, &f);
            scope.spawn(move || {
                let mut state = init();
                loop {
                    let idx = next.fetch_add(1, Ordering::Relaxed);
                    let Some(item) = items.get(idx) else {
                        break;
                    };
                    if tx.send((idx, f(&mut state, item))).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx);

        for (done, (idx, result)) in rx.iter().enumerate() {
            slots[idx] = Some(result);
            on_progress(done + 1, total);
        }
    });

    slots.into_iter().flatten().collect()
}
