//! Times bulk insert / delete / search over sequential integers, for both
//! `RBTree` and the standard library's `BTreeSet`.
//!
//! Usage: `rbtree-bench [COUNT]` (default 10000). Set `RBTREE_LOG` and
//! `RBTREE_LOG_FILE` to change the logging.

use std::collections::BTreeSet;
use std::hint::black_box;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use log::{error, info, warn};
use simplelog::LevelFilter;

use rbtree::logging::{initialize_logging, LogConfig};
use rbtree::RBTree;

const DEFAULT_COUNT: u32 = 10_000;
const ROUNDS: usize = 7;

/// The operations the workloads need, so they can be run against both sets.
trait OrderedSet: Default {
    const NAME: &'static str;
    fn insert(&mut self, key: u32);
    fn delete(&mut self, key: &u32);
    fn search(&self, key: &u32) -> bool;
}

impl OrderedSet for RBTree<u32> {
    const NAME: &'static str = "RBTree";
    fn insert(&mut self, key: u32) { RBTree::insert(self, key); }
    fn delete(&mut self, key: &u32) { RBTree::delete(self, key); }
    fn search(&self, key: &u32) -> bool { RBTree::search(self, key).is_some() }
}

impl OrderedSet for BTreeSet<u32> {
    const NAME: &'static str = "BTreeSet";
    fn insert(&mut self, key: u32) { BTreeSet::insert(self, key); }
    fn delete(&mut self, key: &u32) { BTreeSet::remove(self, key); }
    fn search(&self, key: &u32) -> bool { BTreeSet::contains(self, key) }
}

fn fill<S: OrderedSet>(count: u32) -> S {
    let mut set = S::default();
    for i in 0..count {
        set.insert(black_box(i));
    }
    set
}

fn insert_workload<S: OrderedSet>(count: u32) {
    black_box(fill::<S>(count));
}

fn delete_workload<S: OrderedSet>(count: u32) {
    let mut set = fill::<S>(count);
    for i in 0..count {
        set.delete(black_box(&i));
    }
    black_box(set);
}

fn search_workload<S: OrderedSet>(count: u32) {
    let set = fill::<S>(count);
    let mut found = 0;
    for i in 0..count {
        found += usize::from(set.search(black_box(&i)));
    }
    if found != count as usize {
        error!("{}: only found {found} of {count} keys", S::NAME);
    }
}

/// Median wall-clock time of `ROUNDS` runs.
fn median_time(workload: impl Fn()) -> Duration {
    let mut times: Vec<Duration> = (0..ROUNDS).map(|_| {
        let start = Instant::now();
        workload();
        start.elapsed()
    }).collect();
    times.sort();
    times[ROUNDS / 2]
}

fn bench<S: OrderedSet>(count: u32) {
    let workloads: [(&str, fn(u32)); 3] = [
        ("insert", insert_workload::<S>),
        ("delete", delete_workload::<S>),
        ("search", search_workload::<S>),
    ];
    for (name, workload) in workloads {
        let time = median_time(|| workload(count));
        info!("{:>8} {name:<6} x{count}: {time:?}", S::NAME);
    }
}

fn main() -> ExitCode {
    let config = LogConfig { term_level: LevelFilter::Info, ..LogConfig::default() }.with_env_overrides();
    if let Err(e) = initialize_logging(&config) {
        eprintln!("rbtree-bench: {e}");
    }

    let count = match std::env::args().nth(1) {
        None => DEFAULT_COUNT,
        Some(arg) => match arg.parse() {
            Ok(count) => count,
            Err(e) => {
                error!("invalid count {arg:?}: {e}");
                return ExitCode::from(2)
            }
        },
    };
    if count == 0 {
        warn!("count is zero, nothing to measure");
    }

    info!("median of {ROUNDS} rounds, {count} sequential keys");
    bench::<RBTree<u32>>(count);
    bench::<BTreeSet<u32>>(count);
    ExitCode::SUCCESS
}
