//! Simulated query executor firing qtrace markers
//!
//! Runs a small scan-and-filter pipeline and fires the standard markers so
//! an external tracer has something to attach to:
//!
//! ```text
//! bpftrace -e 'usdt:./target/debug/exec-demo:qtrace:executor_start
//!     { printf("qid=%d rows=%d\n", arg0, arg1); }'
//! ```
//!
//! # Environment Variables
//!
//! - `QTRACE_DEMO_ROWS=<n>` - rows per query (default 10000)
//! - `QTRACE_DEMO_QUERIES=<n>` - number of queries to run (default 3)
//! - `QTRACE_DEMO_SPIN=1` - loop forever so a tracer can attach
//! - `QTRACE_LOG_LEVEL=debug` - diagnostic verbosity (off, error, info, debug)

use qtrace::{
    define_semaphore, env_get, env_get_bool, marker, marker_enabled, marker_with_features,
    marker_with_semaphore, tp_debug, tp_info, PlanState,
};

// Gate for the per-query value histogram: computing percentiles over every
// emitted row is exactly the kind of work to skip when nobody is tracing.
define_semaphore!(filter_histogram);

/// Plan-state stand-in for one simulated query.
struct DemoPlan {
    query_id: u64,
    estimated_rows: f64,
    estimated_width: i32,
}

impl PlanState for DemoPlan {
    fn query_id(&self) -> u64 {
        self.query_id
    }
    fn estimated_num_rows(&self) -> f64 {
        self.estimated_rows
    }
    fn estimated_row_width_bytes(&self) -> i32 {
        self.estimated_width
    }
}

/// Cheap deterministic row generator (xorshift).
fn next_row(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

/// The "expensive" gated computation: a sorted percentile over the batch.
fn histogram_p99(values: &mut Vec<u64>) -> u64 {
    values.sort_unstable();
    let idx = (values.len() as f64 * 0.99) as usize;
    values[idx.min(values.len() - 1)]
}

fn run_query(plan: &DemoPlan, rows: u64) {
    marker_with_features!(executor_start, plan);
    tp_debug!("query {} started", plan.query_id);

    let mut rng = plan.query_id.wrapping_mul(0x9e3779b97f4a7c15) | 1;
    let mut emitted = 0u64;
    let mut histogram = if marker_enabled!(filter_histogram) {
        Some(Vec::with_capacity(rows as usize))
    } else {
        None
    };

    for _ in 0..rows {
        let value = next_row(&mut rng);
        // Filter keeps roughly half the rows.
        if value & 1 == 0 {
            emitted += 1;
            marker!(row_emitted, plan.query_id, value);
            if let Some(values) = histogram.as_mut() {
                values.push(value);
            }
        }
    }

    if let Some(mut values) = histogram {
        if !values.is_empty() {
            let p99 = histogram_p99(&mut values);
            marker_with_semaphore!(filter_histogram, plan.query_id, p99, emitted);
            tp_debug!("query {} histogram p99={}", plan.query_id, p99);
        }
    }

    marker_with_features!(executor_end, plan, emitted);
    tp_info!("query {} done, emitted {} of {} rows", plan.query_id, emitted, rows);
}

// QTRACE_LOG_LEVEL=debug cargo run -p qtrace-exec-demo
fn main() {
    println!("=== qtrace executor demo ===");
    println!(
        "pid {}  probes {}",
        std::process::id(),
        if qtrace::probes_enabled() { "enabled" } else { "stubbed" }
    );

    let rows: u64 = env_get("QTRACE_DEMO_ROWS", 10_000);
    let queries: u64 = env_get("QTRACE_DEMO_QUERIES", 3);
    let spin = env_get_bool("QTRACE_DEMO_SPIN", false);

    loop {
        for qid in 1..=queries {
            let plan = DemoPlan {
                query_id: qid,
                estimated_rows: rows as f64 * 0.5,
                estimated_width: 48,
            };
            run_query(&plan, rows);
        }

        if !spin {
            break;
        }
        // Give an attaching tracer a quiet window between rounds.
        std::thread::sleep(std::time::Duration::from_millis(500));
    }

    println!("done");
}
