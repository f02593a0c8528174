//! Human-readable text output

use crate::estimator::RunStats;

/// Print the timed parallel vs sequential comparison
///
/// The layout is the historical one: a block per mode, estimate first,
/// elapsed wall-clock milliseconds second.
///
/// ```text
/// parallel:
///     result: 3.142
///     time: 4ms
///
/// sequential:
///     result: 3.126
///     time: 11ms
/// ```
pub fn print_comparison(parallel: &RunStats, sequential: &RunStats) {
    println!("parallel:");
    println!("\tresult: {}", parallel.estimate);
    println!("\ttime: {}ms", parallel.elapsed.as_millis());
    println!();
    println!("sequential:");
    println!("\tresult: {}", sequential.estimate);
    println!("\ttime: {}ms", sequential.elapsed.as_millis());
}

/// Print the final estimate line of a diagnostic run
pub fn print_estimate(run: &RunStats) {
    println!("result: {}", run.estimate);
}
