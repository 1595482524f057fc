//! Small helpers with no domain logic.

use std::future::Future;
use std::time::Instant;

/// Runs `fut` to completion and prints its wall-clock duration.
pub async fn timed<T, F>(label: &str, fut: F) -> T
where
    F: Future<Output = T>,
{
    let start = Instant::now();
    let result = fut.await;
    println!("{} took {:.4} sec", label, start.elapsed().as_secs_f64());
    result
}
