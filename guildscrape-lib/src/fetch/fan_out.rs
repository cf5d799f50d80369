use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use log::debug;

use crate::Result;

/// Run `fetch` for every key concurrently and collect the results by key.
///
/// One future is created per key and all of them are polled together; there
/// is no cap besides the number of keys, since the request quota is what
/// actually throttles the fetches. All futures live inside this call.
///
/// The first error aborts the whole fan-out: the remaining futures are
/// dropped and the error is returned, so callers never see a partial map.
/// If the same key appears more than once, the result that completes last
/// wins.
///
/// # Errors
///
/// Returns the error of the first failed fetch.
pub async fn fan_out<K, T, F, Fut>(keys: impl IntoIterator<Item = K>, fetch: F) -> Result<HashMap<K, T>>
where
    K: Eq + Hash + Clone,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut pending: FuturesUnordered<_> = keys
        .into_iter()
        .map(|key| {
            let fetched = fetch(key.clone());
            async move { (key, fetched.await) }
        })
        .collect();

    debug!("Fanning out {} fetches", pending.len());

    let mut results = HashMap::with_capacity(pending.len());
    while let Some((key, result)) = pending.next().await {
        results.insert(key, result?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use tokio::time::{Instant, sleep};

    use super::*;
    use crate::{ErrorKind, QuotaLimiter};

    #[tokio::test]
    async fn test_collects_results_by_key() {
        let results = fan_out(["a", "bb", "ccc"], |key| async move { Ok(key.len()) })
            .await
            .unwrap();

        assert_eq!(results, HashMap::from([("a", 1), ("bb", 2), ("ccc", 3)]));
    }

    #[tokio::test]
    async fn test_empty_input() {
        let results = fan_out(Vec::<String>::new(), |_| async { Ok(()) })
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_keys_keep_one_entry() {
        let results = fan_out(["x", "x"], |key| async move { Ok(key) }).await.unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_run_concurrently() {
        let start = Instant::now();

        fan_out(0..10, |_| async {
            sleep(Duration::from_secs(1)).await;
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_error_aborts_remaining_fetches() {
        let finished = AtomicUsize::new(0);

        let result = fan_out(0..5u64, |i| {
            let finished = &finished;
            async move {
                if i == 2 {
                    return Err(ErrorKind::InvalidQpsLimit(0));
                }
                sleep(Duration::from_secs(10)).await;
                finished.fetch_add(1, Ordering::SeqCst);
                Ok(i)
            }
        })
        .await;

        assert!(matches!(result, Err(ErrorKind::InvalidQpsLimit(0))));
        assert_eq!(finished.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_share_limiter() {
        let limiter = QuotaLimiter::new(3).unwrap();
        let start = Instant::now();

        let results = fan_out(0..7, |i| {
            let limiter = &limiter;
            async move {
                limiter.acquire().await;
                Ok((i, Instant::now()))
            }
        })
        .await
        .unwrap();

        assert_eq!(results.len(), 7);
        // 3 + 3 + 1 requests need two rollovers
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }
}
