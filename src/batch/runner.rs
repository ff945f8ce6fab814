// Chunk-at-a-time async driver.
// Items inside a chunk run concurrently; chunks run one after another so callers can cap
// fan-out (e.g. at most N in-flight requests). The first failing item stops the run.

use std::future::Future;

use futures::future::try_join_all;
use thiserror::Error;

use crate::batch::chunker::chunk;
use crate::error::UtilError;

#[derive(Error, Debug)]
pub enum BatchError<E> {
    #[error("chunking failed: {0}")]
    Chunking(#[from] UtilError),

    #[error("item failed in chunk {chunk_index}: {error}")]
    Item { chunk_index: usize, error: E },
}

/// Run `f` over `items`, `size` at a time. Results come back in input order.
pub async fn run_batched<T, R, E, F, Fut>(
    items: Vec<T>,
    size: usize,
    mut f: F,
) -> Result<Vec<R>, BatchError<E>>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let total = items.len();
    let mut results = Vec::with_capacity(total);

    for (chunk_index, batch) in chunk(items, size)?.enumerate() {
        log::debug!(
            "running chunk {} ({} items, {}/{} done)",
            chunk_index,
            batch.len(),
            results.len(),
            total
        );
        let outputs = try_join_all(batch.into_iter().map(&mut f))
            .await
            .map_err(|error| BatchError::Item { chunk_index, error })?;
        results.extend(outputs);
    }

    Ok(results)
}
