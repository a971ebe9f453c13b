//! Splitting of long name lists into API-sized batches.
//!
//! The service accepts at most [`BATCH_SIZE`] names per request. Longer
//! queries are cut into consecutive chunks which are requested one after the
//! other; the per-chunk replies are concatenated in chunk order, so the
//! result lines up index-for-index with the submitted names.
//!
//! The first failing chunk aborts the whole query. No partial results are
//! returned and the remaining chunks are never sent.

use snafu::{ensure, ResultExt};
use tracing::{debug, instrument};

use crate::{
    client::GenderizeClient,
    error::{DeserializeSnafu, ResponseLengthSnafu},
    models::{Query, Records, Response},
    Result,
};

/// Maximum number of names the API accepts in a single request.
///
/// See <https://genderize.io/#multipleusage>.
pub const BATCH_SIZE: usize = 10;

/// Requests every batch of `query` in order and reassembles the replies.
#[instrument(skip_all, fields(
    names = query.names.len(),
    batches = query.names.len().div_ceil(BATCH_SIZE),
))]
pub(crate) async fn get_batched(client: &GenderizeClient, query: &Query) -> Result<Vec<Response>> {
    let mut responses = Vec::with_capacity(query.names.len());

    for (index, names) in query.names.chunks(BATCH_SIZE).enumerate() {
        debug!(batch = index, size = names.len(), "requesting batch");

        let batch = client
            .get_batch(names, query.country_id(), query.language_id())
            .await?;

        ensure!(
            batch.len() == names.len(),
            ResponseLengthSnafu {
                expected: names.len(),
                actual: batch.len(),
            }
        );
        responses.extend(batch);
    }

    Ok(responses)
}

/// Decodes a success body into one record per name.
///
/// A JSON list is tried first; a single object is accepted as a one-name reply.
pub(crate) fn decode_records(body: &[u8]) -> Result<Vec<Response>> {
    let records: Records = serde_json::from_slice(body).context(DeserializeSnafu)?;
    Ok(records.into())
}
