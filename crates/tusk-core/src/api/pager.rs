use std::collections::HashSet;

use futures::stream::{self, Stream};

use crate::api::{ClientError, Endpoint, MastodonApiClient, PageInfo, PageRequest, PagedResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Older,
    Newer,
}

impl PageDirection {
    /// Request for the page after `info` in this direction, keeping the page
    /// size of the request that produced it.
    pub fn next_request(self, info: &PageInfo, limit: Option<u32>) -> Option<PageRequest> {
        let next = match self {
            PageDirection::Older => PageRequest {
                max_id: Some(info.max_id.clone()?),
                ..PageRequest::default()
            },
            PageDirection::Newer => match (&info.min_id, &info.since_id) {
                (Some(min_id), _) => PageRequest::newer_than(min_id.clone()),
                (None, Some(since_id)) => PageRequest {
                    since_id: Some(since_id.clone()),
                    ..PageRequest::default()
                },
                (None, None) => return None,
            },
        };

        Some(PageRequest { limit, ..next })
    }
}

impl MastodonApiClient {
    /// Walks pages serially, feeding each response's cursor into the next
    /// request. Ends after a page with no cursor in `direction`, after a
    /// cursor that repeats any request already sent, or after yielding an error.
    pub fn pages<'a, E>(
        &'a self,
        endpoint: &'a E,
        start: PageRequest,
        direction: PageDirection,
    ) -> impl Stream<Item = Result<PagedResult<E::Result>, ClientError>> + 'a
    where
        E: Endpoint + 'a,
    {
        stream::unfold(
            (Some(start), HashSet::new()),
            move |(pending, mut sent)| async move {
                let page = pending?;
                sent.insert(page.clone());
                match self.paged_request(endpoint, page.clone()).await {
                    Ok(result) => {
                        let next = direction
                            .next_request(&result.info, page.limit)
                            .filter(|next| !sent.contains(next));
                        Some((Ok(result), (next, sent)))
                    }
                    Err(err) => Some((Err(err), (None, sent))),
                }
            },
        )
    }
}
