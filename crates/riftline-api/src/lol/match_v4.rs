//! Match history endpoints (match-v4).

use futures::stream::{self, Stream, TryStreamExt};

use crate::error::{ApiError, Result};
use crate::lol::model::{Match, MatchReference, MatchTimeline, Matchlist};
use crate::transport::HttpTransport;

/// Largest page the matchlist endpoint serves in one request.
pub const MATCHLIST_PAGE_SIZE: i32 = 100;

const BASE: [&str; 3] = ["lol", "match", "v4"];

fn route<'p>(tail: &[&'p str]) -> Vec<&'p str> {
    BASE.iter().copied().chain(tail.iter().copied()).collect()
}

/// Filters for [`MatchClient::list_with_options`].
///
/// Empty lists and `None` values are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchListOptions {
    pub champions: Vec<i32>,
    pub queues: Vec<i32>,
    pub seasons: Vec<i32>,
    /// Epoch milliseconds
    pub begin_time: Option<i64>,
    /// Epoch milliseconds
    pub end_time: Option<i64>,
    pub begin_index: Option<i32>,
    pub end_index: Option<i32>,
}

impl MatchListOptions {
    pub fn range(begin_index: i32, end_index: i32) -> Self {
        Self {
            begin_index: Some(begin_index),
            end_index: Some(end_index),
            ..Self::default()
        }
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        query.extend(self.champions.iter().map(|c| ("champion", c.to_string())));
        query.extend(self.queues.iter().map(|q| ("queue", q.to_string())));
        query.extend(self.seasons.iter().map(|s| ("season", s.to_string())));
        if let Some(t) = self.begin_time {
            query.push(("beginTime", t.to_string()));
        }
        if let Some(t) = self.end_time {
            query.push(("endTime", t.to_string()));
        }
        if let Some(i) = self.begin_index {
            query.push(("beginIndex", i.to_string()));
        }
        if let Some(i) = self.end_index {
            query.push(("endIndex", i.to_string()));
        }
        query
    }
}

/// Match history client, obtained from [`RiotClient::matches`](crate::RiotClient::matches).
#[derive(Debug, Clone, Copy)]
pub struct MatchClient<'a> {
    transport: &'a HttpTransport,
}

impl<'a> MatchClient<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    pub async fn get(&self, match_id: i64) -> Result<Match> {
        let id = match_id.to_string();
        self.transport.get_json(&route(&["matches", id.as_str()]), &[]).await
    }

    pub async fn get_timeline(&self, match_id: i64) -> Result<MatchTimeline> {
        let id = match_id.to_string();
        self.transport
            .get_json(&route(&["timelines", "by-match", id.as_str()]), &[])
            .await
    }

    /// Matches of an account between `begin_index` (inclusive) and
    /// `end_index` (exclusive), most recent first.
    pub async fn list(
        &self,
        account_id: &str,
        begin_index: i32,
        end_index: i32,
    ) -> Result<Matchlist> {
        self.list_with_options(account_id, &MatchListOptions::range(begin_index, end_index))
            .await
    }

    pub async fn list_with_options(
        &self,
        account_id: &str,
        options: &MatchListOptions,
    ) -> Result<Matchlist> {
        self.transport
            .get_json(
                &route(&["matchlists", "by-account", account_id]),
                &options.query(),
            )
            .await
    }

    /// Every match of an account, fetched page by page.
    ///
    /// Pages hold [`MATCHLIST_PAGE_SIZE`] references; the stream ends after
    /// the first short page. An error is yielded once and ends the stream.
    pub fn list_stream<'s>(
        &'s self,
        account_id: &'s str,
    ) -> impl Stream<Item = Result<MatchReference>> + 's {
        stream::try_unfold(Some(0), move |next| async move {
            let Some(begin) = next else {
                return Ok::<_, ApiError>(None);
            };

            let page = self
                .list(account_id, begin, begin + MATCHLIST_PAGE_SIZE)
                .await?;
            tracing::debug!(
                "Fetched {} matches for account from index {}",
                page.matches.len(),
                begin
            );

            let full = page.matches.len() >= MATCHLIST_PAGE_SIZE as usize;
            let next = full.then_some(begin + MATCHLIST_PAGE_SIZE);
            let references = stream::iter(page.matches.into_iter().map(Ok::<_, ApiError>));
            Ok(Some((references, next)))
        })
        .try_flatten()
    }

    pub async fn list_ids_by_tournament_code(&self, tournament_code: &str) -> Result<Vec<i64>> {
        self.transport
            .get_json(
                &route(&["matches", "by-tournament-code", tournament_code, "ids"]),
                &[],
            )
            .await
    }

    pub async fn get_for_tournament(&self, match_id: i64, tournament_code: &str) -> Result<Match> {
        let id = match_id.to_string();
        self.transport
            .get_json(
                &route(&["matches", id.as_str(), "by-tournament-code", tournament_code]),
                &[],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_range_query() {
        let query = MatchListOptions::range(0, 100).query();
        assert_eq!(
            query,
            vec![
                ("beginIndex", "0".to_string()),
                ("endIndex", "100".to_string())
            ]
        );
    }

    #[test]
    fn test_filter_query_repeats_keys() {
        let options = MatchListOptions {
            champions: vec![157, 238],
            queues: vec![420],
            begin_time: Some(1_600_000_000_000),
            ..MatchListOptions::default()
        };
        assert_eq!(
            options.query(),
            vec![
                ("champion", "157".to_string()),
                ("champion", "238".to_string()),
                ("queue", "420".to_string()),
                ("beginTime", "1600000000000".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_options_have_no_query() {
        assert!(MatchListOptions::default().query().is_empty());
    }
}
