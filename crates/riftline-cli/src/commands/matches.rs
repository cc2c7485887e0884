//! `riftline match` handlers.

use anyhow::{Context, Result};
use futures::{StreamExt, TryStreamExt};
use riftline_api::{MatchListOptions, RiotClient};

use crate::output::{
    OutputStyle, emit, match_summary, matchlist_summary, references_table, timeline_summary,
};
use crate::{MatchCommands, OutputFormat};

pub async fn handle(
    client: &RiotClient,
    cmd: MatchCommands,
    format: OutputFormat,
    style: &OutputStyle,
) -> Result<()> {
    let matches = client.matches();

    match cmd {
        MatchCommands::Get { match_id } => {
            let game = matches
                .get(match_id)
                .await
                .with_context(|| format!("Failed to fetch match {match_id}"))?;
            emit(&game, format, style, match_summary)
        }
        MatchCommands::Timeline { match_id } => {
            let timeline = matches
                .get_timeline(match_id)
                .await
                .with_context(|| format!("Failed to fetch timeline of match {match_id}"))?;
            emit(&timeline, format, style, timeline_summary)
        }
        MatchCommands::List {
            account_id,
            begin,
            end,
            champions,
            queues,
            seasons,
        } => {
            let options = MatchListOptions {
                champions,
                queues,
                seasons,
                begin_index: begin,
                end_index: end,
                ..MatchListOptions::default()
            };
            let list = matches
                .list_with_options(&account_id, &options)
                .await
                .context("Failed to list matches")?;
            emit(&list, format, style, matchlist_summary)
        }
        MatchCommands::All { account_id, limit } => {
            let stream = matches.list_stream(&account_id);
            let references = match limit {
                Some(limit) => stream.take(limit).try_collect::<Vec<_>>().await,
                None => stream.try_collect::<Vec<_>>().await,
            }
            .context("Failed to walk match history")?;
            tracing::info!("Collected {} matches", references.len());

            emit(references.as_slice(), format, style, references_table)
        }
        MatchCommands::TournamentIds { code } => {
            let ids = matches
                .list_ids_by_tournament_code(&code)
                .await
                .with_context(|| format!("Failed to list matches for tournament code {code}"))?;
            emit(&ids, format, style, |ids, _| {
                ids.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        MatchCommands::Tournament { match_id, code } => {
            let game = matches
                .get_for_tournament(match_id, &code)
                .await
                .with_context(|| format!("Failed to fetch match {match_id} for {code}"))?;
            emit(&game, format, style, match_summary)
        }
    }
}
