//! Output formatting for command results
//!
//! JSON output goes straight through `serde_json`. Text output renders
//! tables with `comfy-table` and colours headers with `owo-colors` unless
//! colour is disabled.

use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, presets};
use owo_colors::OwoColorize;
use riftline_api::lol::model::{
    FeaturedGames, GameInfo, Match, MatchReference, MatchTimeline, Matchlist,
};
use serde::Serialize;

use crate::OutputFormat;

/// Style configuration for text output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    /// Whether to use colors in output
    pub use_color: bool,
    /// Whether to use Unicode characters for borders
    pub use_unicode: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_color: std::env::var_os("NO_COLOR").is_none(),
            use_unicode: true,
        }
    }
}

impl OutputStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn no_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Use ASCII characters instead of Unicode
    #[must_use]
    pub fn ascii(mut self) -> Self {
        self.use_unicode = false;
        self
    }
}

/// Render `value` as JSON in the requested flavour.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> serde_json::Result<String> {
    if matches!(format, OutputFormat::JsonPretty) {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Print `value` as JSON, or the text produced by `text` for [`OutputFormat::Text`].
pub fn emit<T, F>(value: &T, format: OutputFormat, style: &OutputStyle, text: F) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T, &OutputStyle) -> String,
{
    match format {
        OutputFormat::Text => println!("{}", text(value, style)),
        OutputFormat::Json | OutputFormat::JsonPretty => println!("{}", to_json(value, format)?),
    }
    Ok(())
}

pub fn format_header(text: &str, style: &OutputStyle) -> String {
    if style.use_color {
        text.bold().bright_blue().to_string()
    } else {
        text.to_string()
    }
}

pub fn format_key_value(key: &str, value: &str, style: &OutputStyle) -> String {
    if style.use_color {
        format!("{}: {}", key.cyan(), value)
    } else {
        format!("{key}: {value}")
    }
}

pub fn create_table(style: &OutputStyle) -> Table {
    let mut table = Table::new();
    if style.use_unicode {
        table
            .load_preset(presets::UTF8_FULL)
            .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(presets::ASCII_FULL);
    }
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    table
}

pub fn header_cell(text: &str, style: &OutputStyle) -> Cell {
    let cell = Cell::new(text)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Left);
    if style.use_color { cell.fg(Color::Cyan) } else { cell }
}

pub fn numeric_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

/// Win/loss cell, green or red when colours are on.
fn result_cell(won: bool, style: &OutputStyle) -> Cell {
    let cell = Cell::new(if won { "won" } else { "lost" });
    match (style.use_color, won) {
        (false, _) => cell,
        (true, true) => cell.fg(Color::Green),
        (true, false) => cell.fg(Color::Red),
    }
}

fn with_header(table: &mut Table, columns: &[&str], style: &OutputStyle) {
    table.set_header(columns.iter().map(|c| header_cell(c, style)));
}

pub fn match_summary(game: &Match, style: &OutputStyle) -> String {
    let title = format!(
        "Match {} ({}, queue {}) {}:{:02} on patch {}",
        game.game_id,
        game.game_mode,
        game.queue_id,
        game.game_duration / 60,
        game.game_duration % 60,
        game.game_version
    );

    let mut teams = create_table(style);
    with_header(&mut teams, &["Team", "Result", "Towers", "Dragons", "Barons"], style);
    for team in &game.teams {
        teams.add_row(vec![
            numeric_cell(team.team_id),
            result_cell(team.won(), style),
            numeric_cell(team.tower_kills),
            numeric_cell(team.dragon_kills),
            numeric_cell(team.baron_kills),
        ]);
    }

    let mut players = create_table(style);
    with_header(&mut players, &["Team", "Summoner", "Champion", "K/D/A", "KDA"], style);
    for participant in &game.participants {
        let name = game
            .participant_identity(participant.participant_id)
            .and_then(|identity| identity.player.as_ref())
            .map_or("<anonymous>", |player| player.summoner_name.as_str());
        let stats = &participant.stats;
        players.add_row(vec![
            numeric_cell(participant.team_id),
            Cell::new(name),
            numeric_cell(participant.champion_id),
            Cell::new(format!("{}/{}/{}", stats.kills, stats.deaths, stats.assists)),
            numeric_cell(format!("{:.2}", stats.kda())),
        ]);
    }

    format!("{}\n{teams}\n{players}", format_header(&title, style))
}

pub fn timeline_summary(timeline: &MatchTimeline, style: &OutputStyle) -> String {
    [
        format_key_value("Frames", &timeline.frames.len().to_string(), style),
        format_key_value(
            "Frame interval",
            &format!("{}s", timeline.frame_interval / 1000),
            style,
        ),
        format_key_value("Events", &timeline.events().count().to_string(), style),
    ]
    .join("\n")
}

pub fn references_table(references: &[MatchReference], style: &OutputStyle) -> String {
    let mut table = create_table(style);
    with_header(
        &mut table,
        &["Game", "Champion", "Queue", "Season", "Lane", "Role"],
        style,
    );
    for reference in references {
        table.add_row(vec![
            numeric_cell(reference.game_id),
            numeric_cell(reference.champion),
            numeric_cell(reference.queue),
            numeric_cell(reference.season),
            Cell::new(&reference.lane),
            Cell::new(&reference.role),
        ]);
    }
    table.to_string()
}

pub fn matchlist_summary(list: &Matchlist, style: &OutputStyle) -> String {
    let title = format!(
        "Matches {}..{} of {}",
        list.start_index, list.end_index, list.total_games
    );
    format!(
        "{}\n{}",
        format_header(&title, style),
        references_table(&list.matches, style)
    )
}

pub fn featured_summary(featured: &FeaturedGames, style: &OutputStyle) -> String {
    let title = format!(
        "{} featured games (refresh in {}s)",
        featured.game_list.len(),
        featured.client_refresh_interval
    );

    let mut table = create_table(style);
    with_header(&mut table, &["Game", "Mode", "Length", "Players"], style);
    for game in &featured.game_list {
        let players: Vec<&str> = game
            .participants
            .iter()
            .map(|p| p.summoner_name.as_str())
            .collect();
        table.add_row(vec![
            numeric_cell(game.game_id),
            Cell::new(&game.game_mode),
            numeric_cell(format!("{}s", game.game_length)),
            Cell::new(players.join(", ")),
        ]);
    }

    format!("{}\n{table}", format_header(&title, style))
}

pub fn current_game_summary(game: &GameInfo, style: &OutputStyle) -> String {
    let title = format!(
        "Game {} ({}) running for {}s",
        game.game_id, game.game_mode, game.game_length
    );

    let mut table = create_table(style);
    with_header(&mut table, &["Team", "Summoner", "Champion", "Spells"], style);
    for participant in &game.participants {
        table.add_row(vec![
            numeric_cell(participant.team_id),
            Cell::new(&participant.summoner_name),
            numeric_cell(participant.champion_id),
            Cell::new(format!("{} {}", participant.spell1_id, participant.spell2_id)),
        ]);
    }

    format!("{}\n{table}", format_header(&title, style))
}
