//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{AggMethod, Position, ScoringStyle, Year, YearRange};

/// Source options shared by every subcommand.
#[derive(Debug, Args)]
pub struct SourceOpts {
    /// Base URL of the hosted datasets (or set `FFL_EXPLORER_BASE_URL`).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Force re-download, overwriting the cached copy.
    #[clap(long)]
    pub refresh: bool,
}

/// Scoring options selecting the metric column.
#[derive(Debug, Args)]
pub struct ScoringOpts {
    /// Fantasy point scoring style.
    #[clap(long, default_value_t = ScoringStyle::Normal)]
    pub style: ScoringStyle,

    /// Use the average-per-game column instead of the season total.
    #[clap(long)]
    pub per_game: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "ffl-explorer", about = "NFL fantasy football stats explorer")]
pub struct FflExplorer {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show season-level rows for one year, sorted by the selected metric.
    Seasons {
        #[clap(flatten)]
        source: SourceOpts,

        #[clap(flatten)]
        scoring: ScoringOpts,

        /// Season year (e.g. 2021).
        #[clap(long, short, default_value_t = Year::default())]
        year: Year,

        /// Filter by player name (substring match) - repeatable: `-n Allen -n Kupp`.
        #[clap(long = "player", short = 'n')]
        players: Option<Vec<String>>,

        /// Filter by position (repeatable): `-p QB -p RB`.
        #[clap(short = 'p', long = "position")]
        positions: Option<Vec<Position>>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Aggregate a metric per (player, position) over an inclusive year range.
    ///
    /// Filters season rows to the range, groups by (player, position), and
    /// reduces the target column with the requested method. Results other
    /// than sums are rounded to one decimal place.
    Aggregate {
        #[clap(flatten)]
        source: SourceOpts,

        #[clap(flatten)]
        scoring: ScoringOpts,

        /// Inclusive year range, e.g. `2019-2021`, or a single year.
        #[clap(long, default_value_t = YearRange::default())]
        years: YearRange,

        /// Aggregation method.
        #[clap(long, short, default_value_t = AggMethod::Sum)]
        method: AggMethod,

        /// Aggregate this raw column name, overriding --style/--per-game.
        #[clap(long)]
        column: Option<String>,

        /// Write the aggregated table to a CSV file.
        #[clap(long)]
        export: Option<PathBuf>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Year-over-year metric values for selected players.
    Trend {
        #[clap(flatten)]
        source: SourceOpts,

        #[clap(flatten)]
        scoring: ScoringOpts,

        /// Player name (substring match) - repeatable, at least one required.
        #[clap(long = "player", short = 'n', required = true)]
        players: Vec<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Weekly-points density estimate for selected players.
    Density {
        #[clap(flatten)]
        source: SourceOpts,

        /// Fantasy point scoring style (selects the weekly metric column).
        #[clap(long, default_value_t = ScoringStyle::Normal)]
        style: ScoringStyle,

        /// Player name (substring match) - repeatable, at least one required.
        #[clap(long = "player", short = 'n', required = true)]
        players: Vec<String>,

        /// Number of evaluation points in the density grid.
        #[clap(long, default_value_t = 200)]
        points: usize,

        /// Also print the raw weekly rows being estimated.
        #[clap(long)]
        raw: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Category/year stat summaries for one player from the summaries document.
    Profile {
        #[clap(flatten)]
        source: SourceOpts,

        /// Player name (substring match).
        #[clap(long = "player", short = 'n')]
        player: String,

        /// Only show one summary category.
        #[clap(long)]
        category: Option<String>,

        /// Fail on malformed summary rows instead of skipping them.
        #[clap(long)]
        strict: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
