//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use ffl_explorer::{
    cli::{Commands, FflExplorer},
    commands::{
        aggregate::{handle_aggregate, AggregateParams},
        density::{handle_density, DensityParams},
        profile::{handle_profile, ProfileParams},
        seasons::{handle_seasons, SeasonsParams},
        trend::{handle_trend, TrendParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = FflExplorer::parse();

    match app.command {
        Commands::Seasons {
            source,
            scoring,
            year,
            players,
            positions,
            json,
        } => {
            handle_seasons(SeasonsParams {
                source,
                scoring,
                year,
                players,
                positions,
                json,
            })
            .await?
        }

        Commands::Aggregate {
            source,
            scoring,
            years,
            method,
            column,
            export,
            json,
        } => {
            handle_aggregate(AggregateParams {
                source,
                scoring,
                years,
                method,
                column,
                export,
                json,
            })
            .await?
        }

        Commands::Trend {
            source,
            scoring,
            players,
            json,
        } => {
            handle_trend(TrendParams {
                source,
                scoring,
                players,
                json,
            })
            .await?
        }

        Commands::Density {
            source,
            style,
            players,
            points,
            raw,
            json,
        } => {
            handle_density(DensityParams {
                source,
                style,
                players,
                points,
                raw,
                json,
            })
            .await?
        }

        Commands::Profile {
            source,
            player,
            category,
            strict,
            json,
        } => {
            handle_profile(ProfileParams {
                source,
                player,
                category,
                strict,
                json,
            })
            .await?
        }
    }

    Ok(())
}
