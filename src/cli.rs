use crate::{
    config::{self, Config},
    gateways, view,
};
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use dcf_core::{
    entities::MapPoint,
    gateways::geocode::GeocodedAddress,
    usecases::{self, NearestLookup},
};
use std::{path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
#[command(version, about = "Find the closest data center cluster to your address")]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve an address, city or ZIP code and find the closest data center
    Lookup {
        #[arg(required = true, value_name = "ADDRESS")]
        address: Vec<String>,
    },
    /// Find the closest data center to a position
    Nearest {
        #[arg(value_name = "LAT,LNG", allow_hyphen_values = true)]
        position: MapPoint,
    },
    /// List the configured data centers
    List,
}

pub async fn run(args: Args) -> Result<ExitCode> {
    let Args {
        config_file,
        json,
        command,
    } = args;
    let cfg = Config::try_load_from_file_or_default(config_file)?;

    match command {
        Command::List => {
            if json {
                let dataset: Vec<dcf_boundary::Location> =
                    cfg.dataset.iter().cloned().map(Into::into).collect();
                println!("{}", serde_json::to_string_pretty(&dataset)?);
            } else {
                print!("{}", view::dataset_listing(&cfg.dataset));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Nearest { position } => {
            let nearest = usecases::find_nearest_with_tie_break(
                position,
                &cfg.dataset,
                cfg.resolver.tie_break,
            );
            let lookup = NearestLookup {
                address: GeocodedAddress {
                    pos: position,
                    display_name: position.to_string(),
                },
                nearest,
            };
            print_lookup(&cfg, lookup, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Lookup { address } => {
            let address = address.join(" ");
            let geo_gw = gateways::geocoding_gateway(&cfg.geocoding).ok_or_else(|| {
                anyhow!(
                    "No geocoding gateway configured (set {})",
                    config::ENV_NAME_OPENCAGE_API_KEY
                )
            })?;
            log::info!("Looking up the closest data center to '{address}'");
            if let Some(status) = lookup_status(json) {
                eprintln!("{status}");
            }
            match usecases::lookup_nearest(
                &geo_gw,
                &address,
                &cfg.dataset,
                cfg.resolver.tie_break,
            )
            .await
            {
                Ok(lookup) => {
                    print_lookup(&cfg, lookup, json)?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    log::warn!("Lookup of '{address}' failed: {err}");
                    eprintln!("{}", view::failure_message(&err));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn lookup_status(json: bool) -> Option<&'static str> {
    (!json).then_some(view::LOOKUP_STATUS_MESSAGE)
}

fn print_lookup(cfg: &Config, lookup: NearestLookup, json: bool) -> Result<()> {
    if json {
        let lookup = dcf_boundary::Lookup::from(lookup);
        println!("{}", serde_json::to_string_pretty(&lookup)?);
    } else {
        let explanation =
            view::pick_explanation(&cfg.presentation.explanations, view::random_index);
        println!("{}", view::lookup_message(&lookup, explanation));
    }
    Ok(())
}
