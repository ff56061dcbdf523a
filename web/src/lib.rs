use anyhow::Context;
use clap::Parser;
use heartswap_core::StageTiming;
use std::time::Duration;
use wasm_bindgen::prelude::*;

mod answer;
mod board;
mod canvas;
mod confetti;
mod fault;
mod loader;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a shuffle seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// How long a solved puzzle stays up, in milliseconds
    #[arg(long)]
    pause_ms: Option<u64>,
}

impl Args {
    /// Parses `#-v&--seed=4`-style location hashes.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn timing(&self) -> StageTiming {
        let mut timing = StageTiming::default();
        if let Some(pause_ms) = self.pause_ms {
            timing.solved_pause = Duration::from_millis(pause_ms);
        }
        timing
    }
}

fn parse_args(hash: &str) -> anyhow::Result<Args> {
    Args::from_hash(hash).context("Could not parse args")
}

#[wasm_bindgen(start)]
pub fn run_app() {
    fault::install_panic_hook();

    if let Err(err) = start() {
        log::error!("Could not start: {:#}", err);
        fault::show(&format!("{:#}", err));
    }
}

fn start() -> anyhow::Result<()> {
    use gloo::utils::{document, window};

    let location_hash = window().location().hash().unwrap_or_default();
    let args = parse_args(&location_hash)?;
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level)
            .map_err(|err| anyhow::anyhow!("{err}"))
            .context("Error initializing logger")?;
    }
    log::debug!("seed: {:?}, pause: {:?}", args.seed, args.pause_ms);

    let root = document()
        .get_element_by_id(fault::ROOT_ID)
        .with_context(|| format!("Could not find id=\"{}\" element", fault::ROOT_ID))?;

    let props = board::BoardProps {
        seed: args.seed,
        timing: args.timing(),
    };

    log::debug!("App started");
    yew::Renderer::<board::BoardView>::with_root_and_props(root, props).render();
    Ok(())
}
