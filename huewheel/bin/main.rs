use std::fs;

use anyhow::Result;
use clap::Parser;
use rand::Rng;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

use huewheel::{color::Rgb, export::Palette};

mod args;
use args::Args;

fn main() -> Result<()> {
    let filter = filter::Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target("huewheel", LevelFilter::TRACE);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let base = args.base.unwrap_or_else(random_color);
    let colors = args.scheme.generate(base, args.count)?;

    let palette = Palette {
        scheme: args.scheme,
        base,
        colors,
    };
    let rendered = args.format.render(&palette)?;

    match args.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}

fn random_color() -> Rgb {
    let mut rng = rand::rng();
    Rgb::new(rng.random(), rng.random(), rng.random())
}
