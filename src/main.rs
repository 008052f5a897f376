use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "house-icon-gen",
    version,
    about = "Generate the house launcher icons, store icon and feature graphic"
)]
struct Args {
    /// Root directory the fixed output paths are resolved against.
    /// Leave at the default to write the assets in place; other values are
    /// meant for test runs.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    house_icon_gen::generate_all(&args.output)
}
