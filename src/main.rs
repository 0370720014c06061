use clap::Parser;
use env_logger::Env;
use log::info;
use picshape::{
    console::{show_intro, Args, PartialArgs},
    demo::{run, DemoConfig},
    error::PicResult,
};

fn main() -> PicResult<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    //parse CLI arguments
    let picshape_args = Args::try_from(PartialArgs::parse())?;
    show_intro();

    //run the demo and list the written pictures
    let written = run(&DemoConfig::from(picshape_args))?;
    info!("{} pictures written", written.len());
    for path in &written {
        info!("  {}", path.display());
    }
    Ok(())
}
