mod compose;
mod config;
mod encode;
mod error;
mod listing;
mod select;
mod source;
mod stitch;
mod timer;

use crate::{
    config::Args,
    stitch::stitch,
};

use clap::{ CommandFactory, Parser };

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let Some(config) = args.into_config().vital("Stitchimg: invalid arguments") else {
        // Missing paths are not an error, just show how to call us.
        Args::command().print_help().vital("Stitchimg: could not print usage");
        return;
    };

    let report = stitch(&config).vital("Stitchimg: stitching failed");
    log::debug!("Stitched {:?} into {}x{}", report.selected, report.width, report.height);
}

trait Vital<T> {
    fn vital(self, msg: &str) -> T;
}

impl<T, U: std::fmt::Display> Vital<T> for Result<T, U> {
    fn vital(self, msg: &str) -> T {
        match self {
            Ok(res) => res,
            Err(err) => {
                log::error!("{msg}: {err}");
                std::process::exit(1);
            },
        }
    }
}
