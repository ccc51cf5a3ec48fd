use anyhow::bail;
use clap::{command, Arg};
use log::debug;
use std::path::{Path, PathBuf};

mod article;
mod catalog;
mod config;
mod loader;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("article_dir")
                .help("Directory path of articles [default: articles]")
                .value_parser(clap::value_parser!(PathBuf)),
            Arg::new("output")
                .help("Path of the catalog. Existing contents will be overwritten. [default: README.md]")
                .value_parser(clap::value_parser!(PathBuf)),
            Arg::new("config")
                .help("JSON file overriding headers, footers and other settings [default: catalog.json, if it exists]")
                .short('c')
                .long("config")
                .value_parser(clap::value_parser!(PathBuf)),
            Arg::new("base_url")
                .help("Root URL of the blog. Falls back to BLOG_URL, then to the config file")
                .long("base-url"),
        ])
        .get_matches();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => config::load_config(path, true)?,
        None => config::load_config(Path::new(config::DEFAULT_CONFIG_FILE), false)?,
    };

    if let Some(article_dir) = matches.get_one::<PathBuf>("article_dir") {
        config.article_dir = article_dir.to_owned();
    }
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output = output.to_owned();
    }
    if let Some(base_url) = matches
        .get_one::<String>("base_url")
        .cloned()
        .or_else(|| std::env::var("BLOG_URL").ok())
    {
        config.base_url = base_url;
    }

    if !config.article_dir.is_dir() {
        bail!("article_dir must be a directory.");
    }
    if config.output.is_dir() {
        bail!("output must not be a directory.");
    }
    debug!("{config:?}");

    catalog::generate(&config)
}
