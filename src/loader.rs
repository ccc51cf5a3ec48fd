use std::{borrow::Borrow, cmp::Ordering, path::Path};

use anyhow::Context;
use chrono::NaiveDate;
use log::{debug, info, warn};
use regex::Regex;

use crate::article::Article;

// e.g. 2014_06_17-use_cron.md, 2014_06_17-use_cron.rst
const ARTICLE_FILENAME_PATTERN: &str = r"^(\d{4}_\d{2}_\d{2})-.+\..+";

const DESCRIPTION_TRIM_CHARS: &[char] = &['\n', '，', '。', '：', ',', '.', ':'];

/// newest first. file names start with the date, so comparing names is enough.
pub(crate) fn sort_article<T: Borrow<Article>>(a: &T, b: &T) -> Ordering {
    b.borrow().filename.cmp(&a.borrow().filename)
}

fn read_title(content: &str, filename: &str, title_prefix: &str) -> String {
    let title = content.lines().next().unwrap_or("").trim();
    if filename.rsplit('.').next() == Some("md") {
        format!(
            "{}{}",
            title_prefix,
            title.trim_start_matches(|c: char| c == '#' || c == ' ')
        )
    } else {
        title.to_string()
    }
}

// first line is the title, second one is blank. the next three lines make the teaser.
fn read_description(content: &str) -> String {
    let desc: String = content.lines().skip(2).take(3).collect();
    format!("{}...", desc.trim_matches(DESCRIPTION_TRIM_CHARS))
}

fn load_article(
    dir: &Path,
    filename: &str,
    date: &str,
    link_dir: &str,
    title_prefix: &str,
) -> anyhow::Result<Article> {
    let date = NaiveDate::parse_from_str(date, "%Y_%m_%d")
        .with_context(|| format!("Invalid date in file name: {filename}"))?;

    let file_path = dir.join(filename);
    let content = std::fs::read_to_string(&file_path)
        .with_context(|| format!("while reading {file_path:?}"))?;

    Ok(Article {
        title: read_title(&content, filename, title_prefix),
        date,
        filename: filename.to_string(),
        path: link_dir.to_string(),
        description: read_description(&content),
    })
}

/// Reads every dated article directly under `dir`.
///
/// Returned articles are already in catalog order (newest first).
pub(crate) fn load_articles(
    dir: &Path,
    link_dir: &str,
    title_prefix: &str,
) -> anyhow::Result<Vec<Article>> {
    let filename_pattern = Regex::new(ARTICLE_FILENAME_PATTERN)?;
    let mut articles = vec![];

    for entry in
        std::fs::read_dir(dir).with_context(|| format!("failed to read directory {dir:?}"))?
    {
        let entry = entry.with_context(|| format!("while listing {dir:?}"))?;
        // follows symlinks
        let meta = std::fs::metadata(entry.path())
            .with_context(|| format!("while inspecting {:?}", entry.path()))?;
        if !meta.is_file() {
            debug!("{:?} is not a file. skipping...", entry.path());
            continue;
        }

        let Some(filename) = entry.file_name().to_str().map(str::to_string) else {
            warn!("File name of {:?} is not valid UTF-8. skipping...", entry.path());
            continue;
        };
        let Some(caps) = filename_pattern.captures(&filename) else {
            debug!("{filename} does not look like an article. skipping...");
            continue;
        };

        let article = load_article(dir, &filename, &caps[1], link_dir, title_prefix)
            .with_context(|| format!("while loading {filename}"))?;
        articles.push(article);
    }

    articles.sort_by(sort_article);
    info!("Loaded {} articles from {dir:?}", articles.len());

    Ok(articles)
}
