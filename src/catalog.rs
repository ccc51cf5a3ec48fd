use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use log::info;

use crate::{
    config::CatalogConfig,
    loader::load_articles,
    renderer::{generate_renderer, render_entry},
};

fn write_blocks<W: Write>(
    writer: &mut W,
    headers: &[String],
    footers: &[String],
    entries: &[String],
) -> std::io::Result<()> {
    for header in headers {
        write!(writer, "{header}\n\n")?;
    }
    for entry in entries {
        writeln!(writer, "{entry}")?;
    }
    for footer in footers {
        write!(writer, "{footer}\n\n")?;
    }

    Ok(())
}

/// Overwrites `output` with the header block, one line per entry, then the footer block.
pub(crate) fn write_catalog(
    output: &Path,
    headers: &[String],
    footers: &[String],
    entries: &[String],
) -> anyhow::Result<()> {
    let fd = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(output)
        .with_context(|| format!("while opening {output:?}"))?;
    let mut writer = BufWriter::new(fd);

    write_blocks(&mut writer, headers, footers, entries)
        .and_then(|_| writer.flush())
        .with_context(|| format!("while writing {output:?}"))
}

pub(crate) fn generate(config: &CatalogConfig) -> anyhow::Result<()> {
    let articles = load_articles(&config.article_dir, &config.link_dir, &config.title_prefix)?;

    let handlebars = generate_renderer(&config.entry_template)?;
    let entries = articles
        .iter()
        .map(|article| render_entry(&handlebars, &config.base_url, article))
        .collect::<anyhow::Result<Vec<_>>>()?;

    write_catalog(&config.output, &config.headers, &config.footers, &entries)?;
    info!("Wrote {} entries to {:?}", entries.len(), config.output);

    Ok(())
}
