use anyhow::Context;
use handlebars::Handlebars;
use serde::Serialize;

use crate::article::Article;

pub(crate) const DEFAULT_ENTRY_TEMPLATE: &str = "- {{date}} - [{{title}}]({{url}})";

#[derive(Serialize, Debug)]
struct EntryData<'a> {
    date: String,
    title: &'a str,
    url: String,
    base_url: &'a str,
    path: &'a str,
    filename: &'a str,
    description: &'a str,
}

pub(crate) fn article_url(base_url: &str, article: &Article) -> String {
    format!(
        "{}/{}/{}.html",
        base_url.trim_end_matches('/'),
        article.path,
        article.filename
    )
}

/// Titles and links go into markdown, so nothing is HTML-escaped.
pub(super) fn generate_renderer(entry_template: &str) -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);
    handlebars
        .register_template_string("entry", entry_template)
        .context("entry template")?;

    Ok(handlebars)
}

pub(super) fn render_entry(
    handlebars: &Handlebars<'_>,
    base_url: &str,
    article: &Article,
) -> anyhow::Result<String> {
    let data = EntryData {
        date: article.date_str(),
        title: &article.title,
        url: article_url(base_url, article),
        base_url: base_url.trim_end_matches('/'),
        path: &article.path,
        filename: &article.filename,
        description: &article.description,
    };
    handlebars
        .render("entry", &data)
        .with_context(|| format!("while rendering entry for {:?}", article.filename))
}
