use askama::Template;
use service::fortune::domain::Fortune;

/// HTML view for `/fortunes`. Messages are HTML-escaped by askama.
#[derive(Template)]
#[template(path = "fortunes.html")]
pub struct FortunesTemplate<'a> {
    pub fortunes: &'a [Fortune],
}
