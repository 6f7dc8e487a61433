// src/presentation/http/templates.rs
use serde::Serialize;
use std::sync::LazyLock;
use tera::{Context, Tera};
use thiserror::Error;

macro_rules! embedded {
    ($($name:literal),+ $(,)?) => {
        [$(($name, include_str!(concat!("../../../templates/", $name)))),+]
    };
}

const TEMPLATES: [(&str, &str); 15] = embedded![
    "base.html",
    "macros.html",
    "home.html",
    "article_detail.html",
    "search_results.html",
    "about.html",
    "contact.html",
    "vlog_list.html",
    "vlog_detail.html",
    "author_list.html",
    "author_detail.html",
    "category_list.html",
    "category_detail.html",
    "not_found.html",
    "error.html",
];

static ENGINE: LazyLock<Result<Tera, tera::Error>> = LazyLock::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.to_vec())?;
    Ok(tera)
});

#[derive(Debug, Error)]
#[error("template error: {0}")]
pub struct TemplateError(String);

fn engine() -> Result<&'static Tera, TemplateError> {
    ENGINE
        .as_ref()
        .map_err(|err| TemplateError(format!("{err:?}")))
}

/// Parse every embedded template. Called once at startup.
pub fn verify() -> Result<(), TemplateError> {
    engine().map(|_| ())
}

/// Top-level fields of `value` become template variables.
pub fn context_of<T: Serialize>(value: &T) -> Result<Context, TemplateError> {
    Context::from_serialize(value).map_err(|err| TemplateError(format!("{err:?}")))
}

pub fn render(name: &str, context: &Context) -> Result<String, TemplateError> {
    engine()?
        .render(name, context)
        .map_err(|err| TemplateError(format!("{name}: {err:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_templates_parse() {
        verify().unwrap();
    }

    #[test]
    fn error_page_renders_message() {
        let mut context = Context::new();
        context.insert("status", &409);
        context.insert("message", "slug already in use");
        context.insert("flash", &Option::<()>::None);
        let html = render("error.html", &context).unwrap();
        assert!(html.contains("slug already in use"));
    }
}
