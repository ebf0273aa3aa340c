use crate::client::{Article, ArticleDetail, NewsPage};
use std::fmt::Write;

fn headline(article: &Article) -> String {
    let star = if article.featured { " *" } else { "" };
    format!(
        "[{}] {}{}\n    {} | {} | {} | {}",
        article.id,
        article.title,
        star,
        article.category,
        article.state,
        article.date.format("%Y-%m-%d"),
        article.source,
    )
}

pub fn articles(articles: &[Article]) -> String {
    if articles.is_empty() {
        return "No news found.".to_string();
    }

    articles
        .iter()
        .map(headline)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn page(page: &NewsPage) -> String {
    let mut out = articles(&page.news);
    let _ = write!(
        out,
        "\n\nPage {} of {}",
        page.current_page,
        page.total_pages.max(1)
    );
    out
}

pub fn detail(detail: &ArticleDetail) -> String {
    let article = &detail.article;
    let mut out = String::new();

    let _ = writeln!(out, "{}", article.title);
    let _ = writeln!(
        out,
        "{} | {} | {}",
        article.category,
        article.state,
        article.date.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(out, "By {} ({})", article.author, article.source);
    let _ = writeln!(out, "Image: {}", article.image_url);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", article.excerpt);
    let _ = writeln!(out);
    let _ = write!(out, "{}", article.content);

    if !detail.related_news.is_empty() {
        let _ = write!(out, "\n\nRelated:");
        for related in &detail.related_news {
            let _ = write!(out, "\n  [{}] {} ({})", related.id, related.title, related.category);
        }
    }

    out
}

pub fn names(values: &[String]) -> String {
    if values.is_empty() {
        "None yet.".to_string()
    } else {
        values.join("\n")
    }
}
