//! Simple CLI that reads HTML from stdin and outputs a JSON link summary.
//!
//! Usage: `links_stdin [base-url] < page.html`

use markup_query::{ContentType, DocumentQuery};
use serde::Serialize;
use std::collections::HashMap;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    links: Vec<String>,
    links_with_text: HashMap<String, String>,
    images: Vec<String>,
    article_text: Vec<String>,
    outbound_links: Vec<String>,
    internal_links: Option<Vec<String>>,
}

fn main() {
    // Read HTML from stdin
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let base_url = std::env::args().nth(1);

    let doc = match DocumentQuery::new(&html, ContentType::Html, base_url.as_deref()) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let output = Output {
        links: doc.links(),
        links_with_text: doc.links_with_text(),
        images: doc.images(),
        article_text: doc.article_text(),
        outbound_links: doc.outbound_links(),
        internal_links: doc.internal_links().ok(),
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
