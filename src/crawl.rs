// src/crawl.rs
//! Builds a [`LinkGraph`] from a directory of HTML pages.

use crate::graph::LinkGraph;
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

const PAGE_EXT: &str = ".html";

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Parses every `*.html` file directly inside `directory`.
///
/// Each page links to the `href` targets of its anchors, minus itself and
/// minus anything that is not another page of the corpus.
///
/// # Errors
/// Returns error if the directory cannot be listed or a page cannot be read.
pub fn crawl(directory: &Path) -> Result<LinkGraph> {
    if !directory.is_dir() {
        bail!("{} is not a directory", directory.display());
    }

    let (paths, error_count) = list_pages(directory);
    if error_count > 0 {
        log::warn!("Encountered {error_count} errors while listing {}", directory.display());
    }

    let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for path in paths {
        let Some(name) = page_name(&path) else {
            continue;
        };
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut links = extract_links(&contents);
        links.remove(&name);
        pages.insert(name, links);
    }

    log::debug!("crawled {} pages from {}", pages.len(), directory.display());
    Ok(LinkGraph::new(pages))
}

/// Distinct `href` targets of the anchor tags in `html`.
#[must_use]
pub fn extract_links(html: &str) -> BTreeSet<String> {
    HREF_RE
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn list_pages(directory: &Path) -> (Vec<PathBuf>, usize) {
    let walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && is_page(entry.path()) {
                    paths.push(entry.into_path());
                }
            }
            Err(_) => errors += 1,
        }
    }
    (paths, errors)
}

fn is_page(path: &Path) -> bool {
    path.file_name()
        .and_then(|f| f.to_str())
        .is_some_and(|f| f.ends_with(PAGE_EXT))
}

fn page_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|f| f.to_str())
        .map(str::to_string)
}
