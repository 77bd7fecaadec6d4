// src/graph.rs
//! The closed link graph: pages and the pages they link to.

use std::collections::{BTreeMap, BTreeSet};

/// Directed graph of pages to their out-links.
///
/// Ordered maps keep page iteration stable, which makes the solver
/// deterministic and seeded sampling reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkGraph {
    links: BTreeMap<String, BTreeSet<String>>,
    /// Reverse index: page -> pages linking to it.
    inbound: BTreeMap<String, BTreeSet<String>>,
}

impl LinkGraph {
    /// Builds a graph from a page -> out-links mapping.
    ///
    /// Targets that are not pages of the graph are dropped.
    #[must_use]
    pub fn new<I, P, L>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let raw: BTreeMap<String, BTreeSet<String>> = pages
            .into_iter()
            .map(|(page, targets)| {
                let targets = targets.into_iter().map(Into::into).collect();
                (page.into(), targets)
            })
            .collect();

        let mut links = BTreeMap::new();
        for (page, targets) in &raw {
            let kept: BTreeSet<String> = targets
                .iter()
                .filter(|t| {
                    let known = raw.contains_key(*t);
                    if !known {
                        log::debug!("dropping link {page} -> {t}: target is not a page");
                    }
                    known
                })
                .cloned()
                .collect();
            links.insert(page.clone(), kept);
        }

        let inbound = build_inbound(&links);
        Self { links, inbound }
    }

    /// Builds a graph from a page list and `(from, to)` edges.
    ///
    /// Edges whose endpoints are not both listed are dropped.
    #[must_use]
    pub fn from_edges<P, E, S>(pages: P, edges: E) -> Self
    where
        P: IntoIterator<Item = S>,
        E: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut map: BTreeMap<String, BTreeSet<String>> = pages
            .into_iter()
            .map(|p| (p.into(), BTreeSet::new()))
            .collect();
        for (from, to) in edges {
            let from: String = from.into();
            if let Some(targets) = map.get_mut(&from) {
                targets.insert(to.into());
            }
        }
        Self::new(map)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[must_use]
    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Pages in key order.
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.links.keys().map(String::as_str)
    }

    /// Out-links of `page`; `None` if the page is unknown.
    #[must_use]
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.links.get(page)
    }

    #[must_use]
    pub fn out_degree(&self, page: &str) -> usize {
        self.links.get(page).map_or(0, BTreeSet::len)
    }

    /// Pages linking to `page`.
    pub fn inbound(&self, page: &str) -> impl Iterator<Item = &str> + '_ {
        self.inbound
            .get(page)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Pages with no out-links.
    pub fn sinks(&self) -> impl Iterator<Item = &str> + '_ {
        self.links
            .iter()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(page, _)| page.as_str())
    }

    /// Total number of links.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }
}

fn build_inbound(
    links: &BTreeMap<String, BTreeSet<String>>,
) -> BTreeMap<String, BTreeSet<String>> {
    let mut inbound: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (source, targets) in links {
        for target in targets {
            inbound
                .entry(target.clone())
                .or_default()
                .insert(source.clone());
        }
    }
    inbound
}
