use serde::Serialize;

/// One pagination link as the client renders it, verbatim. The server is
/// the only party that computes page numbers; consumers never recompute.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub current_page: usize,
    pub per_page: usize,
    pub total: usize,
    pub last_page: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub links: Vec<PageLink>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// Slices one page out of the already-filtered item list and builds the
    /// link set. `path` is the listing endpoint; `filter_query` is the
    /// minimal query produced by the filter state (may be empty) and is
    /// carried into every page link so filters survive page changes.
    pub fn paginate(items: Vec<T>, page: usize, per_page: usize, path: &str, filter_query: &str) -> Page<T> {
        let total = items.len();
        let last_page = total.div_ceil(per_page).max(1);
        let current_page = page.clamp(1, last_page);

        let data: Vec<T> = items
            .into_iter()
            .skip((current_page - 1) * per_page)
            .take(per_page)
            .collect();

        let url_for = |n: usize| -> String {
            if filter_query.is_empty() {
                format!("{path}?page={n}")
            } else {
                format!("{path}?{filter_query}&page={n}")
            }
        };

        let mut links = Vec::with_capacity(last_page + 2);
        links.push(PageLink {
            url: (current_page > 1).then(|| url_for(current_page - 1)),
            label: "&laquo; Previous".to_string(),
            active: false,
        });
        for n in 1..=last_page {
            links.push(PageLink {
                url: Some(url_for(n)),
                label: n.to_string(),
                active: n == current_page,
            });
        }
        links.push(PageLink {
            url: (current_page < last_page).then(|| url_for(current_page + 1)),
            label: "Next &raquo;".to_string(),
            active: false,
        });

        Page {
            data,
            links,
            meta: PageMeta {
                current_page,
                per_page,
                total,
                last_page,
            },
        }
    }
}

/// `page` query parameter, defaulting to the first page.
pub fn page_from_query(query: &str) -> usize {
    crate::filter::query_pairs(query)
        .into_iter()
        .find(|(k, _)| k == "page")
        .and_then(|(_, v)| v.parse().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}
