use stremiolab_shared::View;
use web_sys::{window, Document, Element};

use crate::{
    components::navbar::nav_label,
    config,
    i18n::{current::meta as t, fill_two},
};

fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

fn head() -> Option<Element> {
    let doc = document()?;
    doc.query_selector("head").ok().flatten()
}

fn upsert_head_element(selector: &str, tag_name: &str) -> Option<Element> {
    let doc = document()?;
    if let Some(found) = doc.query_selector(selector).ok().flatten() {
        return Some(found);
    }
    let head = head()?;
    let created = doc.create_element(tag_name).ok()?;
    let _ = head.append_child(&created);
    Some(created)
}

pub fn page_title(view: View) -> String {
    match view {
        View::Home => config::APP_NAME.to_string(),
        other => fill_two(t::TITLE_TEMPLATE, nav_label(other), config::APP_NAME),
    }
}

pub fn page_description(view: View) -> &'static str {
    match view {
        View::Home => t::DESC_HOME,
        View::Addons => t::DESC_ADDONS,
        View::Tutorials => t::DESC_TUTORIALS,
        View::About => t::DESC_ABOUT,
    }
}

/// Point `<title>` and the description meta tag at `view`.
pub fn apply_view_meta(view: View) {
    let Some(doc) = document() else {
        return;
    };
    doc.set_title(&page_title(view));

    if let Some(meta) = upsert_head_element(r#"meta[name="description"]"#, "meta") {
        let _ = meta.set_attribute("name", "description");
        let _ = meta.set_attribute("content", page_description(view));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_title_is_bare_site_name() {
        assert_eq!(page_title(View::Home), "StremioLabAR");
    }

    #[test]
    fn other_titles_lead_with_nav_label() {
        assert_eq!(page_title(View::Addons), "الإضافات | StremioLabAR");
        assert_eq!(page_title(View::About), "من نحن | StremioLabAR");
    }

    #[test]
    fn every_view_has_its_own_description() {
        let unique: std::collections::HashSet<_> =
            View::ALL.into_iter().map(page_description).collect();
        assert_eq!(unique.len(), View::ALL.len());
    }
}
