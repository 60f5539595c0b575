// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTML list view for `GET /goals`
//!
//! The page comes from `index.html` in the data path when one is present,
//! otherwise from the template bundled with the binary. Handlebars escapes
//! every `{{...}}` value as HTML.

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;
use crate::store::Goal;

const INDEX_TEMPLATE: &str = "index.html";
const BUNDLED_INDEX: &str = include_str!("../../templates/index.html");

#[derive(Serialize)]
struct ListContext<'a> {
    goals: &'a [Goal],
}

/// Registered page templates
pub struct GoalsView {
    handlebars: Handlebars<'static>,
}

impl GoalsView {
    /// Loads `index.html` from `data_path`, falling back to the bundled page
    pub fn load(data_path: Option<&Path>) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        match data_path.map(|dir| dir.join(INDEX_TEMPLATE)) {
            Some(file) if file.is_file() => {
                tracing::info!("Loading list template from {}", file.display());
                handlebars.register_template_file(INDEX_TEMPLATE, &file)?;
            }
            Some(file) => {
                tracing::warn!(
                    "{} not found, using the bundled list template",
                    file.display()
                );
                handlebars.register_template_string(INDEX_TEMPLATE, BUNDLED_INDEX)?;
            }
            None => {
                handlebars.register_template_string(INDEX_TEMPLATE, BUNDLED_INDEX)?;
            }
        }

        Ok(Self { handlebars })
    }

    pub fn render_goals(&self, goals: &[Goal]) -> Result<String> {
        Ok(self
            .handlebars
            .render(INDEX_TEMPLATE, &ListContext { goals })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> GoalsView {
        GoalsView::load(None).unwrap()
    }

    #[test]
    fn test_render_empty_list() {
        let page = bundled().render_goals(&[]).unwrap();
        assert!(page.contains("<ul>"));
        assert!(!page.contains("<li>"));
        assert!(page.contains("name=\"goal_name\""));
    }

    #[test]
    fn test_render_goal_with_remove_form() {
        let page = bundled()
            .render_goals(&[Goal {
                id: 7,
                name: "Buy milk".to_string(),
            }])
            .unwrap();
        assert!(page.contains("<li>Buy milk"));
        assert!(page.contains("name=\"goal_id\" value=\"7\""));
    }

    #[test]
    fn test_render_escapes_names() {
        let page = bundled()
            .render_goals(&[Goal {
                id: 1,
                name: "<script>alert(1)</script> & co".to_string(),
            }])
            .unwrap();
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; co"));
    }

    #[test]
    fn test_index_from_data_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("index.html"),
            "<ol>{{#each goals}}<li data-id=\"{{id}}\">{{name}}</li>{{/each}}</ol>",
        )
        .unwrap();

        let view = GoalsView::load(Some(dir.path())).unwrap();
        let page = view
            .render_goals(&[Goal {
                id: 3,
                name: "Run".to_string(),
            }])
            .unwrap();
        assert_eq!(page, "<ol><li data-id=\"3\">Run</li></ol>");
    }

    #[test]
    fn test_missing_index_falls_back_to_bundled() {
        let dir = tempfile::tempdir().unwrap();
        let view = GoalsView::load(Some(dir.path())).unwrap();
        assert!(view.render_goals(&[]).unwrap().contains("<h1>Goals</h1>"));
    }

    #[test]
    fn test_broken_index_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "{{#each goals}}").unwrap();
        assert!(GoalsView::load(Some(dir.path())).is_err());
    }
}
