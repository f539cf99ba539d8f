use anyhow::{Context as _, Result};
use minijinja::Environment;
use serde_json::json;

use crate::emit::Emitter;

/// Document head template. List-valued fields arrive pre-rendered as
/// line blocks (see `join_items`), so the template needs no control tags
/// and no whitespace trimming markers. The template deliberately does not
/// end in a newline; the document assembler owns line termination.
const PREAMBLE_TPL: &str = r#"# This file was inspired from https://github.com/google/fruit

#
# General config
#
branches:
  only:
  - {{ branch }}
dist: {{ dist }}
language: {{ language }}

# Enable caching
cache:
  timeout: {{ cache_timeout }}
  directories:
{{ cache_directories }}

# Enable docker support
services:
{{ services }}
sudo: required

#
# Configurations
#
jobs:
  include:"#;

/// The fixed head of the generated document: branch filter, dist/language
/// declarations, cache block, service flags, job-list header.
#[derive(Debug, Clone)]
pub struct Preamble {
    pub branch: String,
    pub dist: String,
    pub language: String,
    pub cache_timeout: u32,
    pub cache_directories: Vec<String>,
    pub services: Vec<String>,
}

impl Default for Preamble {
    fn default() -> Self {
        Self {
            branch: "master".to_string(),
            dist: "trusty".to_string(),
            language: "cpp".to_string(),
            cache_timeout: 600,
            cache_directories: vec!["build".to_string(), "travis/mtime_cache".to_string()],
            services: vec!["docker".to_string()],
        }
    }
}

impl Preamble {
    pub fn render(&self) -> Result<String> {
        let ctx_json = json!({
            "branch": self.branch,
            "dist": self.dist,
            "language": self.language,
            "cache_timeout": self.cache_timeout,
            "cache_directories": join_items(&self.cache_directories, 1),
            "services": join_items(&self.services, 0),
        });

        render_minijinja(PREAMBLE_TPL, &ctx_json).context("preamble: render failed")
    }
}

/// Renders `items` as `- item` lines at the given depth, without the
/// trailing newline (the template supplies it after the placeholder).
fn join_items(items: &[String], depth: usize) -> String {
    let em = Emitter::new();
    let mut out = String::new();
    for it in items {
        em.item(&mut out, depth, it);
    }
    out.pop();
    out
}

fn render_minijinja(source: &str, ctx_json: &serde_json::Value) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("preamble", source)?;
    let tpl = env.get_template("preamble")?;
    let v = minijinja::value::Value::from_serialize(ctx_json);
    Ok(tpl.render(v)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preamble_renders_the_travis_head() {
        let head = Preamble::default().render().unwrap();
        let expected = r#"# This file was inspired from https://github.com/google/fruit

#
# General config
#
branches:
  only:
  - master
dist: trusty
language: cpp

# Enable caching
cache:
  timeout: 600
  directories:
  - build
  - travis/mtime_cache

# Enable docker support
services:
- docker
sudo: required

#
# Configurations
#
jobs:
  include:"#;
        assert_eq!(head, expected);
    }

    #[test]
    fn custom_fields_land_in_the_output() {
        let p = Preamble {
            branch: "develop".to_string(),
            cache_timeout: 300,
            ..Preamble::default()
        };
        let head = p.render().unwrap();
        assert!(head.contains("  - develop\n"));
        assert!(head.contains("  timeout: 300\n"));
        assert!(!head.contains("master"));
    }

    #[test]
    fn join_items_indents_without_trailing_newline() {
        let items = vec!["build".to_string(), "travis/mtime_cache".to_string()];
        assert_eq!(join_items(&items, 1), "  - build\n  - travis/mtime_cache");
        assert_eq!(join_items(&["docker".to_string()], 0), "- docker");
    }
}
