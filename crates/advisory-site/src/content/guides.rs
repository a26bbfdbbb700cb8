use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_AUTHOR: &str = "Patrick D.";
pub const WORDS_PER_MINUTE: usize = 200;

const EXTENSIONS: [&str; 2] = ["mdx", "md"];

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("unable to read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid front matter in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrontMatter {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    featured_image: Option<String>,
}

/// Listing metadata for a guide; body content is omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideMeta {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub author: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub reading_time: String,
}

impl GuideMeta {
    fn sort_key(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guide {
    #[serde(flatten)]
    pub meta: GuideMeta,
    pub content: String,
}

/// Directory of front-matter documents, read on demand.
#[derive(Debug, Clone)]
pub struct GuideLibrary {
    root: PathBuf,
}

impl GuideLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File stems of every guide; an absent directory has none.
    pub fn slugs(&self) -> Result<Vec<String>, ContentError> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root).map_err(|source| ContentError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut slugs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ContentError::Io {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            let supported = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| EXTENSIONS.contains(&ext));
            if !supported {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                slugs.push(stem.to_string());
            }
        }
        slugs.sort();
        slugs.dedup();
        Ok(slugs)
    }

    pub fn post_by_slug(&self, slug: &str) -> Result<Option<Guide>, ContentError> {
        let slug = slug.trim_end_matches(".mdx").trim_end_matches(".md");
        if slug.is_empty() || slug.contains(['/', '\\']) || slug.contains("..") {
            return Ok(None);
        }

        let Some(path) = EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{slug}.{ext}")))
            .find(|path| path.is_file())
        else {
            return Ok(None);
        };

        let raw = fs::read_to_string(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;
        let (front_matter, content) = split_front_matter(&raw, &path)?;
        Ok(Some(build_guide(slug, front_matter, content)))
    }

    /// Metadata for every readable guide, newest first. Unparseable files are skipped.
    pub fn all_posts(&self) -> Result<Vec<GuideMeta>, ContentError> {
        let mut posts = Vec::new();
        for slug in self.slugs()? {
            match self.post_by_slug(&slug) {
                Ok(Some(guide)) => posts.push(guide.meta),
                Ok(None) => {}
                Err(err) => warn!(%slug, %err, "skipping unreadable guide"),
            }
        }
        posts.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        Ok(posts)
    }

    pub fn posts_by_category(&self, category: &str) -> Result<Vec<GuideMeta>, ContentError> {
        Ok(self
            .all_posts()?
            .into_iter()
            .filter(|post| contains_ignore_case(&post.categories, category))
            .collect())
    }

    pub fn posts_by_tag(&self, tag: &str) -> Result<Vec<GuideMeta>, ContentError> {
        Ok(self
            .all_posts()?
            .into_iter()
            .filter(|post| contains_ignore_case(&post.tags, tag))
            .collect())
    }

    pub fn all_categories(&self) -> Result<Vec<String>, ContentError> {
        let mut categories: Vec<String> = self
            .all_posts()?
            .into_iter()
            .flat_map(|post| post.categories)
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    pub fn all_tags(&self) -> Result<Vec<String>, ContentError> {
        let mut tags: Vec<String> = self
            .all_posts()?
            .into_iter()
            .flat_map(|post| post.tags)
            .collect();
        tags.sort();
        tags.dedup();
        Ok(tags)
    }
}

fn split_front_matter<'a>(
    raw: &'a str,
    path: &Path,
) -> Result<(FrontMatter, &'a str), ContentError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let Some(rest) = raw
        .strip_prefix("---\r\n")
        .or_else(|| raw.strip_prefix("---\n"))
    else {
        return Ok((FrontMatter::default(), raw));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            let front_matter = if yaml.trim().is_empty() {
                FrontMatter::default()
            } else {
                serde_yaml::from_str(yaml).map_err(|source| ContentError::FrontMatter {
                    path: path.to_path_buf(),
                    source,
                })?
            };
            return Ok((front_matter, body));
        }
        offset += line.len();
    }

    Ok((FrontMatter::default(), raw))
}

fn build_guide(slug: &str, front_matter: FrontMatter, content: &str) -> Guide {
    Guide {
        meta: GuideMeta {
            slug: slug.to_string(),
            title: front_matter.title.unwrap_or_default(),
            date: front_matter.date.unwrap_or_default(),
            excerpt: front_matter.excerpt.unwrap_or_default(),
            author: front_matter
                .author
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            categories: front_matter.categories,
            tags: front_matter.tags,
            featured_image: front_matter.featured_image,
            reading_time: reading_time(content),
        },
        content: content.to_string(),
    }
}

pub(crate) fn reading_time(content: &str) -> String {
    let words = content.split_whitespace().count().max(1);
    format!("{} min read", words.div_ceil(WORDS_PER_MINUTE))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            raw.get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        })
}

fn contains_ignore_case(values: &[String], needle: &str) -> bool {
    values.iter().any(|value| value.eq_ignore_ascii_case(needle))
}
