//! Static catalog of literary works shown in the portfolio.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const WORDS_PER_MINUTE: f64 = 200.0;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WorkKind {
    Poetry,
    ShortStory,
    Novel,
    Article,
}

impl WorkKind {
    pub const ALL: [WorkKind; 4] = [
        WorkKind::Poetry,
        WorkKind::ShortStory,
        WorkKind::Novel,
        WorkKind::Article,
    ];

    /// Heading used in the portfolio statistics.
    pub fn plural_label(self) -> &'static str {
        match self {
            WorkKind::Poetry => "Poems",
            WorkKind::ShortStory => "Stories",
            WorkKind::Novel => "Novels",
            WorkKind::Article => "Articles",
        }
    }
}

impl std::fmt::Display for WorkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            WorkKind::Poetry => "Poetry",
            WorkKind::ShortStory => "Short Story",
            WorkKind::Novel => "Novel",
            WorkKind::Article => "Article",
        };
        write!(f, "{}", label)
    }
}

/// One entry of the literary catalog.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LiteraryWork {
    pub id: String,
    pub title: String,
    pub kind: WorkKind,
    pub style: String,
    pub description: String,
    pub excerpt: String,
    #[serde(default)]
    pub full_content: Option<String>,
    #[serde(default)]
    pub word_count: Option<u32>,
    /// Authored reading time in minutes.
    #[serde(default)]
    pub reading_time: Option<u32>,
    /// Paragraphs carry pasted indentation that must be stripped before display.
    #[serde(default)]
    pub needs_paragraph_cleanup: bool,
}

impl LiteraryWork {
    pub fn has_full_content(&self) -> bool {
        self.full_content
            .as_deref()
            .is_some_and(|content| !content.trim().is_empty())
    }

    /// Authored reading time, or an estimate from the word count.
    pub fn reading_minutes(&self) -> Option<u32> {
        if let Some(minutes) = self.reading_time {
            return Some(minutes);
        }
        let words = self.word_count.map(|count| count as usize).or_else(|| {
            self.full_content
                .as_deref()
                .map(|content| content.split_whitespace().count())
        })?;
        if words == 0 {
            return None;
        }
        Some((words as f64 / WORDS_PER_MINUTE).ceil().max(1.0) as u32)
    }

    pub fn reading_time_label(&self) -> Option<String> {
        self.reading_minutes()
            .map(|minutes| format!("{minutes} min read"))
    }
}

static LITERARY_WORKS: Lazy<Vec<LiteraryWork>> = Lazy::new(build_catalog);

/// The full catalog in display order.
pub fn literary_works() -> &'static [LiteraryWork] {
    &LITERARY_WORKS
}

pub fn find_work(id: &str) -> Option<&'static LiteraryWork> {
    literary_works().iter().find(|work| work.id == id)
}

/// Number of catalog works of each kind, in [`WorkKind::ALL`] order.
pub fn kind_counts() -> Vec<(WorkKind, usize)> {
    count_by_kind(literary_works())
}

fn count_by_kind(works: &[LiteraryWork]) -> Vec<(WorkKind, usize)> {
    WorkKind::ALL
        .iter()
        .map(|&kind| (kind, works.iter().filter(|work| work.kind == kind).count()))
        .collect()
}

fn build_catalog() -> Vec<LiteraryWork> {
    vec![
        LiteraryWork {
            id: "lantern-season".to_string(),
            title: "Lantern Season".to_string(),
            kind: WorkKind::Poetry,
            style: "Free verse".to_string(),
            description: "A sequence of short poems written over one autumn by the river."
                .to_string(),
            excerpt: "We hung the lanterns low enough\nfor the water to borrow them.".to_string(),
            full_content: Some(
                "We hung the lanterns low enough\nfor the water to borrow them.\n\n\
                 Every night the current returned\na little less of the light.\n\n\
                 By November we were reading\nby the memory of it."
                    .to_string(),
            ),
            word_count: Some(38),
            reading_time: Some(1),
            needs_paragraph_cleanup: false,
        },
        LiteraryWork {
            id: "the-cartographers-daughter".to_string(),
            title: "The Cartographer's Daughter".to_string(),
            kind: WorkKind::ShortStory,
            style: "Literary fiction".to_string(),
            description: "A girl inherits a map of a town that no longer exists.".to_string(),
            excerpt: "The map arrived folded into eighths, softer than cloth.".to_string(),
            full_content: Some(
                "\u{3000}\u{3000}The map arrived folded into eighths, softer than cloth. \
                 Her father had drawn every street in pencil first and ink second, and \
                 where the ink had never come the pencil had faded to a rumor.\n\n\
                 \u{3000}\u{3000}She spread it on the kitchen table and weighted the corners \
                 with whatever was nearest: a salt cellar, two oranges, the letter that \
                 had come with it.\n\n\
                 \u{3000}\u{3000}  The town was called Averne. No road sign had carried that \
                 name in forty years.\n\n\
                 \u{3000}\u{3000}She began, the way he always had, with the river."
                    .to_string(),
            ),
            word_count: None,
            reading_time: None,
            needs_paragraph_cleanup: true,
        },
        LiteraryWork {
            id: "salt-and-iron".to_string(),
            title: "Salt and Iron".to_string(),
            kind: WorkKind::Novel,
            style: "Historical fantasy".to_string(),
            description: "A novel in progress about a lighthouse keeper's guild.".to_string(),
            excerpt: "There were eleven lights on the coast and eleven keepers who hated \
                      one another."
                .to_string(),
            full_content: None,
            word_count: Some(86_000),
            reading_time: None,
            needs_paragraph_cleanup: false,
        },
        LiteraryWork {
            id: "on-writing-slowly".to_string(),
            title: "On Writing Slowly".to_string(),
            kind: WorkKind::Article,
            style: "Essay".to_string(),
            description: "Notes on drafting by hand and why the second draft matters more."
                .to_string(),
            excerpt: "A sentence written slowly has time to change its mind.".to_string(),
            full_content: Some(
                "A sentence written slowly has time to change its mind.\n\n\
                 Most of my drafts begin in a notebook. The friction of the pen is the \
                 point: it makes every word cost something, and that cost is where the \
                 editing starts.\n\n\
                 The second draft is where the piece learns what it is about. The first \
                 only proves that it exists."
                    .to_string(),
            ),
            word_count: Some(72),
            reading_time: None,
            needs_paragraph_cleanup: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<&str> = literary_works().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids.len(), literary_works().len());
    }

    #[test]
    fn find_work_by_id() {
        let work = find_work("salt-and-iron").expect("catalog entry");
        assert_eq!(work.kind, WorkKind::Novel);
        assert!(!work.has_full_content());
        assert!(find_work("missing").is_none());
    }

    #[test]
    fn kind_counts_cover_every_kind() {
        let counts = kind_counts();
        assert_eq!(
            counts,
            vec![
                (WorkKind::Poetry, 1),
                (WorkKind::ShortStory, 1),
                (WorkKind::Novel, 1),
                (WorkKind::Article, 1),
            ]
        );
        let total: usize = counts.iter().map(|(_, count)| count).sum();
        assert_eq!(total, literary_works().len());
    }

    #[test]
    fn missing_kinds_count_zero() {
        let poems = vec![
            find_work("lantern-season").expect("catalog entry").clone(),
            find_work("lantern-season").expect("catalog entry").clone(),
        ];
        let counts = count_by_kind(&poems);
        assert_eq!(counts[0], (WorkKind::Poetry, 2));
        assert!(counts[1..].iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn reading_time_prefers_authored_label() {
        let work = find_work("lantern-season").expect("catalog entry");
        assert_eq!(work.reading_time_label().as_deref(), Some("1 min read"));
    }

    #[test]
    fn authored_and_estimated_minutes_share_one_label() {
        let mut work = find_work("on-writing-slowly").expect("catalog entry").clone();
        assert_eq!(work.reading_minutes(), Some(1));
        work.reading_time = Some(12);
        assert_eq!(work.reading_minutes(), Some(12));
        assert_eq!(work.reading_time_label().as_deref(), Some("12 min read"));
    }

    #[test]
    fn reading_time_estimated_from_word_count() {
        let work = find_work("salt-and-iron").expect("catalog entry");
        assert_eq!(work.reading_time_label().as_deref(), Some("430 min read"));
    }

    #[test]
    fn reading_time_estimated_from_content() {
        let work = find_work("the-cartographers-daughter").expect("catalog entry");
        assert_eq!(work.reading_time_label().as_deref(), Some("1 min read"));
    }
}
