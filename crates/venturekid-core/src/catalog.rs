//! Course catalog: ordered sections -> modules -> lessons.
//!
//! Static/config data, not learner-owned. Sources are pluggable; the
//! resolution policy is a single ordered list (configured file first,
//! built-in default second).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::storage::Config;

/// Closed set of lesson content kinds. Unknown tags from external data
/// deserialize to `Other` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Video,
    Reading,
    Quiz,
    Activity,
    LiveClass,
    #[default]
    #[serde(other)]
    Other,
}

impl ContentKind {
    /// Canonical display order for breakdowns.
    pub const ALL: [ContentKind; 6] = [
        ContentKind::Video,
        ContentKind::Reading,
        ContentKind::Quiz,
        ContentKind::Activity,
        ContentKind::LiveClass,
        ContentKind::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Video => "Video",
            ContentKind::Reading => "Reading",
            ContentKind::Quiz => "Quiz",
            ContentKind::Activity => "Activity",
            ContentKind::LiveClass => "Live class",
            ContentKind::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub kind: ContentKind,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub modules: Vec<CourseModule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseCatalog {
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl CourseCatalog {
    /// Parse from TOML and normalize ordering.
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let mut catalog: CourseCatalog =
            toml::from_str(text).map_err(|e| CatalogError::ParseFailed(e.to_string()))?;
        catalog.normalize();
        Ok(catalog)
    }

    /// Stable-sort sections, modules, and lessons by their `order`
    /// field. Missing orders default to 0, so untouched data keeps its
    /// stored order.
    pub fn normalize(&mut self) {
        self.sections.sort_by_key(|s| s.order);
        for section in &mut self.sections {
            section.modules.sort_by_key(|m| m.order);
            for module in &mut section.modules {
                module.lessons.sort_by_key(|l| l.order);
            }
        }
    }

    /// Lessons in traversal order: section -> module -> lesson.
    pub fn lessons(&self) -> impl Iterator<Item = (&Section, &CourseModule, &Lesson)> {
        self.sections.iter().flat_map(|section| {
            section.modules.iter().flat_map(move |module| {
                module
                    .lessons
                    .iter()
                    .map(move |lesson| (section, module, lesson))
            })
        })
    }

    pub fn lesson_count(&self) -> usize {
        self.lessons().count()
    }

    pub fn contains_lesson(&self, lesson_id: &str) -> bool {
        self.lessons().any(|(_, _, l)| l.id == lesson_id)
    }

    /// The catalog that ships with the product.
    pub fn builtin() -> Self {
        fn lesson(id: &str, title: &str, kind: ContentKind, order: u32) -> Lesson {
            Lesson {
                id: id.to_string(),
                title: title.to_string(),
                kind,
                order,
            }
        }

        Self {
            sections: vec![
                Section {
                    id: "spark".into(),
                    title: "Spark: Discover Ideas".into(),
                    order: 1,
                    modules: vec![
                        CourseModule {
                            id: "spark-finding-ideas".into(),
                            title: "Finding Ideas".into(),
                            order: 1,
                            lessons: vec![
                                lesson(
                                    "spark-what-is-an-entrepreneur",
                                    "What is an entrepreneur?",
                                    ContentKind::Video,
                                    1,
                                ),
                                lesson(
                                    "spark-spot-a-problem",
                                    "Spot a problem worth solving",
                                    ContentKind::Activity,
                                    2,
                                ),
                                lesson(
                                    "spark-idea-journal",
                                    "Start your idea journal",
                                    ContentKind::Reading,
                                    3,
                                ),
                            ],
                        },
                        CourseModule {
                            id: "spark-founder-thinking".into(),
                            title: "Thinking Like a Founder".into(),
                            order: 2,
                            lessons: vec![
                                lesson(
                                    "spark-ask-great-questions",
                                    "Ask great questions",
                                    ContentKind::Video,
                                    1,
                                ),
                                lesson(
                                    "spark-idea-basics-quiz",
                                    "Quiz: idea basics",
                                    ContentKind::Quiz,
                                    2,
                                ),
                            ],
                        },
                    ],
                },
                Section {
                    id: "build".into(),
                    title: "Build: Your First Venture".into(),
                    order: 2,
                    modules: vec![CourseModule {
                        id: "build-first-product".into(),
                        title: "Make Your First Product".into(),
                        order: 1,
                        lessons: vec![
                            lesson(
                                "build-prototype",
                                "Prototype with what you have",
                                ContentKind::Activity,
                                1,
                            ),
                            lesson(
                                "build-pricing",
                                "Pricing with pocket money",
                                ContentKind::Reading,
                                2,
                            ),
                            lesson(
                                "build-show-and-tell",
                                "Live workshop: show and tell",
                                ContentKind::LiveClass,
                                3,
                            ),
                        ],
                    }],
                },
                Section {
                    id: "launch".into(),
                    title: "Launch: Sell It".into(),
                    order: 3,
                    modules: vec![CourseModule {
                        id: "launch-sell-it".into(),
                        title: "Sell It".into(),
                        order: 1,
                        lessons: vec![
                            lesson(
                                "launch-first-pitch",
                                "Your first pitch",
                                ContentKind::Video,
                                1,
                            ),
                            lesson(
                                "launch-first-sale",
                                "Make your first sale",
                                ContentKind::Activity,
                                2,
                            ),
                            lesson(
                                "launch-basics-quiz",
                                "Quiz: launch basics",
                                ContentKind::Quiz,
                                3,
                            ),
                        ],
                    }],
                },
            ],
        }
    }
}

/// A pluggable origin for the catalog (static config or remote fetch;
/// the progress tracker does not care which).
pub trait CatalogSource {
    fn name(&self) -> &str;
    fn load(&self) -> Result<CourseCatalog, CatalogError>;
}

/// TOML file on disk.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalogSource {
    fn name(&self) -> &str {
        "file"
    }

    fn load(&self) -> Result<CourseCatalog, CatalogError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| CatalogError::ReadFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        let catalog = CourseCatalog::from_toml(&text)?;
        if catalog.lesson_count() == 0 {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }
}

/// The catalog compiled into the binary.
pub struct BuiltinCatalogSource;

impl CatalogSource for BuiltinCatalogSource {
    fn name(&self) -> &str {
        "builtin"
    }

    fn load(&self) -> Result<CourseCatalog, CatalogError> {
        Ok(CourseCatalog::builtin())
    }
}

/// Resolve the catalog through the ordered source list: the configured
/// file path if any, then the built-in default. The first source that
/// loads wins; earlier failures fall through by design of the policy.
pub fn resolve(config: &Config) -> CourseCatalog {
    let mut sources: Vec<Box<dyn CatalogSource>> = Vec::new();
    if let Some(path) = &config.catalog.path {
        sources.push(Box::new(FileCatalogSource::new(path)));
    }
    sources.push(Box::new(BuiltinCatalogSource));

    for source in &sources {
        if let Ok(catalog) = source.load() {
            return catalog;
        }
    }
    CourseCatalog::builtin()
}
