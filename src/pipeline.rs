//! # Analytics Pipeline
//!
//! fetch → clean → score → {lexical, aggregate, objectivity}

use crate::analysis::{
    preview, IntensityAggregator, IntensitySummary, LexicalAnalyzer, LexicalSummary,
    ObjectivityClassifier, ObjectivityRecord, ObjectivitySummary, PreviewRow,
};
use crate::data::{Cleaner, CleaningStats, RawRecord, RecordSource};
use crate::error::{Error, Result};
use crate::resources::Resources;
use crate::sentiment::{score_records, LexiconScorer, PolarityScorer, ScoredRecord};
use crate::utils::config::AnalysisSettings;
use serde::Serialize;
use tracing::{info, warn};

/// Everything one pipeline run produces
///
/// Holds no wall-clock values; two runs over the same input compare equal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Name of the scorer used
    pub scorer: String,
    pub cleaning: CleaningStats,
    /// Scored and labelled records in source order
    pub records: Vec<ObjectivityRecord>,
    pub sentiment: IntensitySummary,
    pub lexical: LexicalSummary,
    pub objectivity: ObjectivitySummary,
    pub preview: Vec<PreviewRow>,
}

impl AnalysisReport {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The composed analytics stages
pub struct Pipeline {
    settings: AnalysisSettings,
    cleaner: Cleaner,
    scorer: Box<dyn PolarityScorer>,
    lexical: LexicalAnalyzer,
    aggregator: IntensityAggregator,
    objectivity: ObjectivityClassifier,
}

impl Pipeline {
    /// Build a pipeline over prepared resources, scoring with the lexicon
    pub fn new(settings: AnalysisSettings, resources: &Resources) -> Result<Self> {
        if !resources.stopwords.contains_key(&settings.default_language) {
            return Err(Error::resource(
                format!("stopwords/{}", settings.default_language),
                "default language not loaded",
            ));
        }

        Ok(Self {
            cleaner: Cleaner::new(settings.default_language),
            scorer: Box::new(LexiconScorer::new(resources.lexicon.clone())),
            lexical: LexicalAnalyzer::from_resources(resources),
            aggregator: IntensityAggregator::new(),
            objectivity: ObjectivityClassifier::new(settings.objectivity_threshold)?,
            settings,
        })
    }

    /// Swap in another scorer
    pub fn with_scorer(mut self, scorer: impl PolarityScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Fetch from `source` once and analyze the batch
    ///
    /// Source failures are returned unchanged.
    pub fn run(&self, source: &mut dyn RecordSource) -> Result<AnalysisReport> {
        info!(source = %source.describe(), "fetching records");
        let raw = source.fetch()?;
        self.analyze(raw)
    }

    /// Analyze an already fetched batch
    pub fn analyze(&self, raw: Vec<RawRecord>) -> Result<AnalysisReport> {
        let (records, cleaning) = self.cleaner.clean(raw);
        if records.is_empty() {
            warn!(read = cleaning.read, "no records left after cleaning");
        }

        let scored = score_records(self.scorer.as_ref(), records)?;

        let (lexical, (sentiment, (labelled, objectivity))) = if self.settings.parallel {
            rayon::join(
                || self.lexical.analyze(&scored, self.settings.top_k),
                || {
                    rayon::join(
                        || self.aggregator.aggregate(&scored),
                        || self.objectivity.classify_all(&scored),
                    )
                },
            )
        } else {
            (
                self.lexical.analyze(&scored, self.settings.top_k),
                (
                    self.aggregator.aggregate(&scored),
                    self.objectivity.classify_all(&scored),
                ),
            )
        };
        let lexical = lexical?;

        info!(
            kept = cleaning.kept,
            dropped = cleaning.dropped(),
            distinct_words = lexical.frequencies.len(),
            "analysis complete"
        );

        Ok(AnalysisReport {
            scorer: self.scorer.name().to_string(),
            cleaning,
            preview: preview(&labelled, self.settings.preview_rows),
            records: labelled,
            sentiment,
            lexical,
            objectivity,
        })
    }

    /// Score without the downstream stages
    pub fn score(&self, raw: Vec<RawRecord>) -> Result<Vec<ScoredRecord>> {
        let (records, _) = self.cleaner.clean(raw);
        score_records(self.scorer.as_ref(), records)
    }
}
