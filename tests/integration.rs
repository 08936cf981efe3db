//! Integration tests for post sentiment analytics

use approx::assert_abs_diff_eq;
use post_sentiment::{
    AnalysisSettings, AppConfig, Cleaner, Error, JsonFileSource, Language, MemorySource, Objectivity,
    ObjectivityClassifier, Pipeline, PolarityScorer, RawRecord, ResourceCache, ResourceSettings,
    Resources, SentimentClass, SqliteSource,
};
use rusqlite::{params, Connection};
use tempfile::tempdir;

fn scenario() -> Vec<RawRecord> {
    vec![
        RawRecord::new(Some("I love this, it's great!"), Some("2024-01-01")),
        RawRecord::new(Some("I hate this, terrible."), Some("2024-01-02")),
        RawRecord::new(Some(""), Some("2024-01-03")),
        RawRecord::new(Some("It is a table."), None),
    ]
}

fn default_pipeline() -> Pipeline {
    Pipeline::new(AnalysisSettings::default(), &Resources::builtin()).unwrap()
}

/// Scores a text by looking up a fixed table, 0.0 otherwise
struct TableScorer(Vec<(&'static str, f64)>);

impl PolarityScorer for TableScorer {
    fn score(&self, text: &str) -> f64 {
        self.0
            .iter()
            .find(|(t, _)| *t == text)
            .map(|(_, s)| *s)
            .unwrap_or(0.0)
    }

    fn name(&self) -> &str {
        "table"
    }
}

mod end_to_end {
    use super::*;

    #[test]
    fn test_scenario() {
        let report = default_pipeline()
            .run(&mut MemorySource::new(scenario()))
            .unwrap();

        // Cleaner drops the blank text and the missing timestamp
        assert_eq!(report.cleaning.read, 4);
        assert_eq!(report.cleaning.kept, 2);
        assert_eq!(report.cleaning.blank_text, 1);
        assert_eq!(report.cleaning.missing_timestamp, 1);

        let first = &report.records[0].scored;
        let second = &report.records[1].scored;
        assert_eq!(first.record.text, "I love this, it's great!");
        assert!(first.compound > 0.0);
        assert_eq!(first.sentiment_class, SentimentClass::Positive);
        assert!(second.compound < 0.0);
        assert_eq!(second.sentiment_class, SentimentClass::Negative);

        // Two-entry mapping, no neutral
        let means = &report.sentiment.means;
        assert_eq!(means.len(), 2);
        assert_eq!(means[&SentimentClass::Positive], first.compound);
        assert_eq!(means[&SentimentClass::Negative], second.compound);
        assert!(!means.contains_key(&SentimentClass::Neutral));

        // Objectivity follows the magnitude rule with the default threshold
        for labelled in &report.records {
            let expected = if labelled.scored.compound.abs() > 0.5 {
                Objectivity::Subjective
            } else {
                Objectivity::Objective
            };
            assert_eq!(labelled.objectivity, expected);
        }
        assert_eq!(report.objectivity.counts[&Objectivity::Subjective], 2);

        // Stopwords removed, fewer than K distinct tokens, no padding
        let words: Vec<&str> = report.lexical.top_words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["love", "great", "hate", "terrible"]);
        assert_eq!(report.lexical.frequencies.total(), 4);
    }

    #[test]
    fn test_scenario_with_injected_threshold() {
        let settings = AnalysisSettings {
            objectivity_threshold: 0.95,
            ..Default::default()
        };
        let report = Pipeline::new(settings, &Resources::builtin())
            .unwrap()
            .analyze(scenario())
            .unwrap();

        assert!(report.records.iter().all(|r| r.objectivity == Objectivity::Objective));
        assert_eq!(report.objectivity.threshold, 0.95);
    }

    #[test]
    fn test_idempotent() {
        let pipeline = default_pipeline();
        let first = pipeline.analyze(scenario()).unwrap();
        let second = pipeline.analyze(scenario()).unwrap();

        assert_eq!(first, second);
        for (a, b) in first.sentiment.means.values().zip(second.sentiment.means.values()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}

mod boundaries {
    use super::*;

    fn run_with(scores: Vec<(&'static str, f64)>) -> post_sentiment::AnalysisReport {
        let raw = scores
            .iter()
            .map(|(t, _)| RawRecord::new(Some(*t), Some("2024-01-01")))
            .collect();
        default_pipeline()
            .with_scorer(TableScorer(scores))
            .analyze(raw)
            .unwrap()
    }

    #[test]
    fn test_sentiment_class_boundaries() {
        let report = run_with(vec![("zero", 0.0), ("tiny up", 0.0001), ("tiny down", -0.0001)]);
        let classes: Vec<SentimentClass> = report
            .records
            .iter()
            .map(|r| r.scored.sentiment_class)
            .collect();
        assert_eq!(
            classes,
            vec![SentimentClass::Neutral, SentimentClass::Positive, SentimentClass::Negative]
        );
        assert_eq!(report.scorer, "table");
    }

    #[test]
    fn test_objectivity_boundaries() {
        let eps = 1e-9;
        let report = run_with(vec![
            ("upper edge", 0.5),
            ("just above", 0.5 + eps),
            ("lower edge", -0.5),
            ("just below", -0.5 - eps),
        ]);
        let labels: Vec<Objectivity> = report.records.iter().map(|r| r.objectivity).collect();
        assert_eq!(
            labels,
            vec![
                Objectivity::Objective,
                Objectivity::Subjective,
                Objectivity::Objective,
                Objectivity::Subjective,
            ]
        );
        assert_eq!(report.objectivity.counts[&Objectivity::Objective], 2);
        assert_abs_diff_eq!(report.objectivity.means[&Objectivity::Objective], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_class_mean_of_three() {
        let report = run_with(vec![("a", 0.2), ("b", 0.4), ("c", 0.6)]);
        assert_abs_diff_eq!(
            report.sentiment.means[&SentimentClass::Positive],
            0.4,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_classifier_threshold_injection() {
        let classifier = ObjectivityClassifier::new(0.25).unwrap();
        assert_eq!(classifier.classify(0.25), Objectivity::Objective);
        assert_eq!(classifier.classify(-0.26), Objectivity::Subjective);
    }
}

mod cleaning {
    use super::*;

    #[test]
    fn test_cleaner_is_subset_filter() {
        let input = vec![
            RawRecord::new(Some("  keep me  "), Some("2024-02-01")),
            RawRecord::new(None, None),
            RawRecord::new(Some("\n"), Some("2024-02-02")),
            RawRecord::new(Some("also kept"), Some("2024-02-03 08:00:00")),
            RawRecord::new(Some("no time"), Some("garbage")),
        ];
        let (records, stats) = Cleaner::new(Language::English).clean(input.clone());

        assert!(records.len() <= input.len());
        assert_eq!(stats.kept + stats.dropped(), stats.read);
        for record in &records {
            assert!(input.iter().any(|raw| {
                raw.text.as_deref() == Some(record.text.as_str())
                    && raw.timestamp == Some(record.timestamp)
            }));
        }
        let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["  keep me  ", "also kept"]);
    }
}

mod sources {
    use super::*;

    #[test]
    fn test_sqlite_end_to_end() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("tweets.db");
        {
            let conn = Connection::open(&db).unwrap();
            conn.execute("CREATE TABLE posts (text TEXT, posted_at TEXT)", []).unwrap();
            for raw in scenario() {
                let ts = raw.timestamp.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string());
                conn.execute(
                    "INSERT INTO posts (text, posted_at) VALUES (?1, ?2)",
                    params![raw.text, ts],
                )
                .unwrap();
            }
        }

        let from_db = default_pipeline().run(&mut SqliteSource::new(&db)).unwrap();
        let from_memory = default_pipeline().analyze(scenario()).unwrap();
        assert_eq!(from_db, from_memory);
    }

    #[test]
    fn test_json_file_with_languages() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(
            &path,
            r#"[
                {"text": "Me encanta la playa, la playa es genial", "timestamp": "2024-03-01", "language": "spanish"},
                {"text": "The beach is wonderful", "timestamp": "2024-03-02"}
            ]"#,
        )
        .unwrap();

        let mut cache = ResourceCache::new(ResourceSettings {
            languages: vec![Language::English, Language::Spanish],
            ..Default::default()
        });
        let resources = cache.prepare(&[]).unwrap();
        let report = Pipeline::new(AnalysisSettings::default(), &resources)
            .unwrap()
            .run(&mut JsonFileSource::new(&path))
            .unwrap();

        assert_eq!(report.lexical.top_words[0].word, "playa");
        assert_eq!(report.lexical.top_words[0].count, 2);
        assert_eq!(report.lexical.frequencies.count("la"), 0);
        assert_eq!(report.lexical.frequencies.count("beach"), 1);
    }

    #[test]
    fn test_default_config_handles_mixed_languages() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tweets.json");
        std::fs::write(
            &path,
            r#"[
                {"text": "Qué día tan bonito en la playa", "timestamp": "2024-04-01", "language": "spanish"},
                {"text": "What a wonderful day at the beach", "timestamp": "2024-04-02", "language": "english"}
            ]"#,
        )
        .unwrap();

        // Same setup the CLI performs without a config file
        let config = AppConfig::default();
        config.validate().unwrap();
        let mut cache = ResourceCache::new(config.resources.clone());
        let resources = cache.prepare(&[config.analysis.default_language]).unwrap();
        let report = Pipeline::new(config.analysis.clone(), &resources)
            .unwrap()
            .run(&mut JsonFileSource::new(&path))
            .unwrap();

        assert_eq!(report.record_count(), 2);
        assert_eq!(report.lexical.frequencies.count("playa"), 1);
        assert_eq!(report.lexical.frequencies.count("beach"), 1);
        assert_eq!(report.lexical.frequencies.count("la"), 0);
        assert_eq!(report.lexical.frequencies.count("the"), 0);
    }

    #[test]
    fn test_spanish_record_without_spanish_stopwords_is_fatal() {
        let mut cache = ResourceCache::new(ResourceSettings {
            languages: vec![Language::English],
            ..Default::default()
        });
        let resources = cache.prepare(&[]).unwrap();
        let raw = vec![
            RawRecord::new(Some("hola amigos"), Some("2024-01-01")).with_language(Language::Spanish),
        ];

        let err = Pipeline::new(AnalysisSettings::default(), &resources)
            .unwrap()
            .analyze(raw)
            .unwrap_err();
        assert!(matches!(err, Error::ResourceUnavailable { .. }));
    }
}

mod resources {
    use super::*;

    #[test]
    fn test_custom_lexicon_and_stopwords() {
        let dir = tempdir().unwrap();
        let lexicon = dir.path().join("lexicon.txt");
        std::fs::write(&lexicon, "sunny\t2.0\ngloomy\t-2.0\n").unwrap();
        let stopwords = dir.path().join("stopwords");
        std::fs::create_dir(&stopwords).unwrap();
        std::fs::write(stopwords.join("english"), "the\ntoday\nis\n").unwrap();

        let mut cache = ResourceCache::new(ResourceSettings {
            lexicon_path: Some(lexicon),
            stopwords_dir: Some(stopwords),
            languages: vec![Language::English],
        });
        let resources = cache.prepare(&[]).unwrap();
        let report = Pipeline::new(AnalysisSettings::default(), &resources)
            .unwrap()
            .analyze(vec![
                RawRecord::new(Some("The sky is sunny today"), Some("2024-05-01")),
                RawRecord::new(Some("the sky is gloomy"), Some("2024-05-02")),
                RawRecord::new(Some("I love it"), Some("2024-05-03")),
            ])
            .unwrap();

        let classes: Vec<SentimentClass> = report
            .records
            .iter()
            .map(|r| r.scored.sentiment_class)
            .collect();
        // "love" is not in the custom lexicon
        assert_eq!(
            classes,
            vec![SentimentClass::Positive, SentimentClass::Negative, SentimentClass::Neutral]
        );
        assert_eq!(report.lexical.top_words[0].word, "sky");
        assert_eq!(report.lexical.top_words[0].count, 2);
    }

    #[test]
    fn test_missing_stopwords_dir_is_fatal() {
        let dir = tempdir().unwrap();
        let mut cache = ResourceCache::new(ResourceSettings {
            stopwords_dir: Some(dir.path().join("absent")),
            ..Default::default()
        });
        assert!(matches!(
            cache.prepare(&[]),
            Err(Error::ResourceUnavailable { .. })
        ));
    }
}
