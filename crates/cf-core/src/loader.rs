use crate::error::LoadError;
use crate::types::{DataFormat, Event, ValidationPolicy};
use crate::validation::{repair_event, validate_event};
use std::fs;
use std::path::{Path, PathBuf};

/// Source of the event dataset.
pub trait EventLoader {
    fn load(&self) -> Result<Vec<Event>, LoadError>;
}

#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
    format: DataFormat,
    policy: ValidationPolicy,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>, format: DataFormat, policy: ValidationPolicy) -> Self {
        Self {
            path: path.into(),
            format,
            policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventLoader for FileLoader {
    fn load(&self) -> Result<Vec<Event>, LoadError> {
        let content = fs::read_to_string(&self.path).map_err(|err| LoadError::Io {
            path: self.path.display().to_string(),
            message: err.to_string(),
        })?;
        let events = parse_events(&content, self.format)?;
        let events = apply_policy(events, self.policy)?;
        tracing::info!(
            path = %self.path.display(),
            events = events.len(),
            "loaded events"
        );
        Ok(events)
    }
}

pub fn parse_events(content: &str, format: DataFormat) -> Result<Vec<Event>, LoadError> {
    match format {
        DataFormat::Json => serde_json::from_str(content).map_err(|err| LoadError::Parse {
            line: err.line(),
            message: err.to_string(),
        }),
        DataFormat::Jsonl => content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str(line).map_err(|err| LoadError::Parse {
                    line: idx + 1,
                    message: err.to_string(),
                })
            })
            .collect(),
    }
}

pub fn apply_policy(
    mut events: Vec<Event>,
    policy: ValidationPolicy,
) -> Result<Vec<Event>, LoadError> {
    match policy {
        ValidationPolicy::Reject => {
            for event in &events {
                validate_event(event)?;
            }
        }
        ValidationPolicy::Lenient => {
            for event in &mut events {
                for change in repair_event(event) {
                    tracing::warn!(id = %event.id, issue = change, "repaired malformed event");
                }
            }
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const GOOD: &str = r#"{"id":"c1","channel":"Email","campaign":"Campaign A","business_indicator":"Money In","sent_at":"2024-01-01T00:00:00Z","engaged":true,"engaged_at":"2024-01-02T00:00:00Z","converted":true,"converted_at":"2024-01-04T00:00:00Z"}"#;
    const NO_TIMESTAMPS: &str = r#"{"id":"c2","channel":"Push","campaign":"Campaign B","business_indicator":"Money In","sent_at":"2024-01-01T00:00:00Z","engaged":false,"converted":false}"#;
    const MISSING_ENGAGED_AT: &str = r#"{"id":"c3","channel":"Push","campaign":"Campaign B","business_indicator":"Money In","sent_at":"2024-01-01T00:00:00Z","engaged":true,"engaged_at":null,"converted":false}"#;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_jsonl_skips_blank_lines() {
        let file = write_file(&format!("{GOOD}\n\n{NO_TIMESTAMPS}\n"));
        let loader = FileLoader::new(file.path(), DataFormat::Jsonl, ValidationPolicy::Reject);
        let events = loader.load().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].lag_days(), Some(2));
        assert_eq!(events[1].engaged_at, None);
    }

    #[test]
    fn test_load_json_array() {
        let file = write_file(&format!("[{GOOD},{NO_TIMESTAMPS}]"));
        let loader = FileLoader::new(file.path(), DataFormat::Json, ValidationPolicy::Reject);
        assert_eq!(loader.load().unwrap().len(), 2);
    }

    #[test]
    fn test_jsonl_parse_error_reports_line() {
        let err = parse_events(&format!("{GOOD}\n\nnot json\n"), DataFormat::Jsonl).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_reject_policy_fails_on_malformed_event() {
        let file = write_file(&format!("{GOOD}\n{MISSING_ENGAGED_AT}\n"));
        let loader = FileLoader::new(file.path(), DataFormat::Jsonl, ValidationPolicy::Reject);
        match loader.load() {
            Err(LoadError::Malformed(EventError::Malformed { id, .. })) => assert_eq!(id, "c3"),
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn test_lenient_policy_keeps_event() {
        let file = write_file(&format!("{GOOD}\n{MISSING_ENGAGED_AT}\n"));
        let loader = FileLoader::new(file.path(), DataFormat::Jsonl, ValidationPolicy::Lenient);
        let events = loader.load().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[1].engaged);
        assert_eq!(events[1].engaged_at, None);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FileLoader::new(
            dir.path().join("absent.jsonl"),
            DataFormat::Jsonl,
            ValidationPolicy::Reject,
        );
        assert!(matches!(loader.load(), Err(LoadError::Io { .. })));
    }
}
