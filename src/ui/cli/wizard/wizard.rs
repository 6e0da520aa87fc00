use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

use crate::classifiers::ModelType;
use crate::service::{DowntimeService, ErrorResponse, PredictRequest, TrainRequest};
use crate::ui::cli::action::Action;
use crate::ui::cli::drivers::PromptDriver;

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";
const NAV_HELP: &str = "↑/↓ to navigate, ↵ to select";

struct KindItem<K> {
    kind: K,
    text: String,
}

impl<K> Display for KindItem<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn kind_items<K>() -> Vec<KindItem<K>>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            KindItem { kind: k, text }
        })
        .collect()
}

fn select_kind<K, D>(driver: &D, title: &str) -> Result<K>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
    D: PromptDriver,
{
    let items = kind_items::<K>();
    let labels = items.iter().map(ToString::to_string).collect();
    let index = driver.ask_select(title, NAV_HELP, labels)?;
    items
        .get(index)
        .map(|item| item.kind)
        .with_context(|| format!("selection {index} is out of range"))
}

/// Runs the interactive menu until the user quits.
///
/// Every operation result, success or [`ErrorResponse`], is written to `out`
/// as pretty JSON and the session carries on. Only prompt failures (such as
/// the user pressing Esc or Ctrl-C) and write failures end the session early.
pub fn run_session<D: PromptDriver, W: Write>(
    driver: &D,
    service: &DowntimeService,
    out: &mut W,
) -> Result<()> {
    let mut last_dataset: Option<String> = None;

    loop {
        match select_kind::<Action, D>(driver, "What would you like to do?")? {
            Action::Upload => {
                let path = prompt_path_until_ok(
                    driver,
                    "CSV file to upload:",
                    "Needs Machine_ID, Temperature, Run_Time and Downtime_Flag columns",
                    "",
                    true,
                    true,
                    &["csv"],
                )?;
                let bytes = match fs::read(&path) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        writeln!(out, "✗ cannot read {}: {e}", path.display())?;
                        continue;
                    }
                };
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();

                let response = service.upload_bytes(&filename, &bytes);
                if let Ok(r) = &response {
                    last_dataset = Some(r.file_path.clone());
                }
                emit(out, &response)?;
            }
            Action::Train => {
                let file_path = driver.ask_string(
                    "Dataset path:",
                    "Path returned by the upload step",
                    last_dataset.as_deref().unwrap_or(""),
                )?;
                let kind = select_kind::<ModelType, D>(driver, "Model type:")?;
                let response = service.train(&TrainRequest {
                    file_path: file_path.trim().to_string(),
                    model_type: Some(kind.to_string()),
                });
                emit(out, &response)?;
            }
            Action::Predict => {
                let temperature =
                    driver.ask_f64("Temperature:", "Machine temperature reading", 0.0, None, None)?;
                let run_time =
                    driver.ask_f64("Run_Time:", "Machine run time reading", 0.0, None, None)?;
                let response = service.predict(&PredictRequest {
                    temperature,
                    run_time,
                });
                emit(out, &response)?;
            }
            Action::Status => write_json(out, &service.status())?,
            Action::Quit => return Ok(()),
        }
    }
}

fn emit<T: Serialize, W: Write>(
    out: &mut W,
    response: &std::result::Result<T, ErrorResponse>,
) -> Result<()> {
    match response {
        Ok(body) => write_json(out, body),
        Err(error) => write_json(out, error),
    }
}

fn write_json<T: Serialize, W: Write>(out: &mut W, body: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, body)?;
    writeln!(out)?;
    Ok(())
}

fn validate_path_str(
    input: &str,
    must_exist: bool,
    must_be_file: bool,
    allowed_exts: &[&str],
) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if must_exist && !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if must_be_file && p.exists() && !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    if !allowed_exts.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if allowed_exts.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => return Err(format!("Expected a .{} file", allowed_exts.join(" / ."))),
        }
    }
    Ok(())
}

fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    must_exist: bool,
    must_be_file: bool,
    allowed_exts: &[&str],
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_path_str(&answer, must_exist, must_be_file, allowed_exts) {
            Ok(()) => return Ok(PathBuf::from(answer.trim())),
            Err(msg) => {
                eprintln!("✗ {}", msg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::DatasetSplitter;
    use crate::lifecycle::LifecycleCoordinator;
    use crate::testing::dummies::SAMPLE_CSV;
    use crate::testing::stubs::{Answer, MemoryModelStore, ScriptedDriver};
    use serde_json::Value;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> DowntimeService {
        let coordinator = LifecycleCoordinator::new(
            Box::new(MemoryModelStore::new()),
            DatasetSplitter::default(),
            dir.path().join("uploads"),
        );
        DowntimeService::new(Arc::new(coordinator))
    }

    fn sample_file(dir: &TempDir) -> String {
        let path = dir.path().join("sensors.csv");
        fs::write(&path, SAMPLE_CSV).unwrap();
        path.to_string_lossy().into_owned()
    }

    /// Splits the pretty-printed output back into JSON documents.
    fn documents(out: &[u8]) -> Vec<Value> {
        serde_json::Deserializer::from_slice(out)
            .into_iter::<Value>()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn validate_path_checks_existence_and_extension() {
        let dir = tempfile::tempdir().unwrap();
        let csv = sample_file(&dir);
        assert!(validate_path_str(&csv, true, true, &["csv"]).is_ok());
        assert!(validate_path_str("  ", true, true, &["csv"]).is_err());
        assert!(validate_path_str("/definitely/missing.csv", true, true, &["csv"]).is_err());
        assert!(validate_path_str(&dir.path().to_string_lossy(), true, true, &[]).is_err());

        let txt = dir.path().join("notes.TXT");
        fs::write(&txt, "x").unwrap();
        let err = validate_path_str(&txt.to_string_lossy(), true, true, &["csv"]).unwrap_err();
        assert_eq!(err, "Expected a .csv file");
        assert!(validate_path_str(&txt.to_string_lossy(), true, true, &["txt"]).is_ok());
    }

    #[test]
    fn menu_lists_every_action_with_descriptions() {
        let items = kind_items::<Action>();
        assert_eq!(items.len(), 5);
        assert!(items[0].text.starts_with("Upload dataset"));
        assert!(items[0].text.contains("Validate a sensor CSV"));
        assert_eq!(items[4].text, "Quit");
    }

    #[test]
    fn upload_train_predict_session() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let driver = ScriptedDriver::new([
            Answer::pick("Upload"),
            Answer::text(sample_file(&dir)),
            Answer::pick("Train"),
            Answer::Default,
            Answer::pick("Decision Tree"),
            Answer::pick("Predict"),
            Answer::Number(95.0),
            Answer::Number(150.0),
            Answer::pick("Status"),
            Answer::pick("Quit"),
        ]);
        let mut out = Vec::new();
        run_session(&driver, &svc, &mut out).unwrap();
        assert_eq!(driver.remaining(), 0);

        let docs = documents(&out);
        assert_eq!(docs.len(), 4);
        assert!(docs[0]["file_path"].as_str().unwrap().ends_with("sensors.csv"));
        assert!(docs[1]["message"].as_str().unwrap().contains("decision_tree"));
        assert_eq!(docs[2]["Downtime"], "Yes");
        assert_eq!(docs[3]["active_model"]["model_type"], "decision_tree");
    }

    #[test]
    fn errors_are_reported_and_session_continues() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let driver = ScriptedDriver::new([
            Answer::pick("Predict"),
            Answer::Number(95.0),
            Answer::Number(150.0),
            Answer::pick("Train"),
            Answer::text("nowhere.csv"),
            Answer::pick("Logistic"),
            Answer::pick("Quit"),
        ]);
        let mut out = Vec::new();
        run_session(&driver, &svc, &mut out).unwrap();

        let docs = documents(&out);
        assert_eq!(docs[0]["code"], "NO_MODEL_AVAILABLE");
        assert_eq!(docs[0]["status"], 400);
        assert_eq!(docs[1]["code"], "DATASET_NOT_FOUND");
    }

    #[test]
    fn invalid_upload_path_is_asked_again() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let driver = ScriptedDriver::new([
            Answer::pick("Upload"),
            Answer::text("missing.csv"),
            Answer::text(sample_file(&dir)),
            Answer::pick("Quit"),
        ]);
        let mut out = Vec::new();
        run_session(&driver, &svc, &mut out).unwrap();

        let asked = driver.prompts();
        assert_eq!(
            asked.iter().filter(|p| p.as_str() == "CSV file to upload:").count(),
            2
        );
        assert!(svc.status().feature_columns.is_some());
    }

    #[test]
    fn exhausted_script_ends_the_session_with_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let driver = ScriptedDriver::new([Answer::pick("Status")]);
        let mut out = Vec::new();
        assert!(run_session(&driver, &svc, &mut out).is_err());
    }
}
