use std::path::Path;

use anyhow::Context;
use engine_logging::engine_info;
use wordcount_engine::{spawn_word_count, EngineError, PipelineConfig, StdoutProgressSink};

pub fn run(file_name: &Path, config: &PipelineConfig) -> anyhow::Result<u64> {
    engine_info!(
        "counting words in {:?} with {} byte chunks",
        file_name,
        config.chunk_size
    );
    let total = spawn_word_count(file_name, config, &StdoutProgressSink)
        .with_context(|| format!("counting words in {}", file_name.display()))?;
    engine_info!("total for {:?}: {}", file_name, total);
    Ok(total)
}

/// The one-line message shown on stderr for a failed run.
pub fn diagnostic(err: &anyhow::Error, file_name: &Path) -> String {
    match err.downcast_ref::<EngineError>() {
        Some(engine_err @ EngineError::OpenSource { .. }) => format!("Error: {engine_err}"),
        Some(EngineError::SourceRead(_)) => {
            format!("Error: failed while reading \"{}\".", file_name.display())
        }
        Some(EngineError::ResultMissing { .. }) => {
            "Error: did not receive wordcount result from Process 2.".to_string()
        }
        _ => format!("Error: {err:#}"),
    }
}
