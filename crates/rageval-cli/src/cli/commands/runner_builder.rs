use crate::cli::args::{JudgeArgs, JudgeKind, RunArgs, DEFAULT_CONFIG, DEFAULT_INPUT};
use rageval_core::config::{load_config, EvalConfig};
use rageval_core::engine::runner::Runner;
use rageval_core::errors::RunError;
use rageval_core::judge::{AnswerEvaluator, JudgeRuntimeConfig, JudgeStrategy};
use rageval_core::providers::llm::openai::OpenAIClient;
use rageval_core::providers::llm::tracing::TracingLlmClient;
use rageval_core::providers::llm::LlmClient;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Settings for one run after merging flags over the config file.
pub(crate) struct ResolvedRun {
    pub(crate) input: PathBuf,
    pub(crate) output_dir: PathBuf,
    pub(crate) runner: Runner,
}

pub(crate) fn load_run_config(args: &RunArgs) -> Result<EvalConfig, RunError> {
    let (path, explicit) = match &args.config {
        Some(p) => (p.clone(), true),
        None => (PathBuf::from(DEFAULT_CONFIG), false),
    };
    if !path.exists() {
        if explicit {
            return Err(RunError::missing_config(
                path.display().to_string(),
                "no such file",
            ));
        }
        return Ok(EvalConfig::default());
    }
    load_config(&path).map_err(|e| RunError::config_parse(Some(path.display().to_string()), e.to_string()))
}

pub(crate) fn judge_runtime(args: &JudgeArgs, cfg: &EvalConfig) -> Result<JudgeRuntimeConfig, RunError> {
    let mut rt = cfg.judge.runtime();
    if let Some(model) = &args.judge_model {
        rt.model = model.clone();
    }
    if let Some(max_tokens) = args.judge_max_tokens {
        if max_tokens == 0 {
            return Err(RunError::invalid_args("--judge-max-tokens must be positive"));
        }
        rt.max_tokens = max_tokens;
    }
    if let Some(t) = args.judge_temperature {
        if !(0.0..=2.0).contains(&t) {
            return Err(RunError::invalid_args(format!(
                "--judge-temperature must be within 0.0..=2.0, got {}",
                t
            )));
        }
        rt.temperature = t;
    }
    Ok(rt)
}

/// Decide mock vs live once, before any item is judged.
pub(crate) fn build_strategy(args: &JudgeArgs, cfg: &EvalConfig) -> Result<JudgeStrategy, RunError> {
    let runtime = judge_runtime(args, cfg)?;
    let key = args.api_key();

    let use_live = match args.judge {
        JudgeKind::Mock => false,
        JudgeKind::Openai => {
            if key.is_none() {
                return Err(RunError::judge_unavailable(
                    Some("openai".to_string()),
                    "--judge openai requires OPENAI_API_KEY",
                ));
            }
            true
        }
        JudgeKind::Auto => {
            if key.is_none() {
                tracing::info!("No OPENAI_API_KEY found. Using mock judge.");
            }
            key.is_some()
        }
    };

    let Some(key) = key.filter(|_| use_live) else {
        return Ok(JudgeStrategy::mock());
    };

    let mut openai = OpenAIClient::new(key.to_string());
    if let Some(base_url) = args
        .judge_base_url
        .as_deref()
        .or(cfg.judge.base_url.as_deref())
    {
        openai = openai.with_base_url(base_url);
    }
    let client: Arc<dyn LlmClient> = Arc::new(TracingLlmClient::new(Arc::new(openai)));
    tracing::info!(model = %runtime.model, "using live judge");
    Ok(JudgeStrategy::live(client, runtime))
}

pub(crate) fn build_run(args: &RunArgs) -> Result<ResolvedRun, RunError> {
    let cfg = load_run_config(args)?;

    let input = args
        .input
        .clone()
        .or_else(|| cfg.input.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| cfg.output_dir.clone())
        .unwrap_or_else(|| Path::new(".").to_path_buf());
    let malformed_scores = args
        .malformed_scores
        .map(Into::into)
        .unwrap_or(cfg.aggregation.malformed_scores);

    let strategy = build_strategy(&args.judge, &cfg)?;
    Ok(ResolvedRun {
        input,
        output_dir,
        runner: Runner::new(AnswerEvaluator::new(strategy), malformed_scores),
    })
}
