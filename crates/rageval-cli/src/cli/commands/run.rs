use super::runner_builder::{build_run, ResolvedRun};
use crate::cli::args::RunArgs;
use crate::exit_codes::{exit_code_for, FAILURES_FOUND, SUCCESS};
use rageval_core::dataset::load_dataset;
use rageval_core::errors::RunError;
use rageval_core::report::console::{emit_progress_line, format_progress_line, print_run_summary};
use rageval_core::report::json::{write_evaluations, write_failure_report};
use rageval_core::report::markdown::{render_markdown, ReportMeta};
use rageval_core::report::progress::{ProgressEvent, ProgressSink};
use rageval_core::report::{EVALUATIONS_FILE, FAILURE_REPORT_FILE};
use std::path::Path;
use std::sync::Arc;

pub(crate) async fn run(args: RunArgs) -> anyhow::Result<i32> {
    match run_inner(&args).await {
        Ok(code) => Ok(code),
        Err(e) => {
            if e.kind.is_config() {
                eprintln!("config error: {}", e);
            } else {
                eprintln!("error: {}", e);
            }
            if let Some(detail) = e.detail.as_deref().filter(|d| *d != e.message) {
                tracing::debug!("{}", detail);
            }
            Ok(exit_code_for(&e))
        }
    }
}

async fn run_inner(args: &RunArgs) -> Result<i32, RunError> {
    let ResolvedRun {
        input,
        output_dir,
        runner,
    } = build_run(args)?;

    let items = load_dataset(&input)?;
    let judge_label = runner.evaluator.strategy().label();
    let judge_model = runner.evaluator.strategy().model().map(str::to_string);

    let progress: ProgressSink = Arc::new(|ev: ProgressEvent| {
        emit_progress_line(&format_progress_line(ev.position, ev.total, &ev.id));
    });
    let artifacts = runner.run(&items, Some(progress)).await?;

    // Outputs are only written once every item has been judged.
    let evaluations_path = output_dir.join(EVALUATIONS_FILE);
    let report_path = output_dir.join(FAILURE_REPORT_FILE);
    write_evaluations(&artifacts.results, &evaluations_path)
        .map_err(|e| write_error(&evaluations_path, e))?;
    write_failure_report(&artifacts.report, &report_path)
        .map_err(|e| write_error(&report_path, e))?;

    if let Some(md_path) = &args.markdown {
        let meta = ReportMeta::now(judge_label, judge_model);
        let md = render_markdown(&artifacts.results, &artifacts.report, &meta);
        write_markdown(md_path, &md)?;
        eprintln!("Wrote {}", md_path.display());
    }

    print_run_summary(&artifacts.results, &artifacts.report, judge_label);
    println!(
        "Evaluation complete. Check {} and {}",
        evaluations_path.display(),
        report_path.display()
    );

    if args.fail_on_failures && !artifacts.report.failure_modes.is_empty() {
        return Ok(FAILURES_FOUND);
    }
    Ok(SUCCESS)
}

pub(crate) fn write_markdown(path: &Path, md: &str) -> Result<(), RunError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_error(path, e))?;
    }
    std::fs::write(path, md).map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, e: impl std::fmt::Display) -> RunError {
    RunError::output_write(path.display().to_string(), format!("{:#}", e))
}
