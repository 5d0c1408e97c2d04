use super::run::write_markdown;
use crate::cli::args::ReportArgs;
use crate::exit_codes::{CONFIG_ERROR, INFRA_ERROR, SUCCESS};
use rageval_core::report::json::{read_evaluations, read_failure_report};
use rageval_core::report::markdown::{render_markdown, ReportMeta};

pub fn run(args: ReportArgs) -> anyhow::Result<i32> {
    let loaded = read_evaluations(&args.evaluations)
        .and_then(|results| Ok((results, read_failure_report(&args.failure_report)?)));
    let (results, report) = match loaded {
        Ok(v) => v,
        Err(e) => {
            eprintln!("config error: {:#}", e);
            return Ok(CONFIG_ERROR);
        }
    };

    let meta = ReportMeta::now(args.judge, args.model);
    let md = render_markdown(&results, &report, &meta);
    if let Err(e) = write_markdown(&args.out, &md) {
        eprintln!("error: {}", e);
        return Ok(INFRA_ERROR);
    }
    println!("Wrote {}", args.out.display());
    Ok(SUCCESS)
}
