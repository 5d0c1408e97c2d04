use clap::ValueEnum;
use rageval_core::report::failure::MalformedScorePolicy;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum JudgeKind {
    /// openai when an API key is present, mock otherwise
    #[default]
    Auto,
    Openai,
    Mock,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct JudgeArgs {
    /// Which judge scores the answers
    /// - auto: openai if OPENAI_API_KEY is set, else mock
    /// - openai: live judge calls (fails without a key)
    /// - mock: deterministic rule-based judge (tests/dev)
    #[arg(long, value_enum, default_value_t, env = "RAGEVAL_JUDGE")]
    pub judge: JudgeKind,

    /// Judge model identifier. Default: gpt-4
    #[arg(long, env = "RAGEVAL_JUDGE_MODEL")]
    pub judge_model: Option<String>,

    /// Max tokens for the judge response. Default: 500
    #[arg(long, env = "RAGEVAL_JUDGE_MAX_TOKENS")]
    pub judge_max_tokens: Option<u32>,

    /// Sampling temperature for judge calls. Default: 0.5
    #[arg(long, env = "RAGEVAL_JUDGE_TEMPERATURE")]
    pub judge_temperature: Option<f32>,

    /// OpenAI-compatible API base URL
    #[arg(long, env = "RAGEVAL_JUDGE_BASE_URL")]
    pub judge_base_url: Option<String>,

    #[arg(long, hide = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub judge_api_key: Option<String>,
}

impl JudgeArgs {
    /// The API key, if one was actually provided.
    pub fn api_key(&self) -> Option<&str> {
        self.judge_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedScoresArg {
    Lenient,
    Strict,
}

impl From<MalformedScoresArg> for MalformedScorePolicy {
    fn from(v: MalformedScoresArg) -> Self {
        match v {
            MalformedScoresArg::Lenient => MalformedScorePolicy::Lenient,
            MalformedScoresArg::Strict => MalformedScorePolicy::Strict,
        }
    }
}
