use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunErrorKind {
    MissingInput,
    InputParse,
    MissingConfig,
    ConfigParse,
    InvalidArgs,
    JudgeUnavailable,
    OutputWrite,
}

impl RunErrorKind {
    /// Config/input problems are the caller's to fix; the rest are infrastructure.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            RunErrorKind::MissingInput
                | RunErrorKind::InputParse
                | RunErrorKind::MissingConfig
                | RunErrorKind::ConfigParse
                | RunErrorKind::InvalidArgs
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RunError {
    pub kind: RunErrorKind,
    pub message: String,
    pub path: Option<String>,
    pub status: Option<u16>,
    pub provider: Option<String>,
    pub detail: Option<String>,
}

impl RunError {
    pub fn new(kind: RunErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
            status: None,
            provider: None,
            detail: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn missing_input(path: impl Into<String>, detail: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            RunErrorKind::MissingInput,
            format!("Input dataset not found: {}", path),
        )
        .with_path(path)
        .with_detail(detail)
    }

    pub fn input_parse(path: impl Into<String>, detail: impl Into<String>) -> Self {
        let path = path.into();
        let detail = detail.into();
        Self::new(
            RunErrorKind::InputParse,
            format!("Failed to parse dataset {}: {}", path, detail),
        )
        .with_path(path)
        .with_detail(detail)
    }

    pub fn missing_config(path: impl Into<String>, detail: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            RunErrorKind::MissingConfig,
            format!("Config file not found: {}", path),
        )
        .with_path(path)
        .with_detail(detail)
    }

    pub fn config_parse(path: Option<String>, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let mut err = Self::new(RunErrorKind::ConfigParse, detail.clone()).with_detail(detail);
        if let Some(path) = path {
            err = err.with_path(path);
        }
        err
    }

    pub fn invalid_args(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::new(RunErrorKind::InvalidArgs, detail.clone()).with_detail(detail)
    }

    pub fn judge_unavailable(provider: Option<String>, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let mut err = Self::new(
            RunErrorKind::JudgeUnavailable,
            format!("judge unavailable: {}", detail),
        )
        .with_detail(detail);
        if let Some(provider) = provider {
            err = err.with_provider(provider);
        }
        err
    }

    pub fn output_write(path: impl Into<String>, detail: impl Into<String>) -> Self {
        let path = path.into();
        let detail = detail.into();
        Self::new(
            RunErrorKind::OutputWrite,
            format!("Failed to write {}: {}", path, detail),
        )
        .with_path(path)
        .with_detail(detail)
    }
}

#[derive(Debug)]
pub struct ConfigError(pub String);

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{RunError, RunErrorKind};

    #[test]
    fn typed_constructors_capture_stable_fields() {
        let input = RunError::missing_input("data/missing.json", "os error 2");
        assert_eq!(input.kind, RunErrorKind::MissingInput);
        assert_eq!(input.path.as_deref(), Some("data/missing.json"));
        assert_eq!(input.detail.as_deref(), Some("os error 2"));

        let judge = RunError::judge_unavailable(Some("openai".to_string()), "401 Unauthorized")
            .with_status(401);
        assert_eq!(judge.kind, RunErrorKind::JudgeUnavailable);
        assert_eq!(judge.status, Some(401));
        assert_eq!(judge.provider.as_deref(), Some("openai"));
        assert!(judge.to_string().contains("judge unavailable"));
    }

    #[test]
    fn config_kinds_are_separated_from_infra() {
        assert!(RunErrorKind::InputParse.is_config());
        assert!(RunErrorKind::InvalidArgs.is_config());
        assert!(!RunErrorKind::JudgeUnavailable.is_config());
        assert!(!RunErrorKind::OutputWrite.is_config());
    }
}
