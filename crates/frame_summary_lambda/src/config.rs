/// Set by the Lambda platform inside a function's execution environment.
pub const RUNTIME_API_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// Poll the runtime API for events until the platform stops the process.
    LambdaRuntime,
    /// Invoke the handler once with a null event and exit.
    Local,
}

impl InvocationMode {
    pub fn from_env() -> Self {
        Self::from_runtime_api(std::env::var(RUNTIME_API_ENV).ok().as_deref())
    }

    pub fn from_runtime_api(runtime_api: Option<&str>) -> Self {
        match runtime_api {
            Some(value) if !value.trim().is_empty() => Self::LambdaRuntime,
            _ => Self::Local,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LambdaRuntime => "lambda_runtime",
            Self::Local => "local",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_runtime_api_means_local() {
        assert_eq!(InvocationMode::from_runtime_api(None), InvocationMode::Local);
    }

    #[test]
    fn blank_runtime_api_means_local() {
        assert_eq!(
            InvocationMode::from_runtime_api(Some("  ")),
            InvocationMode::Local
        );
    }

    #[test]
    fn configured_runtime_api_selects_lambda_runtime() {
        assert_eq!(
            InvocationMode::from_runtime_api(Some("127.0.0.1:9001")),
            InvocationMode::LambdaRuntime
        );
    }
}
