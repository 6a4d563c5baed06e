use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "roman_numeral=warn";
const VERBOSE_DIRECTIVE: &str = "roman_numeral=debug";

/// `RUST_LOG` 沒設定時使用的過濾條件
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    }
}

/// Installs the stderr logger for the `roman` binary.
///
/// Returns `false` when a global subscriber was already set.
pub fn init_cli_logger(verbose: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // stdout 只留給轉換結果
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(verbose)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "roman_numeral=warn");
        assert_eq!(default_directive(true), "roman_numeral=debug");
    }

    #[test]
    fn test_second_init_does_not_panic() {
        init_cli_logger(false);
        assert!(!init_cli_logger(true));
    }
}
