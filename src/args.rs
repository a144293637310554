use std::path::PathBuf;

use clap::Parser;

/// Decode and classify a PowerAuth error response
#[derive(Debug, Parser)]
#[command(name = "powerauth-error-inspect", version)]
pub struct Args {
    /// JSON document to inspect; reads stdin when omitted
    pub path: Option<PathBuf>,

    /// Print compact JSON instead of pretty output
    #[arg(long)]
    pub compact: bool,

    /// Overrides PA_INSPECT_FALLBACK_HTTP_STATUS for this run
    #[arg(long)]
    pub fallback_http_status: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_parse_path_and_flags() {
        let args = Args::try_parse_from([
            "powerauth-error-inspect",
            "--compact",
            "--fallback-http-status",
            "503",
            "error.json",
        ])
        .unwrap();
        assert_eq!(args.path, Some(PathBuf::from("error.json")));
        assert!(args.compact);
        assert_eq!(args.fallback_http_status, Some(503));
    }

    #[test]
    fn test_args_reject_extra_positionals() {
        assert!(Args::try_parse_from(["powerauth-error-inspect", "a.json", "b.json"]).is_err());
        assert!(Args::try_parse_from(["powerauth-error-inspect", "--fallback-http-status", "-1"]).is_err());
    }
}
