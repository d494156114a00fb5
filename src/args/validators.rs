use super::types::Args;

/// Boolean-like token for `--download`: only "false" (any case) disables.
///
/// # Errors
///
/// Never fails; the signature matches clap's value parser contract.
pub fn parse_download_flag(raw: &str) -> Result<bool, String> {
    Ok(!raw.trim().eq_ignore_ascii_case("false"))
}

/// Rejects empty or whitespace-only values.
///
/// # Errors
///
/// Returns an error if the value is blank.
pub fn check_non_empty(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(raw.to_string())
    }
}

/// Validate the parsed args
///
/// # Errors
///
/// Returns an error if the dataset URL is not http(s).
pub fn validate(args: &Args) -> Result<(), String> {
    let url = args.dataset_url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(format!(
            "--dataset-url must be an http(s) URL, got '{}'",
            args.dataset_url
        ));
    }
    if args.bucket.contains('/') {
        return Err(format!(
            "--bucket must be a bucket name without '/', got '{}'; use --key for the prefix",
            args.bucket
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_flag_parsing() {
        assert_eq!(parse_download_flag("false"), Ok(false));
        assert_eq!(parse_download_flag("FALSE"), Ok(false));
        assert_eq!(parse_download_flag("fAlSe"), Ok(false));
        assert_eq!(parse_download_flag("true"), Ok(true));
        assert_eq!(parse_download_flag("0"), Ok(true));
        assert_eq!(parse_download_flag(""), Ok(true));
    }

    #[test]
    fn non_empty_check() {
        assert!(check_non_empty("").is_err());
        assert!(check_non_empty("   ").is_err());
        assert_eq!(check_non_empty("mimic-raw"), Ok("mimic-raw".to_string()));
    }
}
