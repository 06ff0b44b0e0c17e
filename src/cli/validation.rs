use crate::cli::args::CliArgs;
use crate::output::OutputFormat;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if args.page == Some(0) {
        return Err("invalid page, expected positive integer".to_string());
    }
    if args.show == Some(0) {
        return Err("invalid show id, ids start at 1".to_string());
    }
    if let Some(raw) = args.output_format.as_deref() {
        if OutputFormat::parse(raw).is_none() {
            return Err(format!("invalid --output-format '{raw}', expected text or json"));
        }
    }
    if args.interactive && args.output.is_some() {
        return Err("--output cannot be combined with --interactive".to_string());
    }
    if let Some(raw) = args.source.as_deref() {
        if raw.trim().is_empty() {
            return Err("invalid --source, expected a path or URL".to_string());
        }
    }
    Ok(())
}
