//! Format dispatch macros for command output

/// Macro for format dispatch when the json branch returns Result and the
/// human branch returns ().
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}

/// Print a JSON value to stdout, pretty-printed
pub fn print_json(value: &serde_json::Value) -> skein_core::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
