//! Workflow command formatting.

use rand::Rng;

use crate::{ActionsError, Result};

/// Format a legacy workflow command, e.g. `::set-output name=foo::bar`.
pub(crate) fn format_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut output = format!("::{command}");
    if !properties.is_empty() {
        let properties = properties
            .iter()
            .map(|(k, v)| format!("{k}={}", escape_property(v)))
            .collect::<Vec<_>>()
            .join(",");
        output.push(' ');
        output.push_str(&properties);
    }

    output.push_str("::");
    output.push_str(&escape_data(message));
    output
}

/// Format a `name<<delimiter` block for runner files.
pub(crate) fn format_key_value(name: &str, value: &str) -> Result<String> {
    let delimiter = format!("ghadelimiter_{:032x}", rand::thread_rng().gen::<u128>());
    format_key_value_with_delimiter(name, value, &delimiter)
}

fn format_key_value_with_delimiter(name: &str, value: &str, delimiter: &str) -> Result<String> {
    if name.contains(delimiter) || value.contains(delimiter) {
        return Err(ActionsError::DelimiterCollision {
            delimiter: delimiter.into(),
        });
    }

    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn command_without_properties() {
        assert_eq!(
            format_command("error", &[], "Something failed: 100%\nreally"),
            "::error::Something failed: 100%25%0Areally"
        );
    }

    #[test]
    fn command_with_properties() {
        assert_eq!(
            format_command("set-output", &[("name", "is:Approved,")], "true"),
            "::set-output name=is%3AApproved%2C::true"
        );
    }

    #[test]
    fn key_value_block() {
        assert_eq!(
            format_key_value_with_delimiter("isApproved", "true", "EOF").unwrap(),
            "isApproved<<EOF\ntrue\nEOF\n"
        );

        assert!(matches!(
            format_key_value_with_delimiter("isApproved", "xEOFx", "EOF"),
            Err(ActionsError::DelimiterCollision { .. })
        ));

        let block = format_key_value("isApproved", "false").unwrap();
        assert!(block.starts_with("isApproved<<ghadelimiter_"));
        assert!(block.contains("\nfalse\n"));
    }
}
