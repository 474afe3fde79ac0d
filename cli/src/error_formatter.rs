use ariadne::{Color, Label, Report, ReportKind, Source};
use glossa::GlossaError;

/// Format a GlossaError with fancy terminal output using Ariadne
pub fn format_error(error: &GlossaError) -> String {
    match error {
        GlossaError::Syntax(details)
        | GlossaError::InvalidSymbol(details)
        | GlossaError::UnknownTag(details)
        | GlossaError::DuplicateRole(details)
        | GlossaError::AmbiguousEnvironment(details) => {
            let mut output = Vec::new();

            let error_type = match error {
                GlossaError::Syntax(_) => "Syntax error",
                GlossaError::InvalidSymbol(_) => "Invalid symbol",
                GlossaError::UnknownTag(_) => "Unknown tag",
                GlossaError::DuplicateRole(_) => "Duplicate role",
                GlossaError::AmbiguousEnvironment(_) => "Ambiguous environment",
                _ => unreachable!(),
            };

            let enhanced_message = format!(
                "{}: {} (at {}:{}:{})",
                error_type,
                details.message,
                details.source_id,
                details.span.line,
                details.span.col
            );

            let mut report =
                Report::build(ReportKind::Error, &details.source_id, details.span.start)
                    .with_message(enhanced_message)
                    .with_label(
                        Label::new((&details.source_id, details.span.start..details.span.end))
                            .with_message("")
                            .with_color(Color::Red),
                    );

            if let Some(suggestion) = &details.suggestion {
                report = report.with_help(suggestion);
            }

            match report.finish().write(
                (
                    &details.source_id,
                    Source::from(details.source_text.as_ref()),
                ),
                &mut output,
            ) {
                Ok(_) => String::from_utf8_lossy(&output).to_string(),
                Err(_) => {
                    // Fallback to simple format
                    format!("{}", error)
                }
            }
        }
        GlossaError::Conflict(msg) => format!("Conflict: {}", msg),
        GlossaError::StaleReference(msg) => format!("Stale reference: {}", msg),
        GlossaError::SymbolInUse {
            symbol,
            referenced_by,
        } => format!(
            "Symbol in use: '{}' is still referenced by {}",
            symbol, referenced_by
        ),
        GlossaError::GenerationNotFound(label) => {
            format!(
                "Generation not found: '{}'\n  Use `glossa show` to list generation labels",
                label
            )
        }
        GlossaError::LimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
        GlossaError::Engine(msg) => format!("Engine error: {}", msg),
    }
}
