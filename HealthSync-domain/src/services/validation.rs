use validator::{ValidationErrors, ValidationErrorsKind};

/// Flatten `validator` errors into one message, `field: msg, msg; field: msg`.
///
/// Nested structs are reported with a dotted path. Fields are sorted so the
/// message is stable.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts = Vec::new();
    collect(errors, "", &mut parts);
    parts.sort();
    parts.join("; ")
}

fn collect(errors: &ValidationErrors, prefix: &str, parts: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages: Vec<String> = field_errors
                    .iter()
                    .map(|err| match &err.message {
                        Some(msg) => msg.to_string(),
                        None => format!("Invalid {}", field),
                    })
                    .collect();
                parts.push(format!("{}: {}", path, messages.join(", ")));
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, parts),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{}[{}]", path, index), parts);
                }
            }
        }
    }
}
