//! Errors raised while reading or lowering FXML documents.
//!
//! Every failure aborts the current document. Codes are stable and can be
//! matched by hosts; the guarantee text states the invariant that was violated.

use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// ERROR CODES
// ═══════════════════════════════════════════════════════════════════════════════

pub const ERR_MISSING_ROOT: &str = "FX-ERR-ROOT";
pub const ERR_MISSING_CONTROLLER: &str = "FX-ERR-CONTROLLER";
pub const ERR_MISSING_UPDATE_TARGET: &str = "FX-ERR-UPDATE-TARGET";
pub const ERR_UNRESOLVED_INCLUDE: &str = "FX-ERR-INCLUDE";
pub const ERR_MISSING_IDENTIFIER: &str = "FX-ERR-IDENTIFIER";
pub const ERR_PARSE: &str = "FX-ERR-PARSE";
pub const ERR_IO: &str = "FX-ERR-IO";

fn get_guarantee(code: &str) -> &'static str {
    match code {
        ERR_MISSING_ROOT => "Every document has an instance declaration as its root element.",
        ERR_MISSING_CONTROLLER => "The root element of every document declares fx:controller.",
        ERR_MISSING_UPDATE_TARGET => {
            "Generated code is only attached to controllers the model knows about."
        }
        ERR_UNRESOLVED_INCLUDE => "Every fx:include source is a document of the same batch.",
        ERR_MISSING_IDENTIFIER => {
            "Every declaration, include and property is scanned before it is generated."
        }
        ERR_PARSE => "Documents are well-formed XML.",
        ERR_IO => "Discovered documents are readable.",
        _ => "Unknown invariant.",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LowerError {
    #[error("No root element found in {document}")]
    MissingRoot { document: String },

    #[error("No fx:controller attribute in {document}")]
    MissingController { document: String },

    #[error("No updater found for qualified name: {controller} (document {document})")]
    MissingUpdateTarget { controller: String, document: String },

    #[error("Unresolved include source '{key}': no scanned document registers it")]
    UnresolvedInclude { key: String },

    #[error("Element <{element}> has no identifier; scan the document before lowering it")]
    MissingIdentifier { element: String },

    #[error("Failed to parse {document}: {message}")]
    Parse { document: String, message: String },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
}

impl LowerError {
    pub fn code(&self) -> &'static str {
        match self {
            LowerError::MissingRoot { .. } => ERR_MISSING_ROOT,
            LowerError::MissingController { .. } => ERR_MISSING_CONTROLLER,
            LowerError::MissingUpdateTarget { .. } => ERR_MISSING_UPDATE_TARGET,
            LowerError::UnresolvedInclude { .. } => ERR_UNRESOLVED_INCLUDE,
            LowerError::MissingIdentifier { .. } => ERR_MISSING_IDENTIFIER,
            LowerError::Parse { .. } => ERR_PARSE,
            LowerError::Io { .. } => ERR_IO,
        }
    }

    pub fn guarantee(&self) -> &'static str {
        get_guarantee(self.code())
    }

    pub(crate) fn parse(document: &str, message: impl ToString) -> Self {
        LowerError::Parse {
            document: document.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LowerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_messages() {
        let err = LowerError::UnresolvedInclude {
            key: "Child.fxml".to_string(),
        };
        assert_eq!(err.code(), ERR_UNRESOLVED_INCLUDE);
        assert!(err.to_string().contains("Child.fxml"));
        assert_eq!(
            err.guarantee(),
            "Every fx:include source is a document of the same batch."
        );

        let err = LowerError::MissingController {
            document: "Main".to_string(),
        };
        assert_eq!(err.to_string(), "No fx:controller attribute in Main");
    }
}
