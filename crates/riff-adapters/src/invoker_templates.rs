//! Built-in Dockerfile templates, one per invoker.
//!
//! Templates use `{{KEY}}` placeholders filled from a
//! [`RenderContext`](riff_core::domain::RenderContext). Every language in the
//! registry must have an entry here; `every_language_has_a_template` checks it.

use riff_core::domain::Language;

/// A Dockerfile template for one language.
#[derive(Debug, Clone, Copy)]
pub struct InvokerTemplate {
    pub language: Language,
    pub dockerfile: &'static str,
}

const COMMAND: &str = r#"FROM {{INVOKER_IMAGE}}
ARG FUNCTION_URI="/{{ARTIFACT_FILE}}"
ADD {{ARTIFACT}} /
ENV FUNCTION_URI $FUNCTION_URI
"#;

const NODE: &str = r#"FROM {{INVOKER_IMAGE}}
ENV FUNCTION_URI /functions/{{ARTIFACT_FILE}}
ADD {{ARTIFACT}} ${FUNCTION_URI}
"#;

const PYTHON: &str = r#"FROM {{INVOKER_IMAGE}}
ARG FUNCTION_MODULE={{ARTIFACT_FILE}}
ARG FUNCTION_HANDLER={{HANDLER}}
ADD ./{{ARTIFACT}} /
ENV FUNCTION_URI file:///${FUNCTION_MODULE}?handler=${FUNCTION_HANDLER}
"#;

const JAVA: &str = r#"FROM {{INVOKER_IMAGE}}
ARG FUNCTION_JAR=/functions/{{ARTIFACT_FILE}}
ARG FUNCTION_CLASS={{HANDLER}}
ADD {{ARTIFACT}} $FUNCTION_JAR
ENV FUNCTION_URI file://${FUNCTION_JAR}?handler=${FUNCTION_CLASS}
"#;

const GO: &str = r#"FROM {{INVOKER_IMAGE}}
ARG FUNCTION_URI="file:///{{ARTIFACT_FILE}}?handler={{HANDLER}}"
ADD {{ARTIFACT}} /
ENV FUNCTION_URI $FUNCTION_URI
"#;

pub static INVOKER_TEMPLATES: &[InvokerTemplate] = &[
    InvokerTemplate {
        language: Language::Command,
        dockerfile: COMMAND,
    },
    InvokerTemplate {
        language: Language::Node,
        dockerfile: NODE,
    },
    InvokerTemplate {
        language: Language::Python,
        dockerfile: PYTHON,
    },
    InvokerTemplate {
        language: Language::Java,
        dockerfile: JAVA,
    },
    InvokerTemplate {
        language: Language::Go,
        dockerfile: GO,
    },
];

/// The Dockerfile template for `language`, if one is registered.
pub fn dockerfile_for(language: Language) -> Option<&'static str> {
    INVOKER_TEMPLATES
        .iter()
        .find(|t| t.language == language)
        .map(|t| t.dockerfile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_template() {
        for language in Language::ALL {
            let template = dockerfile_for(language)
                .unwrap_or_else(|| panic!("no Dockerfile template for {language}"));
            assert!(template.starts_with("FROM {{INVOKER_IMAGE}}\n"));
            assert!(template.contains("{{ARTIFACT"));
        }
    }
}
