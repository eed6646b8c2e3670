mod client;

pub use client::{
    API_TOKEN_VAR, DEFAULT_ENDPOINT, DEFAULT_MODEL, TaglineClient, TaglineConfig, TaglineError,
};

/// Stored in the record when the model answered with empty content.
pub const EMPTY_TAGLINE_PLACEHOLDER: &str =
    "(AI returned empty tagline — try a different model or prompt)";

/// The seam the submission flow generates taglines through; the GUI
/// wires in [`TaglineClient`], tests wire in stubs.
pub trait TaglineGenerator: 'static {
    fn generate_tagline(
        &self,
        project_name: &str,
    ) -> impl Future<Output = Result<String, TaglineError>> + Send;
}

pub(crate) fn tagline_prompt(project_name: &str) -> String {
    format!(
        "Create a catchy tagline for a project named '{project_name}'. \
         It must be a single sentence, under 140 characters, and suitable for marketing. \
         Output only the tagline."
    )
}

/// Collapse a generation result into the user-visible tagline string.
/// A brief always stores a non-empty tagline: failures become
/// placeholder text instead of failing the submission.
pub fn tagline_or_placeholder(result: Result<String, TaglineError>) -> String {
    match result {
        Ok(tagline) => tagline,
        Err(TaglineError::EmptyResponse) => EMPTY_TAGLINE_PLACEHOLDER.to_string(),
        Err(err) => format!("(AI error: {err})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_project_name() {
        let prompt = tagline_prompt("Acme");
        assert!(prompt.contains("'Acme'"));
        assert!(prompt.contains("under 140 characters"));
    }

    #[test]
    fn success_passes_through() {
        let tagline = tagline_or_placeholder(Ok("Acme: Built to last.".to_string()));
        assert_eq!(tagline, "Acme: Built to last.");
    }

    #[test]
    fn empty_response_uses_fixed_placeholder() {
        let tagline = tagline_or_placeholder(Err(TaglineError::EmptyResponse));
        assert_eq!(tagline, EMPTY_TAGLINE_PLACEHOLDER);
    }

    #[test]
    fn failure_embeds_error_detail() {
        let tagline = tagline_or_placeholder(Err(TaglineError::Server {
            status: 503,
            body: "backend unavailable".to_string(),
        }));
        assert!(tagline.starts_with("(AI error:"));
        assert!(tagline.contains("503"));
        assert!(tagline.contains("backend unavailable"));
    }
}
