//! Integration tests for the submission flow.
//!
//! Tests cover:
//! - Appending exactly one record per valid submission
//! - Rejecting empty/whitespace-only project names before any side effect
//! - The exact stored record for a fixed-generator submission
//! - Placeholder taglines when generation fails or comes back empty

mod common;

use briefly::{EMPTY_TAGLINE_PLACEHOLDER, NewBrief};
use time::macros::date;

use common::*;

#[tokio::test]
async fn test_submission_appends_one_record() -> anyhow::Result<()> {
    let (store, _dir) = create_test_store();
    assert_eq!(store.load().await?.len(), 0);

    submit_brief(&store, &FixedTagline("Go!"), make_new_brief("First")).await?;
    assert_eq!(store.load().await?.len(), 1);

    submit_brief(&store, &FixedTagline("Go again!"), make_new_brief("Second")).await?;
    let briefs = store.load().await?;
    assert_eq!(briefs.len(), 2);
    assert_eq!(briefs[0].project_name, "First");
    assert_eq!(briefs[1].project_name, "Second");

    Ok(())
}

#[tokio::test]
async fn test_empty_project_name_is_rejected() -> anyhow::Result<()> {
    let (store, _dir) = create_test_store();

    let result = submit_brief(&store, &FixedTagline("n/a"), make_new_brief("")).await;
    assert!(result.is_err(), "Empty name should not submit");
    assert_eq!(store.load().await?.len(), 0);

    let result = submit_brief(&store, &FixedTagline("n/a"), make_new_brief("   \t ")).await;
    assert!(result.is_err(), "Whitespace-only name should not submit");
    assert_eq!(store.load().await?.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_stored_record_matches_submission() -> anyhow::Result<()> {
    let (store, _dir) = create_test_store();

    let new_brief = NewBrief {
        project_name: "Acme".to_string(),
        deadline: date!(2025 - 01 - 01),
        links: String::new(),
        attachments: Vec::new(),
    };
    let submitted = submit_brief(&store, &FixedTagline("Acme: Built to last."), new_brief).await?;

    let briefs = store.load().await?;
    assert_eq!(briefs.len(), 1);
    assert_eq!(briefs[0], submitted);
    assert_eq!(briefs[0].project_name, "Acme");
    assert_eq!(briefs[0].deadline, date!(2025 - 01 - 01));
    assert_eq!(briefs[0].links, "");
    assert!(briefs[0].files.is_empty());
    assert_eq!(briefs[0].tagline, "Acme: Built to last.");

    // The wire form is a JSON array of objects with the exact keys,
    // deadline serialized as YYYY-MM-DD.
    let raw = std::fs::read(store.data_file())?;
    let value: serde_json::Value = serde_json::from_slice(&raw)?;
    assert_eq!(value[0]["project_name"], "Acme");
    assert_eq!(value[0]["deadline"], "2025-01-01");
    assert_eq!(value[0]["links"], "");
    assert_eq!(value[0]["files"], serde_json::json!([]));
    assert_eq!(value[0]["tagline"], "Acme: Built to last.");

    Ok(())
}

#[tokio::test]
async fn test_generator_failure_still_persists() -> anyhow::Result<()> {
    let (store, _dir) = create_test_store();

    let submitted = submit_brief(&store, &FailingTagline, make_new_brief("Acme")).await?;

    assert!(!submitted.tagline.is_empty());
    assert!(submitted.tagline.starts_with("(AI error:"));
    assert!(submitted.tagline.contains("inference backend unavailable"));

    let briefs = store.load().await?;
    assert_eq!(briefs.len(), 1);
    assert_eq!(briefs[0].tagline, submitted.tagline);

    Ok(())
}

#[tokio::test]
async fn test_empty_generation_uses_placeholder() -> anyhow::Result<()> {
    let (store, _dir) = create_test_store();

    let submitted = submit_brief(&store, &EmptyTagline, make_new_brief("Acme")).await?;
    assert_eq!(submitted.tagline, EMPTY_TAGLINE_PLACEHOLDER);
    assert_eq!(store.load().await?.len(), 1);

    Ok(())
}
