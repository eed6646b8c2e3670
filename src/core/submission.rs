use anyhow::{Context, bail};
use time::{Date, OffsetDateTime, macros::format_description};
use tracing::info;

use super::{
    store::{Brief, BriefRepository, NewBrief},
    tagline::{TaglineGenerator, tagline_or_placeholder},
};

/// Submit a brief. Side effects happen in fixed order with no
/// rollback: attachments are copied first, then the tagline call
/// runs, then the record is appended and persisted. An interruption
/// after the copies orphans the uploaded files.
///
/// A failed or empty tagline never fails the submission; the record
/// stores a placeholder string instead.
pub async fn submit_brief<R, G>(
    store: &R,
    generator: &G,
    new_brief: NewBrief,
) -> anyhow::Result<Brief>
where
    R: BriefRepository,
    G: TaglineGenerator,
{
    if new_brief.project_name.trim().is_empty() {
        bail!("Project Name is required.");
    }

    let mut files = Vec::with_capacity(new_brief.attachments.len());
    for source in &new_brief.attachments {
        files.push(store.store_upload(source).await?);
    }

    let tagline = tagline_or_placeholder(
        generator
            .generate_tagline(&new_brief.project_name)
            .await,
    );

    let brief = Brief {
        project_name: new_brief.project_name,
        deadline: new_brief.deadline,
        links: new_brief.links,
        files,
        tagline,
    };
    store.append(brief.clone()).await?;

    info!(project_name = %brief.project_name, files = brief.files.len(), "brief submitted");
    Ok(brief)
}

/// Today's date in the local timezone, falling back to UTC when the
/// local offset cannot be determined.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Parse a `YYYY-MM-DD` deadline, rejecting dates before `today`.
pub fn parse_deadline(input: &str, today: Date) -> anyhow::Result<Date> {
    let format = format_description!("[year]-[month]-[day]");
    let deadline = Date::parse(input.trim(), &format)
        .with_context(|| format!("Deadline must be a YYYY-MM-DD date, got {input:?}"))?;
    if deadline < today {
        bail!("Deadline must be today or later.");
    }
    Ok(deadline)
}
