//! Report assembly.
//!
//! Runs every extraction step against one snapshot and merges the results
//! with the caller-supplied URL and status code. A step either succeeds
//! completely or the whole assembly fails: no partial report is produced.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use chrono::{SecondsFormat, Utc};
use tracing::{debug, warn};

use crate::error::{Error, ExtractError, Result, Stage};
use crate::metadata;
use crate::options::Options;
use crate::render_type;
use crate::result::{PageReport, ReportMeta, StatusCode, TextMetrics};
use crate::selector;
use crate::snapshot::PageSnapshot;
use crate::text;

/// Build a report for `snapshot`.
///
/// `url` is embedded verbatim; it is not used for link resolution, which
/// follows the snapshot's own document URL.
pub(crate) fn assemble(
    url: &str,
    status_code: StatusCode,
    snapshot: Option<&PageSnapshot>,
    options: &Options,
) -> Result<PageReport> {
    let snapshot = snapshot.ok_or(Error::NoTargetContext)?;

    let metadata = run_stage(Stage::Metadata, || Ok(metadata::extract_metadata(snapshot)))?;

    let (full_text, render_type) = run_stage(Stage::RenderType, || {
        let full_text = render_type::body_text(snapshot);
        let render_type = render_type::classify_with_text(snapshot, &full_text, options);
        Ok((full_text, render_type))
    })?;

    let (full_page, main_content) = run_stage(Stage::ContentMetrics, || {
        let is_cjk = text::detect_cjk(snapshot, &full_text, options.cjk_ratio_threshold);
        let full = text::count_chars_and_words(&full_text, is_cjk);
        let main_text = selector::isolate_main(snapshot, options);
        let main = text::count_chars_and_words(&main_text, is_cjk);
        Ok((full, clamp_to_full(main, full)))
    })?;

    let json_ld_list = run_stage(Stage::StructuredData, || {
        Ok(metadata::extract_json_ld(snapshot, options.max_json_ld_depth))
    })?;

    debug!(
        %render_type,
        full_chars = full_page.characters,
        main_chars = main_content.characters,
        json_ld_blocks = json_ld_list.len(),
        "page report assembled"
    );

    Ok(PageReport {
        url: url.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        status_code,
        meta: ReportMeta::default(),
        render_type,
        page_title: metadata.page_title,
        canonical: metadata.canonical,
        charset: metadata.charset,
        content_language: metadata.content_language,
        seo_metas: metadata.seo_metas,
        hreflang: metadata.hreflang,
        full_page_characters: full_page.characters,
        full_page_words: full_page.words,
        main_content_characters: main_content.characters,
        main_content_words: main_content.words,
        json_ld_list,
    })
}

/// Main-content counts never exceed the full-page counts. If either count
/// does, both are replaced by the full-page ones.
#[must_use]
pub(crate) fn clamp_to_full(main: TextMetrics, full: TextMetrics) -> TextMetrics {
    if main.characters > full.characters || main.words > full.words {
        debug!(?main, ?full, "main content exceeds full page, clamping");
        full
    } else {
        main
    }
}

/// Run one step, mapping its error or a panic to [`Error::ExtractionFailed`].
fn run_stage<T>(
    stage: Stage,
    step: impl FnOnce() -> std::result::Result<T, ExtractError>,
) -> Result<T> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(step))
        .unwrap_or_else(|payload| Err(ExtractError::Panicked(panic_message(payload.as_ref()))));

    outcome.map_err(|source| {
        warn!(%stage, error = %source, "extraction step failed");
        Error::ExtractionFailed { stage, source }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
