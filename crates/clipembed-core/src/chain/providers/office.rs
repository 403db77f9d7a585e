//! Office documents, cloud storage previews and hosted presentations.

use url::Url;

use super::{host_matches, is_token, query_value, segments};
use crate::chain::Embed;
use crate::markup;

fn google_editor(url: &Url, kind: &str, note: &'static str) -> Option<Embed> {
    if url.host_str() != Some("docs.google.com") {
        return None;
    }
    let segs = segments(url);
    // `/document/d/<id>` or the multi-account form `/document/u/<n>/d/<id>`.
    let id = match segs.as_slice() {
        [k, "d", id, ..] if *k == kind => *id,
        [k, "u", _, "d", id, ..] if *k == kind => *id,
        _ => return None,
    };
    if !is_token(id) {
        return None;
    }
    Some(Embed::new(
        markup::iframe(&format!(
            "https://docs.google.com/{}/d/{}/preview",
            kind, id
        )),
        note,
    ))
}

/// Google Docs document → preview frame.
pub fn google_doc(url: &Url) -> Option<Embed> {
    google_editor(url, "document", "Google Doc")
}

/// Google Sheets spreadsheet → preview frame.
pub fn google_sheet(url: &Url) -> Option<Embed> {
    google_editor(url, "spreadsheets", "Google Sheet")
}

/// Google Slides deck → preview frame.
pub fn google_slides(url: &Url) -> Option<Embed> {
    google_editor(url, "presentation", "Google Slides deck")
}

/// `drive.google.com/file/d/<id>/view` or `drive.google.com/open?id=<id>`
pub fn google_drive(url: &Url) -> Option<Embed> {
    if url.host_str() != Some("drive.google.com") {
        return None;
    }
    let segs = segments(url);
    let id = match segs.as_slice() {
        ["file", "d", id, ..] | ["file", "u", _, "d", id, ..] => id.to_string(),
        ["open"] | ["uc"] => query_value(url, "id")?,
        _ => return None,
    };
    if !is_token(&id) {
        return None;
    }
    Some(Embed::new(
        markup::iframe(&format!("https://drive.google.com/file/d/{}/preview", id)),
        "Google Drive file",
    ))
}

/// `canva.com/design/<id>/<key>/...` → view-embed frame.
pub fn canva(url: &Url) -> Option<Embed> {
    if !host_matches(url, "canva.com") {
        return None;
    }
    match segments(url).as_slice() {
        ["design", id, key, ..] if is_token(id) && is_token(key) => Some(Embed::new(
            markup::iframe(&format!(
                "https://www.canva.com/design/{}/{}/view?embed",
                id, key
            )),
            "Canva presentation",
        )),
        _ => None,
    }
}
