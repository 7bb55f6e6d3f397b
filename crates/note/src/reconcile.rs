use crate::models::Frontmatter;

/// Outcome of comparing freshly fetched metadata against what is on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No note exists yet; write the fresh metadata verbatim.
    CreateNew(Frontmatter),
    /// Note exists and at least one field differs.
    Patch {
        merged: Frontmatter,
        changed: Vec<&'static str>,
    },
    /// Nothing differs; leave the file untouched.
    NoOp,
}

/// Decide what to do with one book's note.
///
/// Pure function over the two metadata values: the caller loads the existing
/// frontmatter (if any) and applies the returned action to disk. The
/// `updated` stamp and unrecognized keys are carried from the existing note
/// unchanged and never count as differences, so back-to-back runs with
/// identical feed data are a [`Action::NoOp`].
pub fn reconcile(existing: Option<&Frontmatter>, fresh: &Frontmatter) -> Action {
    let Some(existing) = existing else {
        return Action::CreateNew(fresh.clone());
    };

    let (merged, changed) = merge(existing, fresh);
    if changed.is_empty() {
        Action::NoOp
    } else {
        Action::Patch { merged, changed }
    }
}

/// Overlay fresh fields onto the existing mapping.
///
/// A field the fresh fetch did not report never clears what the note
/// already has; manual edits and legacy fields persist indefinitely.
fn merge(existing: &Frontmatter, fresh: &Frontmatter) -> (Frontmatter, Vec<&'static str>) {
    let mut merged = existing.clone();
    let mut changed = Vec::new();

    merge_list(&mut merged.author, &fresh.author, "author", &mut changed);
    merge_field(&mut merged.book_id, &fresh.book_id, "book_id", &mut changed);
    merge_field(
        &mut merged.book_description,
        &fresh.book_description,
        "book_description",
        &mut changed,
    );
    merge_field(&mut merged.cover, &fresh.cover, "cover", &mut changed);
    merge_field(
        &mut merged.date_last_read,
        &fresh.date_last_read,
        "date_last_read",
        &mut changed,
    );
    merge_list(&mut merged.format, &fresh.format, "format", &mut changed);
    merge_field(&mut merged.genre, &fresh.genre, "genre", &mut changed);
    merge_field(&mut merged.owned, &fresh.owned, "owned", &mut changed);
    merge_field(&mut merged.rating, &fresh.rating, "rating", &mut changed);
    merge_field(&mut merged.re_read, &fresh.re_read, "re_read", &mut changed);
    merge_field(
        &mut merged.series_name,
        &fresh.series_name,
        "series_name",
        &mut changed,
    );
    merge_field(
        &mut merged.series_number,
        &fresh.series_number,
        "series_number",
        &mut changed,
    );
    merge_field(&mut merged.status, &fresh.status, "status", &mut changed);
    merge_field(&mut merged.subtitle, &fresh.subtitle, "subtitle", &mut changed);
    // merged.updated and merged.extra stay as the existing note had them

    (merged, changed)
}

fn merge_field<T: Clone + PartialEq>(
    into: &mut Option<T>,
    fresh: &Option<T>,
    name: &'static str,
    changed: &mut Vec<&'static str>,
) {
    let Some(fresh) = fresh else { return };
    if into.as_ref() != Some(fresh) {
        *into = Some(fresh.clone());
        changed.push(name);
    }
}

fn merge_list(
    into: &mut Vec<String>,
    fresh: &[String],
    name: &'static str,
    changed: &mut Vec<&'static str>,
) {
    if fresh.is_empty() {
        return;
    }
    if into.as_slice() != fresh {
        *into = fresh.to_vec();
        changed.push(name);
    }
}
