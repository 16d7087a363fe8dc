//! Source patching: marker-guarded text insertions into generated files.
//!
//! Insertion points are named comment slots that the server templates
//! declare themselves (`// wizgen:imports`, `// wizgen:routes`). Patching
//! anchors on those slots instead of guessing at framework syntax, so the
//! same mechanism works for every backend.

/// Comment slot where import lines are inserted.
pub const IMPORTS_SLOT: &str = "// wizgen:imports";
/// Comment slot where route registrations are inserted.
pub const ROUTES_SLOT: &str = "// wizgen:routes";

/// Where an insertion lands relative to its anchor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

/// One insertion: put `text` next to the first line containing `anchor`,
/// unless `marker` is already present anywhere in the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub anchor: String,
    pub text: String,
    pub marker: String,
    pub placement: Placement,
}

impl Insertion {
    pub fn after(
        anchor: impl Into<String>,
        text: impl Into<String>,
        marker: impl Into<String>,
    ) -> Self {
        Self {
            anchor: anchor.into(),
            text: text.into(),
            marker: marker.into(),
            placement: Placement::After,
        }
    }

    pub fn before(
        anchor: impl Into<String>,
        text: impl Into<String>,
        marker: impl Into<String>,
    ) -> Self {
        Self {
            anchor: anchor.into(),
            text: text.into(),
            marker: marker.into(),
            placement: Placement::Before,
        }
    }
}

/// Apply a list of insertions to `content`.
///
/// Idempotent: an insertion whose marker is already present is skipped, and
/// consecutive repeats of an inserted line left behind by earlier passes are
/// collapsed to one. Lines the patcher never inserted are left alone, even
/// when duplicated. An anchor that never occurs leaves the content untouched
/// for that insertion.
pub fn apply_insertions(content: &str, insertions: &[Insertion]) -> String {
    let mut out = content.to_string();
    for insertion in insertions {
        if out.contains(&insertion.marker) {
            continue;
        }
        out = insert_at_anchor(&out, insertion);
    }
    collapse_inserted_duplicates(&out, insertions)
}

fn insert_at_anchor(content: &str, insertion: &Insertion) -> String {
    let mut lines: Vec<&str> = content.lines().collect();
    let Some(idx) = lines.iter().position(|l| l.contains(&insertion.anchor)) else {
        return content.to_string();
    };

    let at = match insertion.placement {
        Placement::Before => idx,
        Placement::After => idx + 1,
    };
    lines.insert(at, &insertion.text);

    let mut result = lines.join("\n");
    if content.ends_with('\n') {
        result.push('\n');
    }
    result
}

/// Collapse consecutive repeats of lines matching one of the insertions'
/// texts. Only patcher-owned lines qualify; everything else passes through.
fn collapse_inserted_duplicates(content: &str, insertions: &[Insertion]) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in content.lines() {
        if out.last() == Some(&line) && insertions.iter().any(|i| i.text == line) {
            continue;
        }
        out.push(line);
    }
    let mut result = out.join("\n");
    if content.ends_with('\n') {
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVER: &str = "\
const express = require('express');
// wizgen:imports

const app = express();

// wizgen:routes

app.listen(3000);
";

    fn auth_insertions() -> Vec<Insertion> {
        vec![
            Insertion::after(
                IMPORTS_SLOT,
                "const authRoutes = require('./routes/auth.routes');",
                "authRoutes",
            ),
            Insertion::after(
                ROUTES_SLOT,
                "app.use('/api/auth', authRoutes);",
                "/api/auth",
            ),
        ]
    }

    #[test]
    fn inserts_after_slots() {
        let patched = apply_insertions(SERVER, &auth_insertions());
        assert!(patched.contains("// wizgen:imports\nconst authRoutes"));
        assert!(patched.contains("// wizgen:routes\napp.use('/api/auth'"));
    }

    #[test]
    fn applying_twice_equals_applying_once() {
        let insertions = auth_insertions();
        let once = apply_insertions(SERVER, &insertions);
        let twice = apply_insertions(&once, &insertions);
        assert_eq!(once, twice);
    }

    #[test]
    fn marker_presence_skips_insertion() {
        let already = SERVER.replace(
            "// wizgen:imports",
            "// wizgen:imports\nconst authRoutes = require('./routes/auth.routes');",
        );
        let patched = apply_insertions(&already, &auth_insertions());
        assert_eq!(patched.matches("authRoutes =").count(), 1);
    }

    #[test]
    fn missing_anchor_is_a_no_op() {
        let patched = apply_insertions(
            "no slots here\n",
            &[Insertion::after("// absent", "x", "x-marker")],
        );
        assert_eq!(patched, "no slots here\n");
    }

    #[test]
    fn before_placement_lands_above_anchor() {
        let patched = apply_insertions(
            "line one\nanchor line\n",
            &[Insertion::before("anchor", "inserted", "inserted")],
        );
        assert_eq!(patched, "line one\ninserted\nanchor line\n");
    }

    #[test]
    fn unrelated_duplicate_lines_survive() {
        let content = "retry();\nretry();\nconst app = express();\n";
        assert_eq!(apply_insertions(content, &[]), content);
        assert_eq!(apply_insertions(content, &auth_insertions()), content);
    }

    #[test]
    fn repeated_inserted_line_collapses() {
        let doubled = SERVER.replace(
            "// wizgen:routes",
            "// wizgen:routes\napp.use('/api/auth', authRoutes);\napp.use('/api/auth', authRoutes);",
        );
        let patched = apply_insertions(&doubled, &auth_insertions());
        assert_eq!(patched.matches("app.use('/api/auth'").count(), 1);
    }

    #[test]
    fn blank_lines_are_not_collapsed() {
        let content = "a\n\n\nb\n";
        assert_eq!(apply_insertions(content, &auth_insertions()), content);
    }
}
