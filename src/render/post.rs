// src/render/post.rs
// =============================================================================
// Turns one enriched issue into a Jekyll post.
//
// Output layout:
//
//   ---
//   layout: post
//   title: <title>
//   tags: [<label>, <label>]        <- only when the issue has labels
//   ---
//   (two blank lines)
//   <body>
//   <!-- comment #<id> -->          <- once per comment, in API order
//   <comment body>
//
// Every line ends with '\n'. Rendering is pure: the same issue always gives
// the same bytes, so re-running an export rewrites identical files.
// =============================================================================

use std::path::{Path, PathBuf};

use crate::github::Issue;

pub fn render_post(issue: &Issue) -> String {
    let mut post = String::new();

    post.push_str("---\n");
    post.push_str("layout: post\n");
    post.push_str(&format!("title: {}\n", issue.title));

    if !issue.labels.is_empty() {
        let tags: Vec<&str> = issue.labels.iter().map(|l| l.name.as_str()).collect();
        post.push_str(&format!("tags: [{}]\n", tags.join(", ")));
    }

    post.push_str("---\n");
    post.push_str("\n\n");
    post.push_str(issue.body.as_deref().unwrap_or(""));
    post.push('\n');

    for comment in &issue.comments_list {
        post.push_str(&format!("<!-- comment #{} -->\n", comment.id));
        post.push_str(comment.body.as_deref().unwrap_or(""));
        post.push('\n');
    }

    post
}

/// `<YYYY-MM-DD>-<number>.html`, date in UTC
pub fn post_file_name(issue: &Issue) -> String {
    format!("{}-{}.html", issue.created_at.format("%Y-%m-%d"), issue.number)
}

pub fn post_path(dir: &Path, issue: &Issue) -> PathBuf {
    dir.join(post_file_name(issue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn issue(number: u64, title: &str, labels: &[&str], created_at: &str) -> Issue {
        let labels: Vec<_> = labels.iter().map(|name| json!({ "name": name })).collect();
        serde_json::from_value(json!({
            "id": 9000 + number,
            "number": number,
            "title": title,
            "body": "Steps to reproduce",
            "created_at": created_at,
            "comments": 0,
            "labels": labels
        }))
        .unwrap()
    }

    #[test]
    fn test_no_labels_omits_tags_line() {
        let post = render_post(&issue(1, "Crash on boot", &[], "2023-03-05T10:00:00Z"));

        assert_eq!(
            post,
            "---\nlayout: post\ntitle: Crash on boot\n---\n\n\nSteps to reproduce\n"
        );
        assert!(!post.contains("tags:"));
    }

    #[test]
    fn test_single_label() {
        let post = render_post(&issue(2, "UI bug", &["bug"], "2023-03-05T10:00:00Z"));
        assert!(post.contains("\ntags: [bug]\n"));
    }

    #[test]
    fn test_labels_keep_order() {
        let post = render_post(&issue(3, "t", &["ui", "bug", "help wanted"], "2023-03-05T10:00:00Z"));
        assert!(post.starts_with("---\nlayout: post\ntitle: t\ntags: [ui, bug, help wanted]\n---\n"));
    }

    #[test]
    fn test_comments_rendered_in_order() {
        let comments = serde_json::from_value(json!([
            {"id": 11, "body": "Try rebooting"},
            {"id": 12, "body": "Fixed, thanks"}
        ]))
        .unwrap();
        let with_comments = issue(4, "Question", &[], "2023-03-05T10:00:00Z").with_comments(comments);

        let post = render_post(&with_comments);

        assert!(post.ends_with(
            "Steps to reproduce\n<!-- comment #11 -->\nTry rebooting\n<!-- comment #12 -->\nFixed, thanks\n"
        ));
        assert_eq!(post.matches("<!-- comment #").count(), 2);
    }

    #[test]
    fn test_null_bodies_render_as_empty_lines() {
        let comments = serde_json::from_value(json!([{"id": 1, "body": null}])).unwrap();
        let mut bare = issue(5, "Empty", &[], "2023-03-05T10:00:00Z").with_comments(comments);
        bare.body = None;

        let post = render_post(&bare);
        assert_eq!(post, "---\nlayout: post\ntitle: Empty\n---\n\n\n\n<!-- comment #1 -->\n\n");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let i = issue(6, "Same", &["a"], "2023-03-05T10:00:00Z");
        assert_eq!(render_post(&i), render_post(&i));
    }

    #[test]
    fn test_post_path() {
        let i = issue(42, "t", &[], "2023-03-05T10:00:00Z");
        assert_eq!(
            post_path(Path::new("_posts"), &i),
            PathBuf::from("_posts/2023-03-05-42.html")
        );
    }

    #[test]
    fn test_post_date_is_normalized_to_utc() {
        // 23:30 at UTC-05:00 is already the next day in UTC
        let i = issue(7, "t", &[], "2023-03-05T23:30:00-05:00");
        assert_eq!(post_file_name(&i), "2023-03-06-7.html");
    }
}
