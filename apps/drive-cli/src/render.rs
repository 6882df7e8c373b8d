//! Terminal rendering of upload events and the share dialog.

use std::fmt::Write;

use crdrive_protocol::{Feedback, FeedbackKind};
use crdrive_share::{DialogState, ShareDialog, UserList};
use crdrive_upload::UploadEvent;

const BAR_WIDTH: usize = 24;

/// One line per event. Per-file acknowledgements are left to the log.
pub fn upload_event(event: &UploadEvent) -> Option<String> {
    match event {
        UploadEvent::Progress { percent, label } => {
            let filled = BAR_WIDTH * usize::from(*percent) / 100;
            Some(format!(
                "[{}{}] {label}",
                "#".repeat(filled),
                "-".repeat(BAR_WIDTH - filled)
            ))
        }
        UploadEvent::Status(feedback) => Some(feedback_line(feedback)),
        UploadEvent::ProgressHidden
        | UploadEvent::FileUploaded { .. }
        | UploadEvent::ReloadScheduled { .. } => None,
    }
}

pub fn feedback_line(feedback: &Feedback) -> String {
    let tag = match feedback.kind {
        FeedbackKind::Success => "ok",
        FeedbackKind::Error => "error",
        FeedbackKind::Info => "info",
    };
    format!("{tag}: {feedback}")
}

pub fn share_dialog(state: DialogState, dialog: &ShareDialog) -> String {
    let mut out = String::new();
    if let Some(target) = dialog.target {
        let _ = writeln!(out, "Share \"{}\" ({target})", dialog.title);
    }
    if state != DialogState::Error || !dialog.share_link.is_empty() {
        let _ = writeln!(out, "  link:       {}", dialog.share_link);
        let lock = if dialog.visibility_disabled() {
            " (owner only)"
        } else {
            ""
        };
        let _ = writeln!(out, "  visibility: {}{lock}", dialog.visibility);
        let _ = writeln!(out, "  shared with:");
        match &dialog.users {
            UserList::Placeholder(text) => {
                let _ = writeln!(out, "    {text}");
            }
            UserList::Rows(rows) => {
                for row in rows {
                    let remove = if row.removable { "  [remove]" } else { "" };
                    let _ = writeln!(
                        out,
                        "    {:<20} {}{remove}",
                        row.username,
                        row.access_level.label()
                    );
                }
            }
        }
        if dialog.add_form_disabled() {
            let _ = writeln!(out, "  add user:   unavailable (owner only)");
        } else {
            let _ = writeln!(out, "  add user:   available");
        }
    }
    if let Some(feedback) = &dialog.feedback {
        let _ = writeln!(out, "{}", feedback_line(feedback));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crdrive_protocol::{AccessLevel, ShareTarget, Visibility};
    use crdrive_share::UserRow;

    #[test]
    fn progress_bar() {
        let line = upload_event(&UploadEvent::Progress {
            percent: 50,
            label: "50% (1/2)".into(),
        })
        .unwrap();
        assert_eq!(line, format!("[{}{}] 50% (1/2)", "#".repeat(12), "-".repeat(12)));
        assert!(upload_event(&UploadEvent::ProgressHidden).is_none());
    }

    #[test]
    fn status_line() {
        let line = upload_event(&UploadEvent::Status(Feedback::error("Upload failed."))).unwrap();
        assert_eq!(line, "error: Upload failed.");
    }

    #[test]
    fn dialog_for_non_owner() {
        let dialog = ShareDialog {
            target: Some(ShareTarget::file(3)),
            title: "a.txt".into(),
            share_link: "https://drive.example/s/1".into(),
            visibility: Visibility::Public,
            is_owner: false,
            users: UserList::Rows(vec![UserRow {
                username: "bob".into(),
                access_level: AccessLevel::Read,
                removable: false,
            }]),
            ..Default::default()
        };
        let text = share_dialog(DialogState::Loaded, &dialog);
        assert!(text.starts_with("Share \"a.txt\" (file/3)\n"));
        assert!(text.contains("visibility: public (owner only)"));
        assert!(text.contains("    bob                  Read\n"));
        assert!(!text.contains("[remove]"));
        assert!(text.contains("add user:   unavailable (owner only)"));
    }

    #[test]
    fn dialog_for_owner_marks_removable_rows() {
        let dialog = ShareDialog {
            target: Some(ShareTarget::folder(4)),
            title: "Docs".into(),
            is_owner: true,
            users: UserList::Rows(vec![UserRow {
                username: "alice".into(),
                access_level: AccessLevel::Write,
                removable: true,
            }]),
            ..Default::default()
        };
        let text = share_dialog(DialogState::Loaded, &dialog);
        assert!(text.contains("    alice                Write  [remove]\n"));
        assert!(text.contains("visibility: private\n"));
        assert!(text.contains("add user:   available"));
    }

    #[test]
    fn dialog_load_error_shows_banner_only() {
        let dialog = ShareDialog {
            target: Some(ShareTarget::folder(1)),
            title: "Docs".into(),
            feedback: Some(Feedback::error("Could not load sharing settings.")),
            ..Default::default()
        };
        let text = share_dialog(DialogState::Error, &dialog);
        assert!(!text.contains("visibility"));
        assert!(text.ends_with("error: Could not load sharing settings.\n"));
    }
}
