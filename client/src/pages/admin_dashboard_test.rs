use super::*;

#[test]
fn directory_lists_fixed_users_then_caller() {
    let me = Identity { uid: "a1".to_owned(), email: "admin@example.com".to_owned() };
    let rows = notify_targets(Some(&me));

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], NotifyTarget { uid: "mockuser1_uid".to_owned(), email: "user1@example.com".to_owned() });
    assert_eq!(rows[3].uid, "a1");
    assert_eq!(rows[3].email, "admin@example.com (You)");
}

#[test]
fn directory_without_caller_has_fixed_users_only() {
    assert_eq!(notify_targets(None).len(), 3);
}

#[test]
fn dashboard_text_is_shown_on_success() {
    assert_eq!(dashboard_outcome(Ok("hello admin".to_owned())), ("hello admin".to_owned(), None));
}

#[test]
fn dashboard_without_credential_explains_without_dialog() {
    let (text, notice) = dashboard_outcome(Err(ApiError::Forbidden("Not authenticated or not an admin.".to_owned())));
    assert_eq!(text, "Not authenticated or not an admin.");
    assert!(notice.is_none());
}

#[test]
fn dashboard_failure_shows_dialog() {
    let (text, notice) = dashboard_outcome(Err(ApiError::from_response(500, "")));
    assert_eq!(text, "Failed to fetch admin data.");
    let notice = notice.unwrap();
    assert_eq!(notice.message, "Failed to fetch admin data: HTTP error! Status: 500");
}

#[test]
fn local_rejection_is_not_prefixed() {
    let notice = failure_notice("Error", "Failed to set admin claim", &ApiError::Validation("User UID is required.".to_owned()));
    assert_eq!(notice.message, "User UID is required.");
}

#[test]
fn backend_rejection_is_prefixed() {
    let err = ApiError::from_response(403, "caller is not an admin");
    let notice = failure_notice("Error", "Failed to set admin claim", &err);
    assert_eq!(notice.message, "Failed to set admin claim: caller is not an admin");
}
