use estatelist::api::{DeletePrompt, FormOutcome, FormStatus, PropertyPage, UploadResponse, UsernameCheck};

#[test]
fn test_parse_upload_success_reply() {
    let body = r#"{"status": "success", "image_id": 12, "url": "/media/12.jpg", "caption": "Front"}"#;
    let reply: UploadResponse = serde_json::from_str(body).unwrap();
    assert_eq!(reply.status, "success");
    assert_eq!(reply.image_id, Some(12));
    assert_eq!(reply.url.as_deref(), Some("/media/12.jpg"));
    assert_eq!(reply.caption.as_deref(), Some("Front"));
}

#[test]
fn test_parse_upload_error_reply() {
    let body = r#"{"status": "error", "message": "Unsupported format"}"#;
    let reply: UploadResponse = serde_json::from_str(body).unwrap();
    assert_eq!(reply.status, "error");
    assert_eq!(reply.message.as_deref(), Some("Unsupported format"));
    assert!(reply.image_id.is_none());
}

#[test]
fn test_parse_form_outcome_with_field_errors() {
    let body = r#"{"status": "error", "errors": {"email": "Enter a valid email address."}}"#;
    let outcome: FormOutcome = serde_json::from_str(body).unwrap();
    assert_eq!(outcome.status, FormStatus::Error);
    assert_eq!(
        outcome.errors.get("email").map(String::as_str),
        Some("Enter a valid email address.")
    );
    assert!(outcome.message.is_none());
}

#[test]
fn test_parse_form_outcome_success() {
    let body = r#"{"status": "success", "message": "Settings updated successfully"}"#;
    let outcome: FormOutcome = serde_json::from_str(body).unwrap();
    assert_eq!(outcome.status, FormStatus::Success);
    assert!(outcome.errors.is_empty());
}

#[test]
fn test_parse_page_bootstrap() {
    let body = r#"{
        "property": {"id": 7, "title": "Seaview Estate"},
        "images": [
            {"image_id": 1, "url": "/media/a.jpg", "caption": "front", "is_primary": true},
            {"image_id": 2, "url": "/media/b.jpg"}
        ],
        "csrf_token": "abc123"
    }"#;
    let page: PropertyPage = serde_json::from_str(body).unwrap();
    assert_eq!(page.property.id, 7);
    assert_eq!(page.property.description, "");
    assert_eq!(page.images.len(), 2);
    assert!(page.images[0].is_primary);
    assert!(!page.images[1].is_primary);
    assert_eq!(page.csrf_token, "abc123");
}

#[test]
fn test_parse_username_check() {
    let check: UsernameCheck = serde_json::from_str(r#"{"exists": true}"#).unwrap();
    assert!(check.exists);
}

#[test]
fn test_delete_prompt_strips_markup() {
    let prompt = DeletePrompt {
        html: "<p>Are you sure you want to delete <strong>tenant@example.com</strong>?</p>".to_string(),
    };
    assert_eq!(
        prompt.text(),
        "Are you sure you want to delete tenant@example.com ?"
    );
}
