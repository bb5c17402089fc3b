mod helpers;

use app::pages::home::{HomePage, StatusView};
use serde_json::json;

#[tokio::test]
async fn active_session_resolves_into_the_session_view() {
    let mock = helpers::serve(
        "/api/session-info",
        json!({
            "success": true,
            "data": {
                "has_session": true,
                "session": {
                    "date": "2026-01-30",
                    "day": "Friday",
                    "department": "Networking",
                    "time": "13:30 - 15:30 EAT",
                    "attendance_window": {
                        "is_active": true,
                        "time_remaining": "4h 12m"
                    }
                }
            }
        }),
    )
    .await;
    let mut page = HomePage::default();

    page.load(&mock.client()).await;

    match page.view() {
        StatusView::Session(details) => {
            assert_eq!(details.department, "Networking");
            assert!(details.attendance_window.is_active);
        }
        other => panic!("expected a session view, got {other:?}"),
    }
    assert_eq!(mock.hits(), 1, "exactly one request per load");
}

#[tokio::test]
async fn closed_window_keeps_the_reason() {
    let mock = helpers::serve(
        "/api/session-info",
        json!({
            "success": true,
            "data": {
                "has_session": true,
                "session": {
                    "date": "2026-01-30",
                    "day": "Friday",
                    "department": "Networking",
                    "time": "13:30 - 15:30 EAT",
                    "attendance_window": {
                        "is_active": false,
                        "reason": "Attendance marking starts at 13:00 on Friday"
                    }
                }
            }
        }),
    )
    .await;
    let mut page = HomePage::default();

    page.load(&mock.client()).await;

    match page.view() {
        StatusView::Session(details) => {
            assert!(!details.attendance_window.is_active);
            assert_eq!(
                details.attendance_window.reason.as_deref(),
                Some("Attendance marking starts at 13:00 on Friday")
            );
        }
        other => panic!("expected a session view, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_session_resolves_into_the_fallback_view() {
    let mock = helpers::serve(
        "/api/session-info",
        json!({
            "success": true,
            "data": {
                "has_session": false,
                "message": "No session scheduled for this week",
                "next_session": {"date": "2026-02-06", "department": "Programming"}
            }
        }),
    )
    .await;
    let mut page = HomePage::default();

    page.load(&mock.client()).await;

    match page.view() {
        StatusView::NoSession {
            message,
            next_session,
        } => {
            assert_eq!(message, "No session scheduled for this week");
            assert_eq!(next_session.as_ref().unwrap().date, "2026-02-06");
        }
        other => panic!("expected the fallback view, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_never_leaves_the_page_loading() {
    let api = helpers::unreachable_client().await;
    let mut page = HomePage::default();

    page.load(&api).await;

    assert!(matches!(page.view(), StatusView::Unavailable));
}

#[tokio::test]
async fn server_rejection_renders_as_unavailable() {
    let mock = helpers::serve(
        "/api/session-info",
        json!({
            "success": false,
            "error": {"code": "UNKNOWN_ERROR", "message": "An unexpected error occurred"}
        }),
    )
    .await;
    let mut page = HomePage::default();

    page.load(&mock.client()).await;

    assert!(matches!(page.view(), StatusView::Unavailable));
}
