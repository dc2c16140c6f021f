//! Login submission tests against a mock backend.

use std::cell::RefCell;
use std::net::TcpListener;
use std::time::Duration;

use ecoguard_core::error::{FILL_ALL_FIELDS, NETWORK_FAILURE};
use ecoguard_core::{
    ApiClient, ApiConfig, Destination, FormError, LoginForm, SubmissionController,
    SubmissionState,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Records every navigation request.
#[derive(Default)]
struct RecordingNavigator {
    visited: RefCell<Vec<Destination>>,
}

impl ecoguard_core::Navigate for RecordingNavigator {
    fn navigate(&self, to: Destination) {
        self.visited.borrow_mut().push(to);
    }
}

impl RecordingNavigator {
    fn visited(&self) -> Vec<Destination> {
        self.visited.borrow().clone()
    }
}

fn controller_for(server: &MockServer) -> SubmissionController {
    SubmissionController::new(ApiClient::new(ApiConfig::new(server.uri())).unwrap())
}

fn login_form(email: &str, password: &str) -> LoginForm {
    let mut form = LoginForm::default();
    form.set_email(email);
    form.set_password(password);
    form
}

/// An address nothing is listening on.
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn test_success_marker_navigates_to_personal_account_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .and(body_json(json!({"email": "a@b.com", "password": "x", "rememberMe": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Вход успешен"})))
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let nav = RecordingNavigator::default();

    let submitted = controller
        .submit(&login_form("a@b.com", "x"), &nav)
        .await
        .unwrap();

    assert_eq!(submitted.destination, Some(Destination::PersonalAccount));
    assert_eq!(nav.visited(), vec![Destination::PersonalAccount]);
    assert_eq!(controller.state(), SubmissionState::Succeeded);
}

#[tokio::test]
async fn test_wrong_message_is_failure_without_navigation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "bad"})))
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let nav = RecordingNavigator::default();
    let form = login_form("a@b.com", "x");

    let err = controller.submit(&form, &nav).await.unwrap_err();

    assert_eq!(err.notice(), "Неверный email или пароль!");
    assert!(nav.visited().is_empty());
    assert_eq!(controller.state(), SubmissionState::Failed);
    // Form state is left intact for a retry
    assert_eq!(form, login_form("a@b.com", "x"));
}

#[tokio::test]
async fn test_empty_fields_make_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let nav = RecordingNavigator::default();

    for (email, password) in [("", ""), ("a@b.com", ""), ("", "x")] {
        let err = controller
            .submit(&login_form(email, password), &nav)
            .await
            .unwrap_err();
        assert_eq!(err, FormError::Validation(FILL_ALL_FIELDS.to_string()));
    }

    assert!(nav.visited().is_empty());
    assert_eq!(controller.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn test_server_detail_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Неверные учетные данные"})),
        )
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let nav = RecordingNavigator::default();

    let err = controller
        .submit(&login_form("a@b.com", "wrong"), &nav)
        .await
        .unwrap_err();

    assert!(matches!(err, FormError::Rejected { status: 400, .. }));
    assert_eq!(err.notice(), "Ошибка: Неверные учетные данные");
    assert!(nav.visited().is_empty());
}

#[tokio::test]
async fn test_network_failure_shows_generic_notice() {
    let controller =
        SubmissionController::new(ApiClient::new(ApiConfig::new(closed_port_url())).unwrap());
    let nav = RecordingNavigator::default();

    let err = controller
        .submit(&login_form("a@b.com", "x"), &nav)
        .await
        .unwrap_err();

    assert!(matches!(err, FormError::Network(_)));
    assert_eq!(err.notice(), NETWORK_FAILURE);
    assert!(nav.visited().is_empty());
    assert_eq!(controller.state(), SubmissionState::Failed);
}

#[tokio::test]
async fn test_retry_after_failure_can_succeed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .and(body_json(json!({"email": "a@b.com", "password": "wrong", "rememberMe": false})))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "no"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .and(body_json(json!({"email": "a@b.com", "password": "right", "rememberMe": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Вход успешен"})))
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let nav = RecordingNavigator::default();

    assert!(controller
        .submit(&login_form("a@b.com", "wrong"), &nav)
        .await
        .is_err());
    assert!(controller
        .submit(&login_form("a@b.com", "right"), &nav)
        .await
        .is_ok());
    assert_eq!(nav.visited(), vec![Destination::PersonalAccount]);
}

#[tokio::test]
async fn test_duplicate_submit_while_in_flight_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Вход успешен"}))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let nav = RecordingNavigator::default();
    let form = login_form("a@b.com", "x");

    let (first, second) = tokio::join!(controller.submit(&form, &nav), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.submit(&form, &nav).await
    });

    assert!(first.is_ok());
    assert_eq!(second.unwrap_err(), FormError::InFlight);
    assert_eq!(nav.visited(), vec![Destination::PersonalAccount]);
}

#[tokio::test]
async fn test_submit_after_navigation_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Вход успешен"})))
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let nav = RecordingNavigator::default();
    let form = login_form("a@b.com", "x");

    controller.submit(&form, &nav).await.unwrap();
    assert_eq!(
        controller.submit(&form, &nav).await.unwrap_err(),
        FormError::InFlight
    );
    assert_eq!(nav.visited().len(), 1);
}

#[tokio::test]
async fn test_custom_login_marker() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&server)
        .await;

    let config = ApiConfig::new(server.uri()).with_login_marker("ok");
    let controller = SubmissionController::new(ApiClient::new(config).unwrap());
    let nav = RecordingNavigator::default();

    controller
        .submit(&login_form("a@b.com", "x"), &nav)
        .await
        .unwrap();
    assert_eq!(nav.visited(), vec![Destination::PersonalAccount]);
}
