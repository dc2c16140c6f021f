//! Registration, recovery, contact, report and statistics flows.

use std::cell::RefCell;

use ecoguard_core::{
    ApiClient, ApiConfig, ContactForm, Destination, FormError, PasswordRecoveryForm,
    RecoveryStep, RegisterForm, ReportForm, SiteStatistics, SubmissionController,
    SubmissionState,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller_for(server: &MockServer) -> SubmissionController {
    SubmissionController::new(ApiClient::new(ApiConfig::new(server.uri())).unwrap())
}

// ============================================================================
// Registration
// ============================================================================

fn register_form() -> RegisterForm {
    let mut form = RegisterForm::default();
    form.set_email("a@b.com");
    form.set_password("secret");
    form.set_confirm_password("secret");
    form.set_first_name("Анна");
    form.set_last_name("Иванова");
    form
}

#[tokio::test]
async fn test_register_navigates_to_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register/"))
        .and(body_json(json!({
            "email": "a@b.com",
            "password": "secret",
            "first_name": "Анна",
            "last_name": "Иванова"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "email": "a@b.com",
            "first_name": "Анна",
            "last_name": "Иванова"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let visited = RefCell::new(Vec::new());
    let nav = |to: Destination| visited.borrow_mut().push(to);

    let submitted = controller_for(&server)
        .submit(&register_form(), &nav)
        .await
        .unwrap();

    assert_eq!(submitted.payload["id"], 1);
    assert_eq!(*visited.borrow(), vec![Destination::Login]);
}

#[tokio::test]
async fn test_register_duplicate_email_surfaces_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Пользователь с таким email уже существует"
        })))
        .mount(&server)
        .await;

    let nav = |_: Destination| panic!("must not navigate");
    let err = controller_for(&server)
        .submit(&register_form(), &nav)
        .await
        .unwrap_err();

    assert_eq!(
        err.notice(),
        "Ошибка: Пользователь с таким email уже существует"
    );
}

#[tokio::test]
async fn test_register_mismatched_passwords_make_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = register_form();
    form.set_confirm_password("different");

    let nav = |_: Destination| panic!("must not navigate");
    let err = controller_for(&server).submit(&form, &nav).await.unwrap_err();
    assert!(matches!(err, FormError::Validation(_)));
}

// ============================================================================
// Password recovery
// ============================================================================

#[tokio::test]
async fn test_recovery_two_steps() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send-verification-code/"))
        .and(body_json(json!({"email": "a@b.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Код подтверждения отправлен на ваш email"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/reset-password/"))
        .and(body_json(json!({
            "email": "a@b.com",
            "code": "123456",
            "new_password": "fresh"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Пароль успешно сброшен"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let visited = RefCell::new(Vec::new());
    let nav = |to: Destination| visited.borrow_mut().push(to);

    let mut form = PasswordRecoveryForm::default();
    form.set_email("a@b.com");

    let sent = controller.submit(&form, &nav).await.unwrap();
    assert_eq!(sent.destination, None);
    assert!(visited.borrow().is_empty());
    // Sending the code does not end the flow
    assert_eq!(controller.state(), SubmissionState::Idle);

    form.advance();
    assert_eq!(form.step, RecoveryStep::ResetPassword);
    form.set_code("123456");
    form.set_new_password("fresh");
    form.set_confirm_password("fresh");

    controller.submit(&form, &nav).await.unwrap();
    assert_eq!(*visited.borrow(), vec![Destination::Login]);
}

#[tokio::test]
async fn test_recovery_expired_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reset-password/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Неверный код или код истёк"})),
        )
        .mount(&server)
        .await;

    let mut form = PasswordRecoveryForm::default();
    form.set_email("a@b.com");
    form.advance();
    form.set_code("000000");
    form.set_new_password("p");
    form.set_confirm_password("p");

    let nav = |_: Destination| panic!("must not navigate");
    let err = controller_for(&server).submit(&form, &nav).await.unwrap_err();
    assert_eq!(err.notice(), "Ошибка: Неверный код или код истёк");
}

// ============================================================================
// Contact message and incident report
// ============================================================================

#[tokio::test]
async fn test_contact_message_stays_on_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages/"))
        .and(body_json(json!({
            "phone_number": "+79990000000",
            "name": "Пётр",
            "message": "Свалка у реки"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "phone_number": "+79990000000",
            "name": "Пётр",
            "message": "Свалка у реки"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = ContactForm::default();
    form.set_name("Пётр");
    form.set_phone_number("+79990000000");
    form.set_message("Свалка у реки");

    let controller = controller_for(&server);
    let nav = |_: Destination| panic!("must not navigate");
    let submitted = controller.submit(&form, &nav).await.unwrap();

    assert_eq!(submitted.destination, None);
    assert_eq!(controller.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn test_incident_report_posts_base64_photo() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/applications/"))
        .and(body_json(json!({
            "photo": "/9j/",
            "phone_number": "+79990000000",
            "longitude": 37.5,
            "latitude": 55.75,
            "description": "Разлив"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9, "status": "Pending"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = ReportForm::default();
    form.set_phone_number("+79990000000");
    form.set_description("Разлив");
    form.set_latitude("55.75");
    form.set_longitude("37,5");
    form.set_photo(Some(vec![0xff, 0xd8, 0xff]));

    let nav = |_: Destination| panic!("must not navigate");
    let submitted = controller_for(&server).submit(&form, &nav).await.unwrap();
    assert_eq!(submitted.payload["status"], "Pending");
}

#[tokio::test]
async fn test_unexpected_payload_shape_is_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let mut form = ContactForm::default();
    form.set_name("a");
    form.set_phone_number("b");
    form.set_message("c");

    let nav = |_: Destination| panic!("must not navigate");
    let err = controller_for(&server).submit(&form, &nav).await.unwrap_err();
    assert_eq!(err.notice(), "Не удалось отправить сообщение.");
}

// ============================================================================
// Statistics
// ============================================================================

#[tokio::test]
async fn test_fetch_statistics() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statistics/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_users": 12,
            "total_applications": 40,
            "completed_applications": 10
        })))
        .mount(&server)
        .await;

    let api = ApiClient::new(ApiConfig::new(server.uri())).unwrap();
    let stats = api.fetch_statistics().await.unwrap();

    assert_eq!(
        stats,
        SiteStatistics {
            total_users: 12,
            total_applications: 40,
            completed_applications: 10
        }
    );
    assert_eq!(stats.completion_percent(), 25);
}

#[tokio::test]
async fn test_fetch_statistics_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statistics/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = ApiClient::new(ApiConfig::new(server.uri())).unwrap();
    let err = api.fetch_statistics().await.unwrap_err();
    assert_eq!(err.notice(), "Не удалось загрузить статистику.");
}

#[tokio::test]
async fn test_fetch_statistics_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statistics/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_users": "many"})))
        .mount(&server)
        .await;

    let api = ApiClient::new(ApiConfig::new(server.uri())).unwrap();
    assert!(matches!(
        api.fetch_statistics().await,
        Err(FormError::Decode(_))
    ));
}
