//! Requests rejected before any database access

use actix_web::{body::MessageBody, dev::ServiceResponse, http::StatusCode, test};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

mod common;

use common::{TestContext, init_app};

async fn assert_rejected<B: MessageBody>(
    resp: ServiceResponse<B>,
    expected: StatusCode,
    message_fragment: &str,
) {
    assert_eq!(resp.status(), expected);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["data"], Value::Null);
    let message = body["message"].as_str().unwrap_or_default();
    assert!(
        message.contains(message_fragment),
        "message {:?} does not contain {:?}",
        message,
        message_fragment
    );
}

#[actix_web::test]
async fn payment_amount_must_be_positive() {
    let ctx = TestContext::lazy();
    let app = init_app!(ctx);
    let user_id = Uuid::new_v4();

    for amount in [json!("0"), json!("-10.00"), Value::Null] {
        let req = test::TestRequest::post()
            .uri("/api/v1/payments")
            .insert_header(ctx.bearer(user_id))
            .set_json(json!({ "amount": amount, "description": "Advance" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_rejected(resp, StatusCode::BAD_REQUEST, "Invalid amount").await;
    }
}

#[actix_web::test]
async fn work_day_amounts_must_not_be_negative() {
    let ctx = TestContext::lazy();
    let app = init_app!(ctx);
    let user_id = Uuid::new_v4();

    let req = test::TestRequest::post()
        .uri("/api/v1/work-days")
        .insert_header(ctx.bearer(user_id))
        .set_json(json!({ "workDate": "2024-02-10", "salary": "-1.00" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "salary").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/work-days/bonus")
        .insert_header(ctx.bearer(user_id))
        .set_json(json!({ "workDate": "2024-02-10", "bonus": "-0.50" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "bonus").await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/work-days/{}", Uuid::new_v4()))
        .insert_header(ctx.bearer(user_id))
        .set_json(json!({ "bonus": "-5" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "bonus").await;
}

#[actix_web::test]
async fn salary_entry_requires_salary() {
    let ctx = TestContext::lazy();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/work-days/salary")
        .insert_header(ctx.bearer(Uuid::new_v4()))
        .set_json(json!({ "workDate": "2024-02-10" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "salary is required").await;
}

#[actix_web::test]
async fn bonus_amount_must_be_positive() {
    let ctx = TestContext::lazy();
    let app = init_app!(ctx);
    let user_id = Uuid::new_v4();

    for amount in [json!("0.00"), json!("-250"), Value::Null] {
        let req = test::TestRequest::post()
            .uri("/api/v1/bonuses")
            .insert_header(ctx.bearer(user_id))
            .set_json(json!({ "amount": amount, "description": "Quarterly" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_rejected(resp, StatusCode::BAD_REQUEST, "Invalid amount").await;
    }
}

#[actix_web::test]
async fn detailed_report_rejects_month_out_of_range() {
    let ctx = TestContext::lazy();
    let app = init_app!(ctx);

    for month in [0, 13] {
        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/v1/reports/monthly-detailed?year=2024&month={}",
                month
            ))
            .insert_header(ctx.bearer(Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_rejected(resp, StatusCode::BAD_REQUEST, "Month must be between 1 and 12").await;
    }
}

#[actix_web::test]
async fn payment_range_must_be_ordered() {
    let ctx = TestContext::lazy();
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/payments?from=2024-03-01&to=2024-02-01")
        .insert_header(ctx.bearer(Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "after its end").await;
}

#[actix_web::test]
async fn additional_earnings_must_be_positive() {
    let ctx = TestContext::lazy();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/earnings")
        .insert_header(ctx.bearer(Uuid::new_v4()))
        .set_json(json!({ "amount": "0.00" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "greater than zero").await;
}

#[actix_web::test]
async fn registration_requires_username_and_password() {
    let ctx = TestContext::lazy();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "username": "   ", "password": "secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "Username").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "username": "alice", "password": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "Password").await;
}

#[actix_web::test]
async fn sub_cent_amounts_are_rejected() {
    let ctx = TestContext::lazy();
    let app = init_app!(ctx);
    let user_id = Uuid::new_v4();

    let req = test::TestRequest::post()
        .uri("/api/v1/payments")
        .insert_header(ctx.bearer(user_id))
        .set_json(json!({ "amount": "0.001" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "amount must not have more than 2 decimal places").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/work-days")
        .insert_header(ctx.bearer(user_id))
        .set_json(json!({ "workDate": "2024-02-10", "salary": "10.005" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "salary must not have more than 2 decimal places").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/work-days")
        .insert_header(ctx.bearer(user_id))
        .set_json(json!({ "workDate": "2024-02-10", "salary": "10.00", "bonus": "0.004" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "bonus must not have more than 2 decimal places").await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/work-days/{}", Uuid::new_v4()))
        .insert_header(ctx.bearer(user_id))
        .set_json(json!({ "salary": "3500.125" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "decimal places").await;
}

#[actix_web::test]
async fn amounts_beyond_the_money_column_are_rejected() {
    let ctx = TestContext::lazy();
    let app = init_app!(ctx);
    let user_id = Uuid::new_v4();

    let req = test::TestRequest::post()
        .uri("/api/v1/work-days")
        .insert_header(ctx.bearer(user_id))
        .set_json(json!({ "workDate": "2024-02-10", "salary": "100000000000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "salary must be less than").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/payments")
        .insert_header(ctx.bearer(user_id))
        .set_json(json!({ "amount": "1E+11" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "amount must be less than").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/earnings")
        .insert_header(ctx.bearer(user_id))
        .set_json(json!({ "amount": "10000000000.00" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "less than").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/bonuses")
        .insert_header(ctx.bearer(user_id))
        .set_json(json!({ "amount": "0.005", "bonusDate": "2024-02-10" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_rejected(resp, StatusCode::BAD_REQUEST, "decimal places").await;
}
