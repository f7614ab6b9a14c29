use actix_web::{http::StatusCode, test};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

mod common;

use common::{TestContext, init_app};

macro_rules! test_unauthorized {
    ($test_name:ident, $method:ident, $uri:expr) => {
        #[actix_web::test]
        async fn $test_name() {
            let ctx = TestContext::lazy();
            let app = init_app!(ctx);

            let req = test::TestRequest::$method().uri($uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        }
    };
    ($test_name:ident, $method:ident, $uri:expr, $json:expr) => {
        #[actix_web::test]
        async fn $test_name() {
            let ctx = TestContext::lazy();
            let app = init_app!(ctx);

            let req = test::TestRequest::$method()
                .uri($uri)
                .set_json($json)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        }
    };
}

test_unauthorized!(me_requires_token, get, "/api/v1/auth/me");
test_unauthorized!(list_work_days_requires_token, get, "/api/v1/work-days");
test_unauthorized!(
    record_work_day_requires_token,
    post,
    "/api/v1/work-days",
    json!({ "workDate": "2024-02-10" })
);
test_unauthorized!(
    record_salary_requires_token,
    post,
    "/api/v1/work-days/salary",
    json!({ "workDate": "2024-02-10", "salary": "3500.00" })
);
test_unauthorized!(
    record_bonus_requires_token,
    post,
    "/api/v1/work-days/bonus",
    json!({ "workDate": "2024-02-10", "bonus": "100.00" })
);
test_unauthorized!(
    work_day_by_date_requires_token,
    get,
    "/api/v1/work-days/by-date?date=2024-02-10"
);
test_unauthorized!(statistics_requires_token, get, "/api/v1/work-days/statistics");
test_unauthorized!(balance_requires_token, get, "/api/v1/work-days/balance");
test_unauthorized!(list_payments_requires_token, get, "/api/v1/payments");
test_unauthorized!(
    add_payment_requires_token,
    post,
    "/api/v1/payments",
    json!({ "amount": "100.00" })
);
test_unauthorized!(
    payment_statistics_requires_token,
    get,
    "/api/v1/payments/statistics"
);
test_unauthorized!(list_bonuses_requires_token, get, "/api/v1/bonuses");
test_unauthorized!(
    add_bonus_requires_token,
    post,
    "/api/v1/bonuses",
    json!({ "amount": "250.00", "bonusDate": "2024-02-10" })
);
test_unauthorized!(
    bonus_statistics_requires_token,
    get,
    "/api/v1/bonuses/statistics"
);
test_unauthorized!(monthly_report_requires_token, get, "/api/v1/reports/monthly");
test_unauthorized!(annual_report_requires_token, get, "/api/v1/reports/annual");
test_unauthorized!(
    detailed_report_requires_token,
    get,
    "/api/v1/reports/monthly-detailed?year=2024&month=2"
);
test_unauthorized!(earnings_requires_token, get, "/api/v1/earnings");

#[actix_web::test]
async fn delete_routes_require_token() {
    let ctx = TestContext::lazy();
    let app = init_app!(ctx);

    for uri in [
        format!("/api/v1/work-days/{}", Uuid::new_v4()),
        format!("/api/v1/payments/{}", Uuid::new_v4()),
        format!("/api/v1/bonuses/{}", Uuid::new_v4()),
    ] {
        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[actix_web::test]
async fn token_signed_with_other_secret_is_rejected() {
    let ctx = TestContext::lazy();
    let app = init_app!(ctx);

    let foreign_config = workday_tracker::Config {
        jwt_secret: "a-completely-different-secret-value".to_string(),
        ..ctx.config.clone()
    };
    let token =
        workday_tracker::services::auth::issue_token(Uuid::new_v4(), "mallory", &foreign_config)
            .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/v1/work-days/statistics")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Unauthorized access"));
}

#[actix_web::test]
async fn malformed_authorization_header_is_rejected() {
    let ctx = TestContext::lazy();
    let app = init_app!(ctx);

    for header in ["Bearer", "Basic dXNlcjpwYXNz", "Bearer not-a-jwt"] {
        let req = test::TestRequest::get()
            .uri("/api/v1/payments")
            .insert_header(("Authorization", header))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", header);
    }
}
