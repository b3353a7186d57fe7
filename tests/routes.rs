use actix_web::body::to_bytes;
use actix_web::http::{StatusCode, header};
use actix_web_flash_messages::Level;
use easy_read_pager::routes::{alert_level_to_str, redirect, render_template};
use tera::{Context, Tera};

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[test]
fn redirect_uses_see_other() {
    let response = redirect("/fields/node/story/body/settings");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/fields/node/story/body/settings"
    );
}

#[actix_web::test]
async fn render_template_reports_missing_templates() {
    let mut tera = Tera::default();
    tera.add_raw_template("hello.html", "Hello {{ name }}")
        .unwrap();
    let mut context = Context::new();
    context.insert("name", "reader");

    let ok = render_template(&tera, "hello.html", &context);
    assert_eq!(ok.status(), StatusCode::OK);
    let body = to_bytes(ok.into_body()).await.unwrap();
    assert_eq!(body, "Hello reader");

    let missing = render_template(&tera, "missing.html", &context);
    assert_eq!(missing.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
