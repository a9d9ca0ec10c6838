use crate::helpers::spawn_app;
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

fn valid_body() -> String {
    json!({
        "name": "Alice",
        "phone": "+15550001",
        "blood_group": "O+",
        "location": "City Hospital"
    })
    .to_string()
}

#[actix_web::test]
async fn send_blood_request_returns_200_with_the_message_sid() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"sid": "SM123"})))
        .expect(1)
        .mount(&app.sms_server)
        .await;

    let response = app.post_blood_request(valid_body()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to read the response body");
    assert_eq!(body["status"], "success");
    assert_eq!(body["message_sid"], "SM123");
}

#[actix_web::test]
async fn send_blood_request_returns_400_when_fields_are_missing() {
    let app = spawn_app().await;

    // The provider must never be called for a rejected payload.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"sid": "SM123"})))
        .expect(0)
        .mount(&app.sms_server)
        .await;

    let tests: Vec<(String, &str)> = vec![
        (
            json!({"phone": "+15550001", "blood_group": "O+", "location": "Clinic"}).to_string(),
            "missing the name",
        ),
        (
            json!({"name": "Bob", "blood_group": "A-", "location": "Clinic"}).to_string(),
            "missing the phone",
        ),
        (
            json!({"name": "Bob", "phone": "+15550001", "location": "Clinic"}).to_string(),
            "missing the blood group",
        ),
        (
            json!({"name": "Bob", "phone": "+15550001", "blood_group": "A-"}).to_string(),
            "missing the location",
        ),
        ("{}".to_string(), "missing every field"),
        ("[\"name\", \"phone\"]".to_string(), "not a JSON object"),
        ("definitely not json".to_string(), "not JSON at all"),
        ("".to_string(), "an empty body"),
    ];
    for (body, error) in tests {
        let response = app.post_blood_request(body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The api did not return 400 for a payload {}",
            error
        );
        let body: serde_json::Value = response
            .json()
            .await
            .expect("Failed to read the response body");
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Missing required fields");
    }
}

#[actix_web::test]
async fn send_blood_request_sends_the_urgent_template_to_the_provider() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"sid": "SM123"})))
        .expect(1)
        .mount(&app.sms_server)
        .await;

    app.post_blood_request(valid_body()).await;

    let requests = app
        .sms_server
        .received_requests()
        .await
        .expect("Failed to read the recorded requests");
    let form: HashMap<String, String> =
        serde_urlencoded::from_bytes(&requests[0].body).expect("Failed to parse the form body");
    assert_eq!(
        form["Body"],
        "🚨 Urgent Blood Request! 🚨\nDear Alice, we need O+ blood at City Hospital. Please respond ASAP!"
    );
    assert_eq!(form["To"], "+15550001");
    assert_eq!(form["From"], app.sender_number);
    assert!(!form["Body"].contains("+15550001"));
}

#[actix_web::test]
async fn send_blood_request_returns_500_with_the_provider_rejection() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 21211,
            "message": "Invalid number",
            "status": 400
        })))
        .expect(1)
        .mount(&app.sms_server)
        .await;

    let response = app.post_blood_request(valid_body()).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to read the response body");
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Error sending SMS: Invalid number");
}

#[actix_web::test]
async fn identical_requests_send_two_messages() {
    let app = spawn_app().await;

    // No idempotency key: a duplicate call is a duplicate SMS.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"sid": "SM123"})))
        .expect(2)
        .mount(&app.sms_server)
        .await;

    let first = app.post_blood_request(valid_body()).await;
    let second = app.post_blood_request(valid_body()).await;

    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
}

#[actix_web::test]
async fn empty_or_null_values_still_reach_the_provider() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"sid": "SM124"})))
        .expect(1)
        .mount(&app.sms_server)
        .await;

    let body = json!({
        "name": "",
        "phone": null,
        "blood_group": "O+",
        "location": "Clinic"
    })
    .to_string();
    let response = app.post_blood_request(body).await;

    assert_eq!(200, response.status().as_u16());
    let requests = app
        .sms_server
        .received_requests()
        .await
        .expect("Failed to read the recorded requests");
    let form: HashMap<String, String> =
        serde_urlencoded::from_bytes(&requests[0].body).expect("Failed to parse the form body");
    assert_eq!(form["To"], "null");
}
