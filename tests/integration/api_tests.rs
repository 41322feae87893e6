//! API integration tests
//!
//! Require a running server and database:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

fn unique_suffix() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64
        % 1_000_000_000
}

/// Helper: register a visitor and return (email, password)
async fn register_visitor(client: &Client) -> (String, String) {
    let suffix = unique_suffix();
    let email = format!("visitor{}@example.com", suffix);
    let password = "secret1".to_string();

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "name": "Asha",
            "aadhar_id": format!("{:012}", suffix),
            "email": email,
            "age": 28,
            "gender": "female",
            "phone": "9876543210",
            "address": "12 Lake Road",
            "city": "Nagpur",
            "pin": "440001",
            "interests": ["birding"],
            "password": password,
            "confirm_password": password
        }))
        .send()
        .await
        .expect("Failed to send register request");

    assert_eq!(response.status(), 201);
    (email, password)
}

/// Helper: log in and return the session token
async fn login(client: &Client, email: &str, password: &str) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": email,
            "password": password,
            "role": "visitor"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_and_login() {
    let client = Client::new();
    let (email, password) = register_visitor(&client).await;

    let token = login(&client, &email, &password).await;
    assert!(!token.is_empty());

    // Session info matches the registered identity
    let response = client
        .get(format!("{}/auth/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["name"], "Asha");
    assert_eq!(body["role"], "visitor");
}

#[tokio::test]
#[ignore]
async fn test_register_duplicate_email_conflict() {
    let client = Client::new();
    let (email, password) = register_visitor(&client).await;

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "name": "Asha Again",
            "aadhar_id": format!("{:012}", unique_suffix()),
            "email": email,
            "age": 28,
            "gender": "female",
            "phone": "9876543210",
            "address": "12 Lake Road",
            "city": "Nagpur",
            "pin": "440001",
            "interests": ["birding"],
            "password": password,
            "confirm_password": password
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_login_wrong_password_and_unknown_email_look_identical() {
    let client = Client::new();
    let (email, _password) = register_visitor(&client).await;

    let wrong_password = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "not-the-password",
            "role": "visitor"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(wrong_password.status(), 401);
    let wrong_password_body: Value = wrong_password.json().await.unwrap();

    let unknown_email = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "nobody@example.com",
            "password": "whatever1",
            "role": "visitor"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(unknown_email.status(), 401);
    let unknown_email_body: Value = unknown_email.json().await.unwrap();

    // No enumeration signal: both failures carry the same message
    assert_eq!(wrong_password_body["message"], "Invalid email or password");
    assert_eq!(unknown_email_body["message"], wrong_password_body["message"]);
}

#[tokio::test]
#[ignore]
async fn test_book_safari_ticket() {
    let client = Client::new();
    let (email, password) = register_visitor(&client).await;
    let token = login(&client, &email, &password).await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "contact_number": "9876543210",
            "safari_date": "2030-06-15",
            "time_slot": "morning",
            "safari_zone": "A",
            "person_count": 3,
            "has_guide": true
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["booking_id"].as_str().unwrap().starts_with("SAF-"));
    assert!(body["message"].as_str().unwrap().contains("confirmed"));

    // total = base + services + gst
    let base: f64 = body["cost"]["base_cost"].as_str().map(|s| s.parse().unwrap())
        .unwrap_or_else(|| body["cost"]["base_cost"].as_f64().unwrap());
    let services: f64 = body["cost"]["services_cost"].as_str().map(|s| s.parse().unwrap())
        .unwrap_or_else(|| body["cost"]["services_cost"].as_f64().unwrap());
    let gst: f64 = body["cost"]["gst_amount"].as_str().map(|s| s.parse().unwrap())
        .unwrap_or_else(|| body["cost"]["gst_amount"].as_f64().unwrap());
    let total: f64 = body["cost"]["total_amount"].as_str().map(|s| s.parse().unwrap())
        .unwrap_or_else(|| body["cost"]["total_amount"].as_f64().unwrap());
    assert!((base + services + gst - total).abs() < 0.01);
}

#[tokio::test]
#[ignore]
async fn test_animal_listing_hostile_sort_falls_back() {
    let client = Client::new();
    let (email, password) = register_visitor(&client).await;
    let token = login(&client, &email, &password).await;

    let response = client
        .get(format!(
            "{}/animals?status=Endangered&sort_by=DROP%20TABLE",
            BASE_URL
        ))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    // Filtered result with default sort, not an error
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let animals = body.as_array().expect("Expected an array");
    for animal in animals {
        assert_eq!(animal["status"], "Endangered");
    }
}

#[tokio::test]
#[ignore]
async fn test_feedback_unknown_booking_id_rejected() {
    let client = Client::new();

    // Anonymous submission is allowed; the unknown booking id is not
    let response = client
        .post(format!("{}/feedback", BASE_URL))
        .json(&json!({
            "name": "Ravi",
            "email": "ravi@example.com",
            "visit_date": "2026-01-10",
            "booking_id": "SAF-999999",
            "rating_overall": 4,
            "sightings": ["tiger"],
            "liked_most": ["guide"],
            "recommend": true
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Booking Id does not exist");
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/animals", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_visitor_listing_requires_admin() {
    let client = Client::new();
    let (email, password) = register_visitor(&client).await;
    let token = login(&client, &email, &password).await;

    let response = client
        .get(format!("{}/visitors", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}
