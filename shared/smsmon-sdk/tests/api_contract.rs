//! Contract tests for both API clients against a mock backend.
//!
//! Every test pins the method, path, and query shape one endpoint expects,
//! then checks the response mapping on the way back.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use smsmon_sdk::{
    ApiConfig, ApiError, ListParams, LoadTestParams, NetworkTestClient, PageParams, SmsApiClient,
    SmsMessage, SmsStatus, StressTestParams,
};

fn config_for(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: server.uri(),
        request_timeout_secs: None,
    }
}

fn message_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "messageId": format!("msg-{id}"),
        "operatorId": 7,
        "senderNumber": "+2348012345678",
        "recipientNumber": "+2348098765432",
        "messageContent": "hello",
        "status": status,
        "priority": "NORMAL",
        "createdAt": "2026-08-01T09:30:00.000Z"
    })
}

#[tokio::test]
async fn create_posts_message_body() {
    let server = MockServer::start().await;
    let client = SmsApiClient::new(&config_for(&server));

    let message = SmsMessage::new("+2348012345678", "+2348098765432", "hello");
    let mut created = message_json(42, "PENDING");
    created["messageId"] = json!(message.message_id.clone());

    Mock::given(method("POST"))
        .and(path("/api/v1/sms/messages"))
        .and(body_partial_json(json!({
            "messageId": message.message_id,
            "senderNumber": "+2348012345678",
            "status": "PENDING",
            "priority": "NORMAL"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(created))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.create(&message).await.unwrap();
    assert_eq!(result.id, Some(42));
    assert_eq!(result.message_id, message.message_id);
}

#[tokio::test]
async fn get_by_id_hits_message_path() {
    let server = MockServer::start().await;
    let client = SmsApiClient::new(&config_for(&server));

    Mock::given(method("GET"))
        .and(path("/api/v1/sms/messages/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_json(42, "SENT")))
        .expect(1)
        .mount(&server)
        .await;

    let message = client.get_by_id(42).await.unwrap();
    assert_eq!(message.status, SmsStatus::Sent);
}

#[tokio::test]
async fn get_by_message_id_uses_alternate_key_path() {
    let server = MockServer::start().await;
    let client = SmsApiClient::new(&config_for(&server));

    Mock::given(method("GET"))
        .and(path("/api/v1/sms/messages/by-message-id/msg-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_json(42, "DELIVERED")))
        .expect(1)
        .mount(&server)
        .await;

    let message = client.get_by_message_id("msg-42").await.unwrap();
    assert_eq!(message.id, Some(42));
}

#[tokio::test]
async fn list_all_passes_pagination_and_sort_params() {
    let server = MockServer::start().await;
    let client = SmsApiClient::new(&config_for(&server));

    // Backend holds 25 messages; the first page of 10 comes back full.
    let content: Vec<_> = (1..=10).map(|id| message_json(id, "DELIVERED")).collect();

    Mock::given(method("GET"))
        .and(path("/api/v1/sms/messages"))
        .and(query_param("page", "0"))
        .and(query_param("size", "10"))
        .and(query_param("sortBy", "createdAt"))
        .and(query_param("sortDir", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": content,
            "totalElements": 25,
            "totalPages": 3,
            "size": 10,
            "number": 0,
            "first": true,
            "last": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .list_all(&ListParams {
            size: 10,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.total_elements, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.content.len(), 10);
    assert!(page.first);
    assert!(!page.last);
}

#[tokio::test]
async fn list_by_operator_scopes_to_operator_path() {
    let server = MockServer::start().await;
    let client = SmsApiClient::new(&config_for(&server));

    Mock::given(method("GET"))
        .and(path("/api/v1/sms/messages/operator/7"))
        .and(query_param("page", "0"))
        .and(query_param("size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [message_json(1, "SENT")],
            "totalElements": 1,
            "totalPages": 1,
            "size": 20,
            "number": 0,
            "first": true,
            "last": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .list_by_operator(7, &PageParams::default())
        .await
        .unwrap();
    assert_eq!(page.content[0].operator_id, Some(7));
}

#[tokio::test]
async fn list_by_status_is_unpaginated() {
    let server = MockServer::start().await;
    let client = SmsApiClient::new(&config_for(&server));

    Mock::given(method("GET"))
        .and(path("/api/v1/sms/messages/status/FAILED"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([message_json(3, "FAILED"), message_json(9, "FAILED")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let messages = client.list_by_status(SmsStatus::Failed).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().all(|m| m.status == SmsStatus::Failed));
}

#[tokio::test]
async fn update_status_sends_status_as_query_param() {
    let server = MockServer::start().await;
    let client = SmsApiClient::new(&config_for(&server));

    Mock::given(method("PUT"))
        .and(path("/api/v1/sms/messages/42/status"))
        .and(query_param("status", "DELIVERED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_json(42, "DELIVERED")))
        .expect(1)
        .mount(&server)
        .await;

    let message = client.update_status(42, SmsStatus::Delivered).await.unwrap();
    assert_eq!(message.status, SmsStatus::Delivered);
}

#[tokio::test]
async fn delete_accepts_empty_body() {
    let server = MockServer::start().await;
    let client = SmsApiClient::new(&config_for(&server));

    Mock::given(method("DELETE"))
        .and(path("/api/v1/sms/messages/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete(42).await.unwrap();
}

#[tokio::test]
async fn statistics_send_iso8601_date_range() {
    let server = MockServer::start().await;
    let client = SmsApiClient::new(&config_for(&server));

    let start = "2026-07-01T00:00:00Z".parse().unwrap();
    let end = "2026-08-01T00:00:00Z".parse().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/sms/statistics/delivery"))
        .and(query_param("startDate", "2026-07-01T00:00:00.000Z"))
        .and(query_param("endDate", "2026-08-01T00:00:00.000Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "status": "DELIVERED", "count": 120 },
            { "status": "FAILED", "count": 4 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sms/statistics/operators"))
        .and(query_param("startDate", "2026-07-01T00:00:00.000Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "operatorId": 7, "status": "DELIVERED", "count": 80 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let delivery = client.delivery_statistics(start, end).await.unwrap();
    assert_eq!(delivery.len(), 2);
    assert_eq!(delivery[0].count, 120);

    let operators = client.operator_statistics(start, end).await.unwrap();
    assert_eq!(operators[0].operator_id, 7);
}

#[tokio::test]
async fn health_check_returns_plain_text() {
    let server = MockServer::start().await;
    let client = SmsApiClient::new(&config_for(&server));

    Mock::given(method("GET"))
        .and(path("/api/v1/sms/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("SMS Service is running"))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.health_check().await.unwrap();
    assert_eq!(body, "SMS Service is running");
}

#[tokio::test]
async fn missing_message_maps_to_not_found() {
    let server = MockServer::start().await;
    let client = SmsApiClient::new(&config_for(&server));

    Mock::given(method("GET"))
        .and(path("/api/v1/sms/messages/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.get_by_id(999).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn rejected_payload_maps_to_validation() {
    let server = MockServer::start().await;
    let client = SmsApiClient::new(&config_for(&server));

    Mock::given(method("POST"))
        .and(path("/api/v1/sms/messages"))
        .respond_with(ResponseTemplate::new(400).set_body_string("senderNumber is required"))
        .mount(&server)
        .await;

    let message = SmsMessage::new("", "+2348098765432", "hello");
    match client.create(&message).await.unwrap_err() {
        ApiError::Validation(body) => assert!(body.contains("senderNumber")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn load_test_passes_params_and_decodes_result() {
    let server = MockServer::start().await;
    let client = NetworkTestClient::new(&config_for(&server));

    Mock::given(method("POST"))
        .and(path("/api/v1/sms/simulation/load-test"))
        .and(query_param("messageCount", "250"))
        .and(query_param("concurrentUsers", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalMessages": 250,
            "concurrentUsers": 5,
            "successCount": 246,
            "failureCount": 4,
            "averageLatency": 187,
            "totalDuration": 65000,
            "throughput": 123.4
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .run_load_test(&LoadTestParams {
            message_count: 250,
            concurrent_users: 5,
        })
        .await
        .unwrap();

    assert_eq!(result.total_messages, 250);
    assert_eq!(result.failure_count, 4);
    assert_eq!(result.total_duration, 65000);
}

#[tokio::test]
async fn stress_test_sends_duration_in_seconds() {
    let server = MockServer::start().await;
    let client = NetworkTestClient::new(&config_for(&server));

    Mock::given(method("POST"))
        .and(path("/api/v1/sms/simulation/stress-test"))
        .and(query_param("maxLoad", "5000"))
        .and(query_param("duration", "60"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "maxLoad": 5000,
            "duration": 60,
            "totalMessages": 48000,
            "successCount": 40000,
            "failureCount": 8000,
            "averageLatency": 950,
            "peakThroughput": 4800.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.run_stress_test(&StressTestParams::default()).await.unwrap();
    assert_eq!(result.max_load, 5000);
    assert_eq!(result.peak_throughput, 4800.0);
}
