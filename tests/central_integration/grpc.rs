//! Registry and client over a real loopback connection.

use crate::common::*;

use nexuspoint_client::{ProductClient, UserClient};
use tonic::transport::Endpoint;
use tonic::Code;
use tonic_health::pb::health_check_response::ServingStatus;
use tonic_health::pb::health_client::HealthClient;
use tonic_health::pb::HealthCheckRequest;

#[tokio::test]
async fn test_list_users_matches_seed() {
    let central = Central::start().await;
    let client = central.client().await;

    let users = client.list_users("it-users").await.unwrap();
    let summary: Vec<(i32, &str, &str, &str)> = users
        .iter()
        .map(|u| (u.id, u.name.as_str(), u.email.as_str(), u.location.as_str()))
        .collect();
    assert_eq!(
        summary,
        [
            (1, "John Doe", "john@example.com", "New York"),
            (2, "Jane Smith", "jane@example.com", "San Francisco"),
            (3, "Bob Johnson", "bob@example.com", "Chicago"),
        ]
    );
}

#[tokio::test]
async fn test_every_listed_user_has_a_profile() {
    let central = Central::start().await;
    let client = central.client().await;

    for user in client.list_users("it-all").await.unwrap() {
        let profile = client.get_profile(user.id, "it-all").await.unwrap();
        assert_eq!(profile.id, user.id);
    }
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let central = Central::start().await;
    let client = central.client().await;

    for id in [0, -1, 4, 999] {
        let err = client.get_profile(id, "it-missing").await.unwrap_err();
        assert_eq!(err.code(), Some(Code::NotFound), "user_id {}", id);
    }

    let err = client.get_product(999, "it-missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.message(), "product 999 not found");
}

#[tokio::test]
async fn test_get_product() {
    let central = Central::start().await;
    let client = central.client().await;

    let product = client.get_product(2, "it-product").await.unwrap();
    assert_eq!(product.name, "Smartphone");
    assert_eq!(product.price, 699.99);
    assert_eq!(product.stock, 20);
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let central = Central::start().await;
    let client = central.client().await;

    let calls = (0..16).map(|i| {
        let client = client.clone();
        tokio::spawn(async move {
            let correlation_id = format!("it-concurrent-{}", i);
            if i % 2 == 0 {
                UserClient::list_users(&client, &correlation_id)
                    .await
                    .map(|users| users.len())
            } else {
                ProductClient::list_products(&client, &correlation_id)
                    .await
                    .map(|products| products.len())
            }
        })
    });

    for call in calls.collect::<Vec<_>>() {
        assert_eq!(call.await.unwrap().unwrap(), 3);
    }
}

#[tokio::test]
async fn test_health_reports_serving_for_registered_services() {
    let central = Central::start().await;
    let channel = Endpoint::from_shared(format!("http://{}", central.addr))
        .unwrap()
        .connect()
        .await
        .unwrap();
    let mut health = HealthClient::new(channel);

    for service in ["", "user.v1.UserService", "product.v1.ProductService"] {
        let response = health
            .check(HealthCheckRequest {
                service: service.to_string(),
            })
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.status, ServingStatus::Serving as i32, "{}", service);
    }
}

#[tokio::test]
async fn test_serve_stops_on_shutdown() {
    let central = Central::start().await;
    central.client().await;
    assert!(central.stop().await.is_ok());
}
