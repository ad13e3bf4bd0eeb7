mod common;

use common::{bearer, envelope, paged, setup};
use paystack::models::RiskAction;
use paystack::resources::customers::{
    CreateCustomerRequest, SetRiskActionRequest, UpdateCustomerRequest, ValidateCustomerRequest,
};
use paystack::resources::ListRequest;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn create_customer_posts_json_with_bearer() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/customer"))
        .and(header("authorization", bearer().as_str()))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "email": "customer@email.com",
            "first_name": "Zero",
            "last_name": "Sum",
            "phone": "+2348123456789",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Customer created",
            json!({
                "email": "customer@email.com",
                "integration": 100032,
                "domain": "test",
                "customer_code": "CUS_xnxdt6s1zg1f4nx",
                "id": 1173,
                "identified": false,
                "identifications": null,
                "createdAt": "2016-03-29T20:03:09.584Z",
                "updatedAt": "2016-03-29T20:03:09.584Z"
            }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateCustomerRequest::builder("customer@email.com")
        .first_name("Zero")
        .last_name("Sum")
        .phone("+2348123456789")
        .build();
    let response = client.customers().create(&request).await.unwrap();

    assert!(response.status);
    assert_eq!(response.message, "Customer created");
    let customer = response.into_data().unwrap();
    assert_eq!(customer.customer_code.as_str(), Some("CUS_xnxdt6s1zg1f4nx"));
    assert_eq!(customer.id.int64(), Some(1173));
    assert_eq!(customer.identified.bool(), Some(false));
    assert!(customer.phone.is_absent());
    assert!(customer.timestamps.created_at.is_valid());
}

#[tokio::test]
async fn list_customers_sends_pagination_and_reads_meta() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/customer"))
        .and(query_param("perPage", "2"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(
            "Customers retrieved",
            json!([
                { "id": 1, "email": "a@x.com", "customer_code": "CUS_a", "phone": null },
                { "id": 2, "email": "b@x.com", "customer_code": "CUS_b", "phone": "0800" }
            ]),
            json!({ "total": 2, "skipped": 0, "perPage": "2", "page": 1, "pageCount": 1 }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let request = ListRequest::builder().per_page(2).page(1).build();
    let response = client.customers().list(&request).await.unwrap();

    let meta = response.meta.clone().unwrap();
    assert_eq!(meta.total.int64(), Some(2));
    assert_eq!(meta.per_page.int64(), Some(2));
    assert_eq!(meta.page_count.int64(), Some(1));

    let customers = response.into_data().unwrap();
    assert_eq!(customers.len(), 2);
    assert!(customers[0].phone.is_null());
    assert_eq!(customers[1].phone.as_str(), Some("0800"));
}

#[tokio::test]
async fn fetch_customer_by_email() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/customer/zero@sum.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Customer retrieved",
            json!({
                "email": "zero@sum.com",
                "customer_code": "CUS_c6wqvwmvwopw4ms",
                "authorizations": [
                    { "authorization_code": "AUTH_ekk8t49ogj", "last4": "4081", "exp_year": "2030", "reusable": true }
                ]
            }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let customer = client.customers().fetch("zero@sum.com").await.unwrap().into_data().unwrap();

    assert_eq!(customer.authorizations.len(), 1);
    assert_eq!(customer.authorizations[0].last4.as_str(), Some("4081"));
    assert_eq!(customer.authorizations[0].reusable.bool(), Some(true));
}

#[tokio::test]
async fn update_customer_puts_only_set_fields() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/customer/CUS_xnxdt6s1zg1f4nx"))
        .and(body_json(json!({ "first_name": "BoJack", "metadata": { "photos": [] } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Customer updated",
            json!({ "first_name": "BoJack", "customer_code": "CUS_xnxdt6s1zg1f4nx" }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let request = UpdateCustomerRequest::builder()
        .first_name("BoJack")
        .metadata(json!({ "photos": [] }))
        .build();
    let customer = client
        .customers()
        .update("CUS_xnxdt6s1zg1f4nx", &request)
        .await
        .unwrap()
        .into_data()
        .unwrap();

    assert_eq!(customer.first_name.as_str(), Some("BoJack"));
}

#[tokio::test]
async fn validate_customer_returns_message_only() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/customer/CUS_123/identification"))
        .and(body_json(json!({
            "first_name": "Asta",
            "last_name": "Lavista",
            "type": "bank_account",
            "country": "NG",
            "bvn": "20012345677",
            "bank_code": "007",
            "account_number": "0123456789",
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "status": true,
            "message": "Customer Identification in progress"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ValidateCustomerRequest::builder("Asta", "Lavista", "NG", "20012345677")
        .bank_account("007", "0123456789")
        .build();
    let response = client.customers().validate("CUS_123", &request).await.unwrap();

    assert_eq!(response.message, "Customer Identification in progress");
    assert!(response.data.is_none());
}

#[tokio::test]
async fn risk_action_and_deactivate_authorization() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/customer/set_risk_action"))
        .and(body_json(json!({ "customer": "CUS_123", "risk_action": "deny" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Customer updated",
            json!({ "customer_code": "CUS_123", "risk_action": "deny" }),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/customer/deactivate_authorization"))
        .and(body_json(json!({ "authorization_code": "AUTH_72btv547" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Authorization has been deactivated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = SetRiskActionRequest::builder("CUS_123").risk_action(RiskAction::Deny).build();
    let customer = client.customers().set_risk_action(&request).await.unwrap().into_data().unwrap();
    assert_eq!(customer.risk_action.as_str(), Some("deny"));

    let response = client.customers().deactivate_authorization("AUTH_72btv547").await.unwrap();
    assert_eq!(response.message, "Authorization has been deactivated");
}
