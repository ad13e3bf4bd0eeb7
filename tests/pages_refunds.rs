mod common;

use common::{envelope, paged, setup};
use paystack::models::Expandable;
use paystack::resources::direct_debit::{ListMandateAuthorizationsRequest, MandateStatus};
use paystack::resources::payment_pages::{CreatePaymentPageRequest, PageType, UpdatePaymentPageRequest};
use paystack::resources::refunds::{CreateRefundRequest, ListRefundsRequest};
use paystack::resources::ListRequest;
use paystack::Error;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn create_and_update_payment_page() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/page"))
        .and(body_json(json!({
            "name": "Buttercup Brunch",
            "amount": 500000,
            "type": "payment",
            "collect_phone": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Page created",
            json!({
                "name": "Buttercup Brunch",
                "amount": 500000,
                "slug": "5nApBwZkvY",
                "type": "payment",
                "active": true,
                "id": 1308510
            }),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/page/5nApBwZkvY"))
        .and(body_json(json!({ "active": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Page updated",
            json!({ "id": 1308510, "slug": "5nApBwZkvY", "active": false }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreatePaymentPageRequest::builder("Buttercup Brunch")
        .amount(500000)
        .page_type(PageType::Payment)
        .collect_phone(true)
        .build();
    let page = client.payment_pages().create(&request).await.unwrap().into_data().unwrap();
    assert_eq!(page.slug.as_str(), Some("5nApBwZkvY"));
    assert_eq!(page.page_type.as_str(), Some("payment"));

    let updated = client
        .payment_pages()
        .update("5nApBwZkvY", &UpdatePaymentPageRequest::builder().active(false).build())
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(updated.active.bool(), Some(false));
}

#[tokio::test]
async fn page_lookup_slug_check_and_products() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(
            "Pages retrieved",
            json!([{ "id": 1, "slug": "a" }, { "id": 2, "slug": "b" }]),
            json!({ "total": 2 }),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page/check_slug_availability/new-slug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Slug is available"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page/check_slug_availability/taken"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": false,
            "message": "Slug is already in use"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/page/102/product"))
        .and(body_json(json!({ "product": [473, 292] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Products added to page",
            json!({
                "id": 102,
                "type": "product",
                "products": [
                    { "product_id": 473, "id": 473, "name": "Transformers Trilogy" },
                    { "id": 292, "name": "Great Gatsby" }
                ]
            }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let pages = client
        .payment_pages()
        .list(&ListRequest::default())
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(pages.len(), 2);

    let free = client.payment_pages().check_slug_availability("new-slug").await.unwrap();
    assert_eq!(free.message, "Slug is available");

    let taken = client.payment_pages().check_slug_availability("taken").await.unwrap_err();
    assert_eq!(taken.status(), Some(StatusCode::BAD_REQUEST));
    assert!(matches!(taken, Error::Api { ref message, .. } if message == "Slug is already in use"));

    let page = client
        .payment_pages()
        .add_products("102", &[473, 292])
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(page.products.len(), 2);
    assert_eq!(page.products[1].name.as_str(), Some("Great Gatsby"));
}

#[tokio::test]
async fn refunds() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/refund"))
        .and(body_json(json!({ "transaction": "1641", "amount": 5000, "merchant_note": "Duplicate" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Refund has been queued for processing",
            json!({
                "transaction": { "id": 1641, "reference": "fc2mwn7pxa", "amount": 10000 },
                "amount": 5000,
                "currency": "NGN",
                "status": "pending",
                "id": 3018284,
                "merchant_note": "Duplicate"
            }),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/refund"))
        .and(query_param("currency", "NGN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Refunds retrieved",
            json!([{ "id": 3018284, "transaction": 1641, "status": "processed" }]),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/refund/3018284"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Refund retrieved",
            json!({ "id": 3018284, "refunded_at": null, "expected_at": "2024-03-05T09:00:00.000Z" }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateRefundRequest::builder("1641").amount(5000).merchant_note("Duplicate").build();
    let refund = client.refunds().create(&request).await.unwrap().into_data().unwrap();
    let transaction = refund.transaction.as_ref().and_then(Expandable::object).unwrap();
    assert_eq!(transaction.reference.as_str(), Some("fc2mwn7pxa"));
    assert_eq!(refund.status.as_str(), Some("pending"));

    let listed = client
        .refunds()
        .list(&ListRefundsRequest::builder().currency("NGN").build())
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(listed[0].transaction.as_ref().and_then(Expandable::id), Some(1641));

    let fetched = client.refunds().fetch("3018284").await.unwrap().into_data().unwrap();
    assert!(fetched.refunded_at.is_null());
    assert!(fetched.expected_at.is_valid());
}

#[tokio::test]
async fn direct_debit() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/directdebit/activation-charge"))
        .and(body_json(json!({ "customer_ids": [28958104, 983697220] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Mandate is queued for retry"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/directdebit/mandate-authorizations"))
        .and(query_param("status", "active"))
        .and(query_param("per_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(
            "Mandate authorizations retrieved successfully",
            json!([{
                "id": 510,
                "status": "active",
                "mandate_id": 1882,
                "authorization_id": 377,
                "authorization_code": "AUTH_k4dxkv8ijl",
                "account_number": "0123456789",
                "bank_code": "058",
                "bank_name": "Guaranty Trust Bank",
                "customer": { "id": 28958104, "customer_code": "CUS_9hkevqpcqc6uu4p" },
                "authorized_at": "2024-09-10T14:02:11.000Z"
            }]),
            json!({ "per_page": 2, "next": "Njg5OTQ=", "previous": null }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let retried = client
        .direct_debit()
        .trigger_activation_charge(&[28958104, 983697220])
        .await
        .unwrap();
    assert_eq!(retried.message, "Mandate is queued for retry");

    let request = ListMandateAuthorizationsRequest::builder()
        .status(MandateStatus::Active)
        .per_page(2)
        .build();
    let response = client.direct_debit().list_mandate_authorizations(&request).await.unwrap();
    let meta = response.meta.clone().unwrap();
    assert_eq!(meta.next.as_str(), Some("Njg5OTQ="));
    assert!(meta.previous.is_null());

    let mandates = response.into_data().unwrap();
    assert_eq!(mandates[0].bank_name.as_str(), Some("Guaranty Trust Bank"));
    assert!(mandates[0].authorized_at.is_valid());
}
