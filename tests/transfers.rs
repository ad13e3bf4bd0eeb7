mod common;

use common::{envelope, setup};
use paystack::models::Expandable;
use paystack::resources::bulk_charges::{BulkChargeItem, ChargeStatus, ListBatchChargesRequest};
use paystack::resources::transfers::{
    BulkTransferItem, BulkTransferRequest, FinalizeTransferRequest, InitiateTransferRequest,
    ListTransfersRequest,
};
use paystack::resources::ListRequest;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn initiate_and_finalize_transfer() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/transfer"))
        .and(body_json(json!({
            "source": "balance",
            "amount": 37800,
            "recipient": "RCP_t0ya41mp35flk40",
            "reason": "Holiday Flexing",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Transfer requires OTP to continue",
            json!({
                "integration": 100073,
                "domain": "test",
                "amount": 37800,
                "currency": "NGN",
                "source": "balance",
                "reason": "Holiday Flexing",
                "recipient": 28,
                "status": "otp",
                "transfer_code": "TRF_1ptvuv321ahaa7q",
                "id": 14
            }),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/transfer/finalize_transfer"))
        .and(body_json(json!({ "transfer_code": "TRF_1ptvuv321ahaa7q", "otp": "928783" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Transfer has been queued",
            json!({ "id": 14, "status": "success", "transfer_code": "TRF_1ptvuv321ahaa7q" }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let request = InitiateTransferRequest::builder(37800, "RCP_t0ya41mp35flk40")
        .reason("Holiday Flexing")
        .build();
    let transfer = client.transfers().initiate(&request).await.unwrap().into_data().unwrap();
    assert_eq!(transfer.status.as_str(), Some("otp"));
    assert_eq!(transfer.recipient.as_ref().and_then(Expandable::id), Some(28));

    let finalized = client
        .transfers()
        .finalize(&FinalizeTransferRequest::new("TRF_1ptvuv321ahaa7q", "928783"))
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(finalized.status.as_str(), Some("success"));
}

#[tokio::test]
async fn bulk_transfer() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/transfer/bulk"))
        .and(body_json(json!({
            "source": "balance",
            "currency": "NGN",
            "transfers": [
                { "amount": 20000, "recipient": "RCP_db342dvqvz9qcrn", "reference": "acv_9ee55786", "reason": "Bonus" },
                { "amount": 35000, "recipient": "RCP_db342dvqvz9qcrn" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "2 transfers queued.",
            json!([
                { "reference": "acv_9ee55786", "recipient": "RCP_db342dvqvz9qcrn", "amount": 20000, "transfer_code": "TRF_x", "currency": "NGN", "status": "received" },
                { "reference": "acv_1bd0c1f8", "recipient": "RCP_db342dvqvz9qcrn", "amount": 35000, "transfer_code": "TRF_y", "currency": "NGN", "status": "received" }
            ]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let request = BulkTransferRequest::builder()
        .currency("NGN")
        .transfer(
            BulkTransferItem::new(20000, "RCP_db342dvqvz9qcrn")
                .with_reference("acv_9ee55786")
                .with_reason("Bonus"),
        )
        .transfer(BulkTransferItem::new(35000, "RCP_db342dvqvz9qcrn"))
        .build();
    let results = client.transfers().initiate_bulk(&request).await.unwrap().into_data().unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[1].amount.int64(), Some(35000));
    assert_eq!(results[0].status.as_str(), Some("received"));
}

#[tokio::test]
async fn list_fetch_and_verify_transfers() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/transfer"))
        .and(query_param("recipient", "28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Transfers retrieved",
            json!([{
                "id": 14,
                "recipient": {
                    "id": 28,
                    "type": "nuban",
                    "name": "Zombie",
                    "recipient_code": "RCP_t0ya41mp35flk40",
                    "details": { "account_number": "0100000010", "bank_code": "044", "bank_name": "Access Bank" }
                }
            }]),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/transfer/TRF_1ptvuv321ahaa7q"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Transfer retrieved",
            json!({ "id": 14, "transfer_code": "TRF_1ptvuv321ahaa7q" }),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/transfer/verify/ref_demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Transfer retrieved",
            json!({ "id": 14, "reference": "ref_demo", "status": "success", "transferred_at": "2024-02-01T12:00:00.000Z" }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let listed = client
        .transfers()
        .list(&ListTransfersRequest::builder().recipient(28).build())
        .await
        .unwrap()
        .into_data()
        .unwrap();
    let recipient = listed[0].recipient.as_ref().and_then(Expandable::object).unwrap();
    assert_eq!(recipient.recipient_type.as_str(), Some("nuban"));
    assert_eq!(
        recipient.details.as_ref().and_then(|d| d.bank_name.as_str()),
        Some("Access Bank")
    );

    let fetched = client
        .transfers()
        .fetch("TRF_1ptvuv321ahaa7q")
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(fetched.id.int64(), Some(14));

    let verified = client.transfers().verify("ref_demo").await.unwrap().into_data().unwrap();
    assert!(verified.transferred_at.is_valid());
}

#[tokio::test]
async fn bulk_charge_batches() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/bulkcharge"))
        .and(body_json(json!([
            { "authorization": "AUTH_n95vpedf", "amount": 2500, "reference": "dam1266638dhhd" },
            { "authorization": "AUTH_ljdt4e4j", "amount": 1500 }
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Charges have been queued",
            json!({
                "batch_code": "BCH_180tl7oq7cayggh",
                "reference": "bulkcharge-1663150565684-p08dhxq4dn",
                "id": 62,
                "status": "active",
                "createdAt": "2022-09-14T10:16:05.000Z"
            }),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bulkcharge"))
        .and(query_param("perPage", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Bulk charges retrieved",
            json!([{ "batch_code": "BCH_180tl7oq7cayggh", "total_charges": 2, "pending_charges": "0" }]),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bulkcharge/BCH_180tl7oq7cayggh/charges"))
        .and(query_param("status", "failed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            "Bulk charge items retrieved",
            json!([{
                "id": 1,
                "status": "failed",
                "amount": 1500,
                "customer": { "email": "a@b.co" },
                "authorization": { "authorization_code": "AUTH_ljdt4e4j" },
                "transaction": 10
            }]),
        )))
        .expect(1)
        .mount(&server)
        .await;
    for action in ["pause", "resume"] {
        Mock::given(method("GET"))
            .and(path(format!("/bulkcharge/{action}/BCH_180tl7oq7cayggh")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": format!("Bulk charge batch has been {action}d")
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let items = [
        BulkChargeItem::builder("AUTH_n95vpedf", 2500).reference("dam1266638dhhd").build(),
        BulkChargeItem::builder("AUTH_ljdt4e4j", 1500).build(),
    ];
    let batch = client.bulk_charges().initiate(&items).await.unwrap().into_data().unwrap();
    assert_eq!(batch.batch_code.as_str(), Some("BCH_180tl7oq7cayggh"));
    assert!(batch.timestamps.created_at.is_valid());

    let batches = client
        .bulk_charges()
        .list(&ListRequest::builder().per_page(1).build())
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(batches[0].pending_charges.int64(), Some(0));

    let charges = client
        .bulk_charges()
        .fetch_charges(
            "BCH_180tl7oq7cayggh",
            &ListBatchChargesRequest::builder().status(ChargeStatus::Failed).build(),
        )
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(charges[0].transaction.as_ref().and_then(Expandable::id), Some(10));

    let paused = client.bulk_charges().pause("BCH_180tl7oq7cayggh").await.unwrap();
    let resumed = client.bulk_charges().resume("BCH_180tl7oq7cayggh").await.unwrap();
    assert_eq!(paused.message, "Bulk charge batch has been paused");
    assert_eq!(resumed.message, "Bulk charge batch has been resumed");
}
