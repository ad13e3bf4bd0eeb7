//! Client library for the [Paystack](https://paystack.com/docs/api) payments REST API.
//!
//! Every resource has a thin client with one async method per endpoint, a
//! builder per request and response models that mirror Paystack's JSON.
//!
//! ```no_run
//! use paystack::resources::customers::CreateCustomerRequest;
//! use paystack::PaystackClient;
//!
//! # async fn run() -> Result<(), paystack::Error> {
//! let client = PaystackClient::new("sk_test_xxx")?;
//! let request = CreateCustomerRequest::builder("zero@sum.com")
//!     .first_name("Zero")
//!     .last_name("Sum")
//!     .build();
//! let customer = client.customers().create(&request).await?.into_data()?;
//! println!("{:?}", customer.customer_code.as_str());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod net;
pub mod resources;

pub use client::{PaystackClient, PaystackClientBuilder};
pub use config::ClientConfig;
pub use error::Error;
pub use net::{Meta, Response, Transport};
