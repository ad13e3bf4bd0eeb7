use crate::models::{Customer, Metadata, RiskAction};
use crate::net::{serialize_query, Api, Response};
use crate::resources::ListRequest;
use crate::Error;
use serde::Serialize;

const BASIS: &str = "customer";

#[derive(Debug, Clone)]
pub struct Customers {
    api: Api,
}

impl Customers {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn create(&self, request: &CreateCustomerRequest) -> Result<Response<Customer>, Error> {
        self.api.post(&[BASIS], request).await
    }

    pub async fn list(&self, request: &ListRequest) -> Result<Response<Vec<Customer>>, Error> {
        self.api.get(&[BASIS], serialize_query(request)?).await
    }

    /// Looks a customer up by email or customer code.
    pub async fn fetch(&self, email_or_code: &str) -> Result<Response<Customer>, Error> {
        self.api.get(&[BASIS, email_or_code], None).await
    }

    pub async fn update(
        &self,
        code: &str,
        request: &UpdateCustomerRequest,
    ) -> Result<Response<Customer>, Error> {
        self.api.put(&[BASIS, code], request).await
    }

    /// Starts asynchronous identity validation; the outcome arrives by webhook.
    pub async fn validate(
        &self,
        code: &str,
        request: &ValidateCustomerRequest,
    ) -> Result<Response<serde_json::Value>, Error> {
        self.api.post(&[BASIS, code, "identification"], request).await
    }

    pub async fn set_risk_action(&self, request: &SetRiskActionRequest) -> Result<Response<Customer>, Error> {
        self.api.post(&[BASIS, "set_risk_action"], request).await
    }

    pub async fn deactivate_authorization(
        &self,
        authorization_code: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            authorization_code: &'a str,
        }

        self.api
            .post(&[BASIS, "deactivate_authorization"], &Body { authorization_code })
            .await
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCustomerRequest {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
}

impl CreateCustomerRequest {
    pub fn builder(email: impl Into<String>) -> CreateCustomerRequestBuilder {
        CreateCustomerRequestBuilder {
            inner: Self {
                email: email.into(),
                first_name: None,
                last_name: None,
                phone: None,
                metadata: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct CreateCustomerRequestBuilder {
    inner: CreateCustomerRequest,
}

impl CreateCustomerRequestBuilder {
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.inner.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.inner.last_name = Some(last_name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.inner.phone = Some(phone.into());
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.inner.metadata = Some(metadata);
        self
    }

    pub fn build(self) -> CreateCustomerRequest {
        self.inner
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateCustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
}

impl UpdateCustomerRequest {
    pub fn builder() -> UpdateCustomerRequestBuilder {
        UpdateCustomerRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct UpdateCustomerRequestBuilder {
    inner: UpdateCustomerRequest,
}

impl UpdateCustomerRequestBuilder {
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.inner.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.inner.last_name = Some(last_name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.inner.phone = Some(phone.into());
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.inner.metadata = Some(metadata);
        self
    }

    pub fn build(self) -> UpdateCustomerRequest {
        self.inner
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidateCustomerRequest {
    first_name: String,
    last_name: String,
    #[serde(rename = "type")]
    identification_type: String,
    country: String,
    bvn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_number: Option<String>,
}

impl ValidateCustomerRequest {
    /// Identification type defaults to `bank_account`, the only one Paystack accepts today.
    pub fn builder(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        country: impl Into<String>,
        bvn: impl Into<String>,
    ) -> ValidateCustomerRequestBuilder {
        ValidateCustomerRequestBuilder {
            inner: Self {
                first_name: first_name.into(),
                last_name: last_name.into(),
                identification_type: "bank_account".to_string(),
                country: country.into(),
                bvn: bvn.into(),
                middle_name: None,
                value: None,
                bank_code: None,
                account_number: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct ValidateCustomerRequestBuilder {
    inner: ValidateCustomerRequest,
}

impl ValidateCustomerRequestBuilder {
    pub fn identification_type(mut self, identification_type: impl Into<String>) -> Self {
        self.inner.identification_type = identification_type.into();
        self
    }

    pub fn bank_account(mut self, bank_code: impl Into<String>, account_number: impl Into<String>) -> Self {
        self.inner.bank_code = Some(bank_code.into());
        self.inner.account_number = Some(account_number.into());
        self
    }

    pub fn middle_name(mut self, middle_name: impl Into<String>) -> Self {
        self.inner.middle_name = Some(middle_name.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.inner.value = Some(value.into());
        self
    }

    pub fn build(self) -> ValidateCustomerRequest {
        self.inner
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetRiskActionRequest {
    customer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    risk_action: Option<RiskAction>,
}

impl SetRiskActionRequest {
    pub fn builder(customer: impl Into<String>) -> SetRiskActionRequestBuilder {
        SetRiskActionRequestBuilder {
            inner: Self {
                customer: customer.into(),
                risk_action: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct SetRiskActionRequestBuilder {
    inner: SetRiskActionRequest,
}

impl SetRiskActionRequestBuilder {
    pub fn risk_action(mut self, risk_action: RiskAction) -> Self {
        self.inner.risk_action = Some(risk_action);
        self
    }

    pub fn build(self) -> SetRiskActionRequest {
        self.inner
    }
}
