use super::error::HubSpotError;
use super::interfaces::{
    AssociationKind, AssociationLabel, AssociationRecord, AssociationsResponse, Company,
    CompanyProperties, Contact, ContactProperties, FALLBACK_COMPANY_NAME, LabelsResponse,
    ObjectResponse,
};
use super::primary::select_primary;
use app_state::HubSpotSettings;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

const ASSOCIATION_PAGE_SIZE: &str = "500";

/// Read-only access to the parts of the HubSpot CRM the provisioning flow needs.
#[derive(Clone)]
pub struct HubSpotClient {
    http_client: Client,
    base_url: String,
    token: Option<String>,
}

impl HubSpotClient {
    #[must_use]
    pub fn new(http_client: Client, settings: &HubSpotSettings) -> Self {
        Self {
            http_client,
            base_url: settings.base_url.clone(),
            token: settings.token.clone(),
        }
    }

    fn token(&self) -> Result<&str, HubSpotError> {
        self.token
            .as_deref()
            .ok_or(HubSpotError::MissingConfiguration("HUBSPOT_TOKEN"))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, HubSpotError> {
        let mut url: Url = self.base_url.parse()?;
        url.path_segments_mut()
            .map_err(|()| HubSpotError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        operation: &'static str,
    ) -> Result<T, HubSpotError> {
        let token = self.token()?;
        debug!("GET {url}");
        let response = self
            .http_client
            .get(url)
            .bearer_auth(token)
            .send()
            .await?;
        let response = ensure_success(response, operation).await?;
        Ok(response.json().await?)
    }

    /// Label catalog for associations from deals to the given object type.
    #[instrument(skip(self))]
    pub async fn association_labels(
        &self,
        kind: AssociationKind,
    ) -> Result<Vec<AssociationLabel>, HubSpotError> {
        let url = self.endpoint(&[
            "crm",
            "v4",
            "associations",
            "deals",
            kind.object_type(),
            "labels",
        ])?;
        let labels: LabelsResponse = self.get_json(url, "association label lookup").await?;
        Ok(labels.results)
    }

    /// Every association from the deal to objects of the given type, in HubSpot's order.
    #[instrument(skip(self))]
    pub async fn deal_associations(
        &self,
        deal_id: &str,
        kind: AssociationKind,
    ) -> Result<Vec<AssociationRecord>, HubSpotError> {
        let mut records = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let mut url = self.endpoint(&[
                "crm",
                "v4",
                "objects",
                "deals",
                deal_id,
                "associations",
                kind.object_type(),
            ])?;
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("limit", ASSOCIATION_PAGE_SIZE);
                if let Some(cursor) = &after {
                    query.append_pair("after", cursor);
                }
            }

            let page: AssociationsResponse = self.get_json(url, "association lookup").await?;
            records.extend(page.results);

            let next = page.paging.and_then(|p| p.next).and_then(|n| n.after);
            if next.is_none() || next == after {
                break;
            }
            after = next;
        }

        Ok(records)
    }

    /// Resolves the primary company or contact of a deal. `None` when the deal has none.
    #[instrument(skip(self))]
    pub async fn primary_association(
        &self,
        deal_id: &str,
        kind: AssociationKind,
    ) -> Result<Option<String>, HubSpotError> {
        let labels = self.association_labels(kind).await?;
        let records = self.deal_associations(deal_id, kind).await?;
        Ok(select_primary(&labels, &records))
    }

    #[instrument(skip(self))]
    pub async fn company(&self, company_id: &str) -> Result<Company, HubSpotError> {
        let mut url = self.endpoint(&["crm", "v3", "objects", "companies", company_id])?;
        url.query_pairs_mut().append_pair("properties", "name,domain");

        let company: ObjectResponse<CompanyProperties> =
            self.get_json(url, "company lookup").await?;
        let properties = company.properties;

        Ok(Company {
            id: company_id.to_owned(),
            name: properties
                .name
                .map(|n| n.trim().to_owned())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| FALLBACK_COMPANY_NAME.to_owned()),
            domain: properties.domain.unwrap_or_default(),
        })
    }

    #[instrument(skip(self))]
    pub async fn contact(&self, contact_id: &str) -> Result<Contact, HubSpotError> {
        let mut url = self.endpoint(&["crm", "v3", "objects", "contacts", contact_id])?;
        url.query_pairs_mut().append_pair("properties", "email");

        let contact: ObjectResponse<ContactProperties> =
            self.get_json(url, "contact lookup").await?;

        Ok(Contact {
            id: contact_id.to_owned(),
            email: contact
                .properties
                .email
                .map(|e| e.trim().to_owned())
                .filter(|e| !e.is_empty()),
        })
    }
}

async fn ensure_success(
    response: Response,
    operation: &'static str,
) -> Result<Response, HubSpotError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(HubSpotError::Api {
        operation,
        status,
        body,
    })
}
