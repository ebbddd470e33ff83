//! The deal-won pipeline: authenticate, parse, resolve CRM entities, provision.

use crate::api::provisioning::error::ProvisioningError;
use crate::api::provisioning::interfaces::{ProvisionResponse, tenant_id_for_company};
use crate::frontegg_client::{FronteggClient, FronteggError, ProvisionOutcome};
use crate::hubspot_client::HubSpotClient;
use crate::hubspot_client::interfaces::AssociationKind;
use serde_json::Value;
use tracing::{info, instrument, warn};

const DEAL_ID_FIELDS: [&str; 2] = ["dealId", "objectId"];

/// Accepts only `Bearer <secret>`. An unset secret rejects everything.
pub fn authorize(
    authorization: Option<&str>,
    webhook_secret: Option<&str>,
) -> Result<(), ProvisioningError> {
    let Some(secret) = webhook_secret else {
        return Err(ProvisioningError::Unauthorized);
    };
    match authorization {
        Some(header) if header == format!("Bearer {secret}") => Ok(()),
        _ => Err(ProvisioningError::Unauthorized),
    }
}

/// Pulls the deal id out of the raw webhook body.
pub fn parse_deal_id(body: &[u8]) -> Result<String, ProvisioningError> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| ProvisioningError::BadRequest(format!("Invalid JSON body: {e}")))?;

    DEAL_ID_FIELDS
        .iter()
        .filter_map(|&field| payload.get(field).and_then(coerce_id))
        .next()
        .ok_or_else(|| ProvisioningError::BadRequest("Missing dealId or objectId".to_owned()))
}

fn coerce_id(value: &Value) -> Option<String> {
    let id = match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!id.is_empty()).then_some(id)
}

/// Resolves the deal's primary company and contact, then creates the tenant and invites
/// the contact as admin. Safe to re-run for the same deal.
#[instrument(skip(hubspot, frontegg))]
pub async fn provision_deal(
    hubspot: &HubSpotClient,
    frontegg: &FronteggClient,
    deal_id: &str,
) -> Result<ProvisionResponse, ProvisioningError> {
    let company_id = hubspot
        .primary_association(deal_id, AssociationKind::Company)
        .await?
        .ok_or_else(|| ProvisioningError::Unprocessable("No associated company".to_owned()))?;
    let company = hubspot.company(&company_id).await?;
    info!(%company_id, name = %company.name, "Resolved company");

    let contact_id = hubspot
        .primary_association(deal_id, AssociationKind::Contact)
        .await?
        .ok_or_else(|| ProvisioningError::Unprocessable("No associated contact".to_owned()))?;
    let email = hubspot
        .contact(&contact_id)
        .await?
        .email
        .ok_or_else(|| ProvisioningError::Unprocessable("Contact has no email".to_owned()))?;
    info!(%contact_id, "Resolved contact");

    let tenant_id = tenant_id_for_company(&company.id);
    let token = frontegg.management_token().await?;

    let tenant = frontegg
        .create_tenant(&token, &tenant_id, &company.name)
        .await?;
    accept_outcome(tenant, "tenant creation", &tenant_id)?;

    let invite = frontegg.invite_admin(&token, &tenant_id, &email).await?;
    accept_outcome(invite, "admin invite", &tenant_id)?;

    Ok(ProvisionResponse {
        ok: true,
        tenant_id,
        invited: email,
        company_name: company.name,
        company_domain: company.domain,
    })
}

fn accept_outcome(
    outcome: ProvisionOutcome,
    operation: &'static str,
    tenant_id: &str,
) -> Result<(), FronteggError> {
    match outcome {
        ProvisionOutcome::Created => {
            info!(tenant_id, "{operation} succeeded");
            Ok(())
        }
        ProvisionOutcome::AlreadyExists => {
            warn!(tenant_id, "{operation} hit a conflict, treating as already done");
            Ok(())
        }
        ProvisionOutcome::Failed { status, body } => Err(FronteggError::Api {
            operation,
            status,
            body,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_bearer_secret_is_accepted() {
        assert!(authorize(Some("Bearer s3cret"), Some("s3cret")).is_ok());
    }

    #[test]
    fn anything_else_is_unauthorized() {
        let cases = [
            (None, Some("s3cret")),
            (Some("Bearer wrong"), Some("s3cret")),
            (Some("s3cret"), Some("s3cret")),
            (Some("bearer s3cret"), Some("s3cret")),
            (Some("Bearer s3cret"), None),
        ];
        for (header, secret) in cases {
            assert!(
                matches!(authorize(header, secret), Err(ProvisioningError::Unauthorized)),
                "{header:?} / {secret:?} should be rejected"
            );
        }
    }

    #[test]
    fn deal_id_prefers_deal_id_field() {
        let id = parse_deal_id(br#"{"dealId":"555","objectId":"777"}"#).ok();
        assert_eq!(id.as_deref(), Some("555"));
    }

    #[test]
    fn empty_deal_id_falls_through_to_object_id() {
        let id = parse_deal_id(br#"{"dealId":"","objectId":777}"#).ok();
        assert_eq!(id.as_deref(), Some("777"));
    }

    #[test]
    fn numeric_deal_id_is_coerced() {
        let id = parse_deal_id(br#"{"dealId":555}"#).ok();
        assert_eq!(id.as_deref(), Some("555"));
    }

    #[test]
    fn invalid_json_is_bad_request() {
        assert!(matches!(
            parse_deal_id(b"not json"),
            Err(ProvisioningError::BadRequest(_))
        ));
    }

    #[test]
    fn missing_ids_are_bad_request() {
        let bodies: [&[u8]; 4] = [
            br#"{}"#,
            br#"{"dealId":"","objectId":""}"#,
            br#"{"dealId":null}"#,
            br#"[1,2]"#,
        ];
        for body in bodies {
            assert!(matches!(
                parse_deal_id(body),
                Err(ProvisioningError::BadRequest(_))
            ));
        }
    }

    #[test]
    fn conflicts_are_accepted_and_failures_are_not() {
        assert!(accept_outcome(ProvisionOutcome::AlreadyExists, "tenant creation", "hsco-1").is_ok());
        assert!(matches!(
            accept_outcome(
                ProvisionOutcome::Failed {
                    status: reqwest::StatusCode::BAD_GATEWAY,
                    body: "bad gateway".to_owned()
                },
                "admin invite",
                "hsco-1"
            ),
            Err(FronteggError::Api { operation: "admin invite", .. })
        ));
    }
}
