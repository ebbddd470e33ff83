//! Picks the one related object a deal treats as "primary".

use crate::hubspot_client::interfaces::{AssociationLabel, AssociationRecord, HUBSPOT_DEFINED};
use regex::Regex;
use std::sync::LazyLock;

static PRIMARY_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)primary").expect("primary label pattern is valid"));

/// Type id of the HubSpot-defined association labelled "Primary", if the catalog has one.
#[must_use]
pub fn primary_type_id(labels: &[AssociationLabel]) -> Option<i64> {
    labels
        .iter()
        .find(|l| {
            l.category == HUBSPOT_DEFINED
                && l.label.as_deref().is_some_and(|label| PRIMARY_LABEL.is_match(label))
        })
        .map(|l| l.type_id)
}

/// Returns the id of the primary associated object.
///
/// A record carrying the primary type id always wins. Without one, the first record in
/// the order HubSpot returned them is used. `None` only when there are no records.
#[must_use]
pub fn select_primary(
    labels: &[AssociationLabel],
    records: &[AssociationRecord],
) -> Option<String> {
    let primary = primary_type_id(labels)
        .and_then(|type_id| records.iter().find(|r| r.has_type(type_id)));

    primary
        .or_else(|| records.first())
        .map(|r| r.to_object_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hubspot_client::interfaces::AssociationType;

    fn label(category: &str, type_id: i64, label: Option<&str>) -> AssociationLabel {
        AssociationLabel {
            category: category.to_owned(),
            type_id,
            label: label.map(ToOwned::to_owned),
        }
    }

    fn record(id: &str, type_ids: &[i64]) -> AssociationRecord {
        AssociationRecord {
            to_object_id: id.to_owned(),
            association_types: type_ids
                .iter()
                .map(|&type_id| AssociationType {
                    category: Some(HUBSPOT_DEFINED.to_owned()),
                    type_id,
                    label: None,
                })
                .collect(),
        }
    }

    fn company_labels() -> Vec<AssociationLabel> {
        vec![
            label(HUBSPOT_DEFINED, 341, None),
            label("USER_DEFINED", 12, Some("Primary partner")),
            label(HUBSPOT_DEFINED, 5, Some("Primary")),
        ]
    }

    #[test]
    fn finds_hubspot_defined_primary_label() {
        assert_eq!(primary_type_id(&company_labels()), Some(5));
    }

    #[test]
    fn label_match_ignores_case() {
        let labels = vec![label(HUBSPOT_DEFINED, 1, Some("PRIMARY contact"))];
        assert_eq!(primary_type_id(&labels), Some(1));
    }

    #[test]
    fn user_defined_labels_are_not_primary() {
        let labels = vec![label("USER_DEFINED", 12, Some("Primary"))];
        assert_eq!(primary_type_id(&labels), None);
    }

    #[test]
    fn primary_record_wins_over_list_order() {
        let records = vec![record("100", &[341]), record("9001", &[341, 5])];
        assert_eq!(
            select_primary(&company_labels(), &records),
            Some("9001".to_owned())
        );
    }

    #[test]
    fn falls_back_to_first_record_without_primary_match() {
        let records = vec![record("300", &[341]), record("200", &[341])];
        assert_eq!(
            select_primary(&company_labels(), &records),
            Some("300".to_owned())
        );
    }

    #[test]
    fn falls_back_to_first_record_without_primary_label() {
        let labels = vec![label(HUBSPOT_DEFINED, 341, None)];
        let records = vec![record("300", &[5]), record("200", &[341])];
        assert_eq!(select_primary(&labels, &records), Some("300".to_owned()));
    }

    #[test]
    fn no_records_means_no_primary() {
        assert_eq!(select_primary(&company_labels(), &[]), None);
    }
}
