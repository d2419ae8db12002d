//! Test utilities for the schema builder

mod builder_tests;
mod document_tests;

use crate::app::models::{
    BoundingBox, Contact, KeywordEntry, NormalizedRecord, OnlineResource, ReferenceSystem,
    RelatedIdentifier,
};
use chrono::NaiveDate;

pub fn at_midnight(year: i32, month: u32, day: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// A complete normalized record for assembly tests
pub fn sample_record() -> NormalizedRecord {
    NormalizedRecord {
        file_identifier: "41007".to_string(),
        title: "Agulhas Bank CTD stations".to_string(),
        publication_date: at_midnight(2019, 11, 2),
        responsible_parties: vec![
            Contact {
                individual_name: "Jane Mokoena".to_string(),
                organization_name: "SAEON".to_string(),
                position_name: "Data Manager".to_string(),
                contact_info: "Private Bag X2, Roggebaai".to_string(),
                role: "principalInvestigator".to_string(),
                email: "jane@saeon.ac.za".to_string(),
            },
            Contact {
                organization_name: "SAEON".to_string(),
                role: "publisher".to_string(),
                ..Contact::default()
            },
        ],
        keywords: vec!["ctd".to_string(), "temperature".to_string()],
        topic_categories: vec!["oceanography".to_string()],
        descriptive_keywords: vec![
            KeywordEntry::new("theme", "upwelling"),
            KeywordEntry::new("place", "Agulhas Bank"),
        ],
        geographic_identifier: "Agulhas Bank".to_string(),
        bounding_box: BoundingBox {
            north: -29.75,
            south: -35.5,
            east: 32.25,
            west: 16.5,
        },
        start_time: Some(at_midnight(2015, 3, 12)),
        end_time: Some(at_midnight(2016, 6, 30)),
        language: "English".to_string(),
        spatial_resolution: "1km".to_string(),
        abstract_text: "CTD profiles collected on the Agulhas Bank.".to_string(),
        format_name: "NetCDF".to_string(),
        spatial_representation_type: "textTable".to_string(),
        reference_system: Some(ReferenceSystem {
            code_space: "EPSG4326".to_string(),
            version: "8.6".to_string(),
        }),
        lineage_statement: "Collected and calibrated by SAEON.".to_string(),
        online_resource: Some(OnlineResource {
            name: "Data portal".to_string(),
            description: "download".to_string(),
            linkage: "https://example.org/data".to_string(),
        }),
        metadata_standard_name: "SANS 1878".to_string(),
        metadata_standard_version: "1".to_string(),
        metadata_timestamp: Some(at_midnight(2019, 12, 5)),
        scope: "dataset".to_string(),
        status: "completed".to_string(),
        rights: "Attribution 4.0".to_string(),
        rights_uri: "https://creativecommons.org/licenses/by/4.0/".to_string(),
        access_constraints: "open".to_string(),
        related_identifier: Some(RelatedIdentifier {
            related_identifier: "10.1234/abc".to_string(),
            related_identifier_type: "DOI".to_string(),
            relation_type: "IsPartOf".to_string(),
        }),
    }
}
