//! Test utilities for the record normalizer

mod normalizer_tests;

use crate::app::models::{CellValue, RawRow};
use std::collections::HashMap;

/// Build a raw row from column/text pairs
pub fn row_from_pairs(index: usize, pairs: &[(&str, &str)]) -> RawRow {
    let cells: HashMap<String, CellValue> = pairs
        .iter()
        .map(|(column, value)| (column.to_string(), CellValue::Text(value.to_string())))
        .collect();
    RawRow::new(index, cells)
}

/// A complete, well-formed master sheet row for tests to start from
pub fn valid_row(index: usize) -> RawRow {
    row_from_pairs(
        index,
        &[
            ("fileIdentifier", "41007"),
            ("title", "Agulhas Bank CTD stations"),
            ("date", "2019-11-02"),
            (
                "responsibleParties",
                "individualName:Jane Mokoena|organizationName:SAEON|role:principal investigator|email:jane@saeon.ac.za",
            ),
            (
                "responsibleParties.1",
                "individualName:P Ndlovu|role:originator",
            ),
            (
                "responsibleParties.Publisher",
                "organizationName:SAEON|role:publisher",
            ),
            ("keyword", "ctd,temperature,salinity"),
            ("topicCategories", "oceanography,climatologyMeteorologyAtmosphere"),
            (
                "relatedIdentifiers",
                "relatedIdentifier:10.1234/abc|relatedIdentifierType:DOI|relationType:IsPartOf",
            ),
            (
                "onlineResources",
                "name:Data portal|description:download|linkage:https://example.org/data",
            ),
            ("referenceSystemName", "codeSpace:EPSG 4326|version:8.6"),
            ("descriptiveKeywords", "keywordType:theme|keyword:upwelling"),
            ("placeKeywords (CV)", "Agulhas Bank, Benguela"),
            ("instrumentKeywords (CV)", "CTD"),
            (
                "boundingBox",
                "northBoundLatitude:-29.75|southBoundLatitude:-35.5|eastBoundLongitude:32.25|westBoundLongitude:16.5",
            ),
            ("startTime", "2015-03-12"),
            ("endTime", "2016/06/30 12:00"),
            ("metadataTimestamp", "2019-12-05"),
            ("spatialRepresentationType", "textTable"),
            ("geographicIdentifier", "Agulhas Bank"),
            ("languages", "English"),
            ("spatialResolution", "1km"),
            ("abstract", "CTD profiles collected on the Agulhas Bank."),
            ("formatName", "NetCDF"),
            ("lineageStatement", "Collected and calibrated by SAEON."),
            ("metadataStandardName", "SANS 1878"),
            ("metadataStandardVersion", "1"),
            ("scope", "dataset"),
            ("status", "completed"),
            ("rights", "Attribution 4.0"),
            ("rightsURI", "https://creativecommons.org/licenses/by/4.0/"),
            ("accessConstraints", "open"),
            ("DOI", "10.1234/abc"),
            ("verticalElement", ""),
        ],
    )
}
