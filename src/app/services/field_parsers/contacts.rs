//! Contact block parsing
//!
//! A contact cell holds one contact per line; each line is a set of
//! pipe-separated `key:value` segments. Any malformed segment fails the
//! whole cell, which in turn skips the record being normalized.

use crate::app::models::{CellValue, Contact};
use crate::constants::{CONTACT_KEYS, ROLE_FIXES};
use crate::{Error, Result};

/// Parse a contact cell into an ordered list of contacts.
///
/// Blank lines are skipped. An empty cell yields an empty list so that a
/// sheet with an unused secondary contact column still normalizes.
pub fn parse_contact_list(raw: &CellValue, field: &str) -> Result<Vec<Contact>> {
    let text = match raw {
        CellValue::Empty => return Ok(Vec::new()),
        CellValue::Text(s) => s,
        other => {
            return Err(Error::field_parse(
                field,
                format!(
                    "expected encoded contact text, got non-text cell '{}'",
                    other.display_text()
                ),
            ));
        }
    };

    let mut contacts = Vec::new();
    for line in text.split('\n') {
        if line.replace(' ', "").is_empty() {
            continue;
        }
        contacts.push(parse_contact_line(line, field)?);
    }

    Ok(contacts)
}

/// Normalize a free-text role value to its canonical camel-case identifier
pub fn canonical_role(raw: &str, field: &str) -> Result<String> {
    let folded = raw.replace(' ', "").to_lowercase();
    ROLE_FIXES
        .iter()
        .find(|(from, _)| *from == folded)
        .map(|(_, to)| to.to_string())
        .ok_or_else(|| Error::field_parse(field, format!("unrecognized role '{}'", raw.trim())))
}

fn parse_contact_line(line: &str, field: &str) -> Result<Contact> {
    let mut contact = Contact::default();

    for segment in line.split('|') {
        // A segment naming both keys is a comma-joined compound: the contact
        // info value may itself contain commas, so only the final
        // comma-delimited piece is the email pair.
        if segment.contains("email") && segment.contains("contactInfo") {
            let (addr_part, email_part) = segment
                .rsplit_once(',')
                .ok_or_else(|| bad_segment(field, segment))?;

            let (email_key, email_value) = split_segment(email_part, field, segment)?;
            let (addr_key, addr_value) = split_segment(addr_part, field, segment)?;

            assign(&mut contact, &email_key, &email_value, field, segment)?;
            assign(&mut contact, &addr_key, &addr_value, field, segment)?;
        } else {
            let (key, value) = split_segment(segment, field, segment)?;
            assign(&mut contact, &key, &value, field, segment)?;
        }
    }

    Ok(contact)
}

/// Split one segment into exactly one `key:value` pair.
///
/// Contact segments must contain exactly one colon; anything else indicates a
/// mangled cell and fails the block.
fn split_segment(part: &str, field: &str, segment: &str) -> Result<(String, String)> {
    let pieces: Vec<&str> = part.split(':').collect();
    if pieces.len() != 2 {
        return Err(bad_segment(field, segment));
    }

    let key = pieces[0].replace(' ', "");
    let value = pieces[1].trim().to_string();
    Ok((key, value))
}

fn assign(
    contact: &mut Contact,
    key: &str,
    value: &str,
    field: &str,
    segment: &str,
) -> Result<()> {
    if !CONTACT_KEYS.contains(&key) {
        return Err(bad_segment(field, segment));
    }

    // Stray semicolons are sheet-editing residue
    let value = value.replace(';', "");

    match key {
        "individualName" => contact.individual_name = value,
        "organizationName" => contact.organization_name = value,
        "positionName" => contact.position_name = value,
        "contactInfo" => contact.contact_info = value,
        "email" => contact.email = value,
        "role" => contact.role = canonical_role(&value, field)?,
        _ => unreachable!("key membership checked above"),
    }

    Ok(())
}

fn bad_segment(field: &str, segment: &str) -> Error {
    Error::field_parse(field, format!("bad contact segment '{}'", segment))
}
