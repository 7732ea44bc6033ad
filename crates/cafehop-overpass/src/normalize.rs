//! Normalization of raw Overpass elements into [`Place`] records.

use cafehop_core::Place;

use crate::types::RawElement;

/// Title used when the upstream record carries no `name` tag.
pub const UNNAMED_PLACE: &str = "Unnamed Place";
/// Description used when none of the summarized tags are present.
pub const DEFAULT_DESCRIPTION: &str = "Food & drink";
/// Source label attached to every normalized record.
pub const SOURCE_LABEL: &str = "openstreetmap";

const DESCRIPTION_SEPARATOR: &str = " · ";

/// Converts a raw element into a [`Place`]. Infallible: every missing field
/// has a defined fallback, and the title and description are never empty.
#[must_use]
pub fn normalize_element(element: &RawElement) -> Place {
    let tags = &element.tags;

    let title = tags
        .get("name")
        .filter(|name| !name.is_empty())
        .cloned()
        .unwrap_or_else(|| UNNAMED_PLACE.to_owned());

    Place {
        title,
        description: format_description(element),
        thumbnail_url: String::new(),
        external_id: element.id.to_string(),
        address: format_address(element),
        source: SOURCE_LABEL.to_owned(),
        location: element.coordinate(),
    }
}

/// Summarizes amenity tags into one line: Wi-Fi, takeaway, cuisine, opening
/// hours, in that order, joined with a separator.
fn format_description(element: &RawElement) -> String {
    let tags = &element.tags;
    let labelled = [
        ("Wi-Fi", tags.get("internet_access")),
        ("Takeaway", tags.get("takeaway")),
        ("Cuisine", tags.get("cuisine")),
        ("Hours", tags.get("opening_hours")),
    ];

    let parts: Vec<String> = labelled
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| format!("{label}: {v}")))
        .collect();

    if parts.is_empty() {
        DEFAULT_DESCRIPTION.to_owned()
    } else {
        parts.join(DESCRIPTION_SEPARATOR)
    }
}

/// Prefers a full-address tag; otherwise synthesizes one from the present
/// house-number/street/city parts. May be empty, never absent.
fn format_address(element: &RawElement) -> String {
    let tags = &element.tags;
    if let Some(full) = tags.get("addr:full") {
        return full.clone();
    }
    ["addr:housenumber", "addr:street", "addr:city"]
        .into_iter()
        .filter_map(|key| tags.get(key))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(json: serde_json::Value) -> RawElement {
        serde_json::from_value(json).expect("element should deserialize")
    }

    #[test]
    fn untagged_element_gets_placeholders() {
        let place = normalize_element(&element(serde_json::json!({ "id": 7 })));
        assert_eq!(place.title, UNNAMED_PLACE);
        assert_eq!(place.description, DEFAULT_DESCRIPTION);
        assert_eq!(place.address, "");
        assert_eq!(place.external_id, "7");
        assert_eq!(place.source, SOURCE_LABEL);
        assert!(place.thumbnail_url.is_empty());
        assert!(place.location.is_none());
    }

    #[test]
    fn description_concatenates_present_tags_in_order() {
        let place = normalize_element(&element(serde_json::json!({
            "id": 1,
            "tags": {
                "name": "Roma",
                "cuisine": "coffee_shop",
                "internet_access": "wlan",
                "opening_hours": "Mo-Su 07:00-19:00"
            }
        })));
        assert_eq!(
            place.description,
            "Wi-Fi: wlan · Cuisine: coffee_shop · Hours: Mo-Su 07:00-19:00"
        );
    }

    #[test]
    fn takeaway_only_still_yields_nonempty_description() {
        let place = normalize_element(&element(serde_json::json!({
            "id": 1,
            "tags": { "takeaway": "yes" }
        })));
        assert_eq!(place.description, "Takeaway: yes");
    }

    #[test]
    fn full_address_tag_wins_over_parts() {
        let place = normalize_element(&element(serde_json::json!({
            "id": 1,
            "tags": {
                "addr:full": "2118 University Ave, Berkeley",
                "addr:street": "Shattuck Ave"
            }
        })));
        assert_eq!(place.address, "2118 University Ave, Berkeley");
    }

    #[test]
    fn address_is_synthesized_from_present_parts() {
        let place = normalize_element(&element(serde_json::json!({
            "id": 1,
            "tags": {
                "addr:housenumber": "2118",
                "addr:street": "University Ave",
                "addr:city": "Berkeley"
            }
        })));
        assert_eq!(place.address, "2118 University Ave Berkeley");

        let partial = normalize_element(&element(serde_json::json!({
            "id": 2,
            "tags": { "addr:street": "University Ave" }
        })));
        assert_eq!(partial.address, "University Ave");
    }

    #[test]
    fn empty_name_tag_falls_back_to_placeholder() {
        let place = normalize_element(&element(serde_json::json!({
            "id": 1,
            "tags": { "name": "" }
        })));
        assert_eq!(place.title, UNNAMED_PLACE);
    }

    #[test]
    fn way_center_becomes_location() {
        let place = normalize_element(&element(serde_json::json!({
            "id": 9,
            "center": { "lat": 37.86, "lon": -122.26 },
            "tags": { "name": "Café Strada" }
        })));
        let location = place.location.expect("location resolved from center");
        assert!((location.lat - 37.86).abs() < f64::EPSILON);
    }
}
