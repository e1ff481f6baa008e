use serde::{Deserialize, Serialize};

/// Body of `POST /rest/players`.
///
/// Every field is optional on the wire; missing required fields are reported
/// by validation rather than by deserialization. Unknown fields such as `id`,
/// `level` or `untilNextLevel` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    /// Epoch milliseconds
    #[serde(default)]
    pub birthday: Option<i64>,
    #[serde(default)]
    pub banned: Option<bool>,
    #[serde(default)]
    pub experience: Option<i64>,
}

/// Body of `POST /rest/players/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    /// Epoch milliseconds
    #[serde(default)]
    pub birthday: Option<i64>,
    #[serde(default)]
    pub banned: Option<bool>,
    #[serde(default)]
    pub experience: Option<i64>,
}

/// Query string of `GET /rest/players` and `GET /rest/players/count`.
///
/// Every value is kept as raw text. An empty value such as `minLevel=` means
/// the parameter is absent, except for `name` and `title` where the empty
/// string is a substring that matches everything. The count endpoint ignores
/// `order`, `pageNumber` and `pageSize`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerQueryParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    /// Birthday lower bound, epoch milliseconds
    #[serde(default)]
    pub after: Option<String>,
    /// Birthday upper bound, epoch milliseconds
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub banned: Option<String>,
    #[serde(default)]
    pub min_experience: Option<String>,
    #[serde(default)]
    pub max_experience: Option<String>,
    #[serde(default)]
    pub min_level: Option<String>,
    #[serde(default)]
    pub max_level: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub page_number: Option<String>,
    #[serde(default)]
    pub page_size: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_reads_camel_case_and_ignores_derived_fields() {
        let json = r#"{
            "id": 99,
            "name": "Gimli",
            "title": "Lord of the Glittering Caves",
            "race": "DWARF",
            "profession": "WARRIOR",
            "birthday": 1286668800000,
            "experience": 1500,
            "level": 40,
            "untilNextLevel": 1
        }"#;
        let request: CreatePlayerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name.as_deref(), Some("Gimli"));
        assert_eq!(request.birthday, Some(1_286_668_800_000));
        assert_eq!(request.banned, None);
        assert_eq!(request.experience, Some(1500));
    }

    #[test]
    fn update_request_allows_empty_body() {
        let request: UpdatePlayerRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, UpdatePlayerRequest::default());
    }

    #[test]
    fn null_fields_are_absent() {
        let request: UpdatePlayerRequest =
            serde_json::from_str(r#"{"name": null, "experience": 10}"#).unwrap();
        assert_eq!(request.name, None);
        assert_eq!(request.experience, Some(10));
    }

    #[test]
    fn query_values_stay_raw_text() {
        let params: PlayerQueryParams =
            serde_json::from_str(r#"{"minLevel": "", "pageSize": "2", "name": ""}"#).unwrap();
        assert_eq!(params.min_level.as_deref(), Some(""));
        assert_eq!(params.page_size.as_deref(), Some("2"));
        assert_eq!(params.name.as_deref(), Some(""));
        assert_eq!(params.order, None);
    }
}
