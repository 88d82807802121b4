//! Verify request building and response normalization against JSON test
//! vectors stored in `test-vectors/`.
//!
//! Comparing parsed JSON (not raw strings) avoids false negatives from
//! field-ordering differences.

use petfriends_core::{
    normalize, AuthKey, Body, Credentials, HttpMethod, HttpRequest, HttpResponse, NewPet,
    PetFilter, PetFriendsClient,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

fn client() -> PetFriendsClient {
    PetFriendsClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn pairs(value: &Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (
                arr[0].as_str().unwrap().to_string(),
                arr[1].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

fn new_pet(input: &Value) -> NewPet {
    NewPet::new(
        input["name"].as_str().unwrap(),
        input["animal_type"].as_str().unwrap(),
        input["age"].as_str().unwrap(),
    )
}

fn build(c: &PetFriendsClient, key: &AuthKey, operation: &str, input: &Value) -> HttpRequest {
    match operation {
        "authenticate" => c.build_authenticate(&Credentials::new(
            input["email"].as_str().unwrap(),
            input["password"].as_str().unwrap(),
        )),
        "list_pets" => {
            let filter = match input["filter"].as_str().unwrap() {
                "" => PetFilter::All,
                "my_pets" => PetFilter::MyPets,
                other => panic!("unknown filter: {other}"),
            };
            c.build_list_pets(key, filter)
        }
        "create_pet_without_photo" => c.build_create_pet_without_photo(key, &new_pet(input)),
        "update_pet" => {
            c.build_update_pet(key, input["pet_id"].as_str().unwrap(), &new_pet(input))
        }
        "delete_pet" => c.build_delete_pet(key, input["pet_id"].as_str().unwrap()),
        other => panic!("unknown operation: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let key = AuthKey::new(vectors["key"].as_str().unwrap());

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected_request"];
        let req = build(&c, &key, case["operation"].as_str().unwrap(), &case["input"]);

        assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");
        assert_eq!(req.headers, pairs(&expected["headers"]), "{name}: headers");
        assert_eq!(req.query, pairs(&expected["query"]), "{name}: query");

        match &expected["form"] {
            Value::Null => assert!(req.body.is_empty(), "{name}: body should be empty"),
            form => {
                for (field, value) in pairs(form) {
                    assert_eq!(req.body.form_field(&field), Some(value.as_str()), "{name}: form {field}");
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };

        let envelope = normalize(response);
        let expected = &case["expected_envelope"];
        assert_eq!(u64::from(envelope.status), expected["status"].as_u64().unwrap(), "{name}: status");

        let expected_body = match (expected.get("json"), expected.get("text")) {
            (Some(json), None) => Body::Json(json.clone()),
            (None, Some(text)) => Body::Text(text.as_str().unwrap().to_string()),
            _ => panic!("{name}: vector must have exactly one of json/text"),
        };
        assert_eq!(envelope.body, expected_body, "{name}: body");
    }
}
