use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Form, Json, Router,
};
use base64::Engine;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const DEMO_EMAIL: &str = "demo@petfriends.test";
pub const DEMO_PASSWORD: &str = "demo-password";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    pub age: String,
    pub pet_photo: String,
    pub user_id: String,
    pub created_at: String,
}

#[derive(Serialize, Deserialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

#[derive(Deserialize)]
pub struct NewPet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub animal_type: String,
    #[serde(default)]
    pub age: String,
}

#[derive(Deserialize)]
pub struct UpdatePet {
    pub name: Option<String>,
    pub animal_type: Option<String>,
    pub age: Option<String>,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub filter: String,
}

struct Account {
    email: String,
    password: String,
    key: String,
    user_id: String,
}

#[derive(Default)]
pub struct Store {
    accounts: Vec<Account>,
    /// Newest first.
    pets: Vec<Pet>,
}

impl Store {
    fn user_for_key(&self, headers: &HeaderMap) -> Option<String> {
        let key = header(headers, "auth_key")?;
        self.accounts
            .iter()
            .find(|account| account.key == key)
            .map(|account| account.user_id.clone())
    }

    fn owned_pet_mut(&mut self, id: &str, user_id: &str) -> Result<&mut Pet, Response> {
        let pet = self
            .pets
            .iter_mut()
            .find(|pet| pet.id == id)
            .ok_or_else(|| text(StatusCode::NOT_FOUND, "Pet not found"))?;
        if pet.user_id != user_id {
            return Err(forbidden());
        }
        Ok(pet)
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Router seeded with the demo account.
pub fn app() -> Router {
    app_with_accounts(&[(DEMO_EMAIL, DEMO_PASSWORD)])
}

pub fn app_with_accounts(accounts: &[(&str, &str)]) -> Router {
    let mut store = Store::default();
    for (email, password) in accounts {
        store.accounts.push(Account {
            email: email.to_string(),
            password: password.to_string(),
            key: format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple()),
            user_id: Uuid::new_v4().simple().to_string(),
        });
        tracing::info!(%email, "seeded account");
    }
    let db: Db = Arc::new(RwLock::new(store));

    Router::new()
        .route("/api/key", get(get_key))
        .route("/api/pets", get(list_pets).post(create_pet))
        .route("/api/pets/{id}", put(update_pet).delete(delete_pet))
        .route("/api/pets/set_photo/{id}", post(set_photo))
        .route("/api/create_pet_simple", post(create_pet_simple))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_key(State(db): State<Db>, headers: HeaderMap) -> Response {
    let store = db.read().await;
    let email = header(&headers, "email");
    let password = header(&headers, "password");
    let account = store.accounts.iter().find(|account| {
        Some(account.email.as_str()) == email && Some(account.password.as_str()) == password
    });
    match account {
        Some(account) => Json(serde_json::json!({ "key": account.key })).into_response(),
        None => forbidden(),
    }
}

async fn list_pets(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Response {
    let store = db.read().await;
    let Some(user_id) = store.user_for_key(&headers) else {
        return forbidden();
    };
    let pets = match params.filter.as_str() {
        "" => store.pets.clone(),
        "my_pets" => store
            .pets
            .iter()
            .filter(|pet| pet.user_id == user_id)
            .cloned()
            .collect(),
        _ => return text(StatusCode::BAD_REQUEST, "Filter value is incorrect"),
    };
    Json(PetList { pets }).into_response()
}

async fn create_pet(State(db): State<Db>, headers: HeaderMap, multipart: Multipart) -> Response {
    let Some(user_id) = db.read().await.user_for_key(&headers) else {
        return forbidden();
    };
    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };
    let Some(photo) = upload.photo else {
        return text(StatusCode::BAD_REQUEST, "pet_photo is required");
    };
    let field = |name: &str| upload.fields.get(name).cloned().unwrap_or_default();
    let pet = new_pet(
        &user_id,
        NewPet {
            name: field("name"),
            animal_type: field("animal_type"),
            age: field("age"),
        },
        photo,
    );
    db.write().await.pets.insert(0, pet.clone());
    tracing::info!(pet_id = %pet.id, "pet created with photo");
    Json(pet).into_response()
}

async fn create_pet_simple(
    State(db): State<Db>,
    headers: HeaderMap,
    Form(input): Form<NewPet>,
) -> Response {
    let mut store = db.write().await;
    let Some(user_id) = store.user_for_key(&headers) else {
        return forbidden();
    };
    let pet = new_pet(&user_id, input, String::new());
    store.pets.insert(0, pet.clone());
    tracing::info!(pet_id = %pet.id, "pet created");
    Json(pet).into_response()
}

async fn set_photo(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Response {
    let Some(user_id) = db.read().await.user_for_key(&headers) else {
        return forbidden();
    };
    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };
    let Some(photo) = upload.photo else {
        return text(StatusCode::BAD_REQUEST, "pet_photo is required");
    };
    let mut store = db.write().await;
    match store.owned_pet_mut(&id, &user_id) {
        Ok(pet) => {
            pet.pet_photo = photo;
            tracing::debug!(pet_id = %id, "photo set");
            Json(pet.clone()).into_response()
        }
        Err(response) => response,
    }
}

async fn update_pet(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(input): Form<UpdatePet>,
) -> Response {
    let mut store = db.write().await;
    let Some(user_id) = store.user_for_key(&headers) else {
        return forbidden();
    };
    match store.owned_pet_mut(&id, &user_id) {
        Ok(pet) => {
            if let Some(name) = input.name {
                pet.name = name;
            }
            if let Some(animal_type) = input.animal_type {
                pet.animal_type = animal_type;
            }
            if let Some(age) = input.age {
                pet.age = age;
            }
            tracing::debug!(pet_id = %id, "pet updated");
            Json(pet.clone()).into_response()
        }
        Err(response) => response,
    }
}

/// Answers 200 with an empty body, like the live service.
async fn delete_pet(State(db): State<Db>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    let mut store = db.write().await;
    let Some(user_id) = store.user_for_key(&headers) else {
        return forbidden();
    };
    if let Err(response) = store.owned_pet_mut(&id, &user_id) {
        return response;
    }
    store.pets.retain(|pet| pet.id != id);
    tracing::info!(pet_id = %id, "pet deleted");
    StatusCode::OK.into_response()
}

#[derive(Default)]
struct Upload {
    fields: HashMap<String, String>,
    photo: Option<String>,
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, Response> {
    let mut upload = Upload::default();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(text(StatusCode::BAD_REQUEST, &e.to_string())),
        };
        let name = field.name().unwrap_or_default().to_string();
        if name == "pet_photo" {
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| text(StatusCode::BAD_REQUEST, &e.to_string()))?;
            upload.photo = Some(data_url(&content_type, &data));
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| text(StatusCode::BAD_REQUEST, &e.to_string()))?;
            upload.fields.insert(name, value);
        }
    }
    Ok(upload)
}

fn new_pet(user_id: &str, input: NewPet, pet_photo: String) -> Pet {
    let created_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default();
    Pet {
        id: Uuid::new_v4().simple().to_string(),
        name: input.name,
        animal_type: input.animal_type,
        age: input.age,
        pet_photo,
        user_id: user_id.to_string(),
        created_at: format!("{created_at:.6}"),
    }
}

fn data_url(content_type: &str, data: &[u8]) -> String {
    format!(
        "data:{content_type};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(data)
    )
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn text(status: StatusCode, message: &str) -> Response {
    (status, message.to_string()).into_response()
}

fn forbidden() -> Response {
    text(
        StatusCode::FORBIDDEN,
        "Forbidden: please provide a valid auth_key or credentials",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_serializes_with_service_field_names() {
        let pet = new_pet(
            "u1",
            NewPet {
                name: "Corey".to_string(),
                animal_type: "dog".to_string(),
                age: "4".to_string(),
            },
            String::new(),
        );
        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["name"], "Corey");
        assert_eq!(json["animal_type"], "dog");
        assert_eq!(json["age"], "4");
        assert_eq!(json["pet_photo"], "");
        assert_eq!(json["user_id"], "u1");
        assert_eq!(json["id"].as_str().unwrap().len(), 32);
    }

    #[test]
    fn new_pet_fields_default_to_empty() {
        let input: NewPet = serde_json::from_str("{}").unwrap();
        assert!(input.name.is_empty());
        assert!(input.animal_type.is_empty());
        assert!(input.age.is_empty());
    }

    #[test]
    fn update_pet_all_fields_optional() {
        let input: UpdatePet = serde_json::from_str(r#"{"name":"Marta"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Marta"));
        assert!(input.animal_type.is_none());
        assert!(input.age.is_none());
    }

    #[test]
    fn data_url_encodes_base64() {
        assert_eq!(data_url("image/jpeg", b"hi"), "data:image/jpeg;base64,aGk=");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert("auth_key", "nope".parse().unwrap());
        let store = Store::default();
        assert!(store.user_for_key(&headers).is_none());
    }
}
