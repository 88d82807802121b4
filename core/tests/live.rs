//! Smoke test against the real PetFriends service.
//!
//! Ignored by default. Run with
//! `PETFRIENDS_EMAIL=.. PETFRIENDS_PASSWORD=.. cargo test -p petfriends-core --test live -- --ignored`.
//! `PETFRIENDS_BASE_URL` overrides the host.

use petfriends_core::{AuthKey, ClientConfig, Credentials, PetFilter, PetFriends, PetList};

#[test]
#[ignore = "talks to the live service; needs PETFRIENDS_EMAIL and PETFRIENDS_PASSWORD"]
fn live_key_and_listing() {
    let (Ok(email), Ok(password)) = (
        std::env::var("PETFRIENDS_EMAIL"),
        std::env::var("PETFRIENDS_PASSWORD"),
    ) else {
        eprintln!("PETFRIENDS_EMAIL / PETFRIENDS_PASSWORD not set, skipping");
        return;
    };

    let api = PetFriends::from_config(&ClientConfig::from_env().unwrap());
    let auth = api.authenticate(&Credentials::new(&email, &password)).unwrap();
    assert_eq!(auth.status, 200);
    let key = AuthKey::from_envelope(&auth).expect("key in body");

    let all = api.list_pets(&key, PetFilter::All).unwrap();
    assert_eq!(all.status, 200);
    let pets: PetList = all.decode().unwrap();
    assert!(!pets.pets.is_empty());

    let mine = api.list_pets(&key, PetFilter::MyPets).unwrap();
    assert_eq!(mine.status, 200);
}
