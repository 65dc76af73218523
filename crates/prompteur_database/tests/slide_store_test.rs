// Integration tests for the PostgreSQL slide store.
//
// These tests require a running PostgreSQL instance and DATABASE_URL;
// they are ignored by default.

use prompteur_database::{PostgresSlideStore, establish_connection, run_migrations};
use prompteur_interface::{NarrationSlot, NewDeck, NewSlide, SlideStore};
use uuid::Uuid;

fn test_deck(owner: &str, tag: &str) -> NewDeck {
    NewDeck {
        file_name: format!("{tag}.pdf"),
        owner_id: owner.to_string(),
        slides: vec![
            NewSlide {
                position: 1,
                extracted_text: Some(format!("{tag} intro")),
                image: None,
            },
            NewSlide {
                position: 2,
                extracted_text: Some(format!("{tag} results")),
                image: None,
            },
        ],
    }
}

#[tokio::test]
#[ignore] // Requires DATABASE_URL
async fn create_fetch_write_delete_roundtrip() {
    let mut conn = establish_connection().expect("DATABASE_URL must point at a test database");
    run_migrations(&mut conn).expect("migrations should apply");
    let store = PostgresSlideStore::new(conn);

    let owner = format!("user-{}", Uuid::new_v4());
    let tag = format!("deck-{}", Uuid::new_v4());

    let id = store.create_deck(&test_deck(&owner, &tag)).await.unwrap();

    // Identical content dedups to the same presentation.
    let again = store.create_deck(&test_deck(&owner, &tag)).await.unwrap();
    assert_eq!(id, again);

    let deck = store.fetch_deck(id).await.unwrap();
    assert_eq!(deck.slides.len(), 2);
    assert_eq!(deck.slides[0].position, 1);
    assert_eq!(deck.slides[1].position, 2);

    let first = deck.slides[0].id;
    store
        .write_script(first, NarrationSlot::Simple, "Welcome everyone.")
        .await
        .unwrap();

    let deck = store.fetch_deck(id).await.unwrap();
    assert_eq!(
        deck.slides[0].script(NarrationSlot::Simple),
        Some("Welcome everyone.")
    );
    assert_eq!(deck.slides[0].script(NarrationSlot::Medium), None);
    assert_eq!(deck.slides[0].script(NarrationSlot::Pro), None);

    store.delete_deck(id, &owner).await.unwrap();
    assert!(store.fetch_deck(id).await.is_err());
}

#[tokio::test]
#[ignore] // Requires DATABASE_URL
async fn delete_is_owner_scoped() {
    let mut conn = establish_connection().expect("DATABASE_URL must point at a test database");
    run_migrations(&mut conn).expect("migrations should apply");
    let store = PostgresSlideStore::new(conn);

    let owner = format!("user-{}", Uuid::new_v4());
    let tag = format!("deck-{}", Uuid::new_v4());
    let id = store.create_deck(&test_deck(&owner, &tag)).await.unwrap();

    // A different user cannot delete the deck.
    assert!(store.delete_deck(id, "someone-else").await.is_err());

    store.delete_deck(id, &owner).await.unwrap();
}
