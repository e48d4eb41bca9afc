//! Database-backed tests for the repositories and routes.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p fyyur-server -- --ignored

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use tower::ServiceExt;
use tracing_subscriber::EnvFilter;

use fyyur_server::db::{create_pool, migrations, ArtistRepo, ShowRepo, VenueRepo};
use fyyur_server::http::build_router;
use fyyur_server::models::{ArtistForm, FormFields, Genres, ShowForm, VenueForm};
use fyyur_server::AppState;

async fn pool() -> PgPool {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");
    migrations::run(&pool).await.expect("migrations failed");
    pool
}

fn unique(prefix: &str) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{} {}", prefix, nanos)
}

fn venue_form(name: &str, city: &str, state: &str) -> VenueForm {
    VenueForm {
        name: name.to_owned(),
        city: city.to_owned(),
        state: state.to_owned(),
        address: "1015 Folsom Street".to_owned(),
        phone: Some("123-123-1234".to_owned()),
        image_link: None,
        genres: Genres::from_values(["Jazz", "Reggae"]),
        facebook_link: None,
        website_link: Some("https://www.themusicalhop.com".to_owned()),
        seeking_talent: true,
        seeking_description: Some("Local artists wanted".to_owned()),
    }
}

fn artist_form(name: &str) -> ArtistForm {
    ArtistForm {
        name: name.to_owned(),
        city: "San Francisco".to_owned(),
        state: "CA".to_owned(),
        phone: None,
        image_link: None,
        genres: Genres::single("Rock n Roll"),
        facebook_link: None,
        website_link: None,
        seeking_venue: false,
        seeking_description: None,
    }
}

fn pairs(items: &[(&str, &str)]) -> FormFields {
    FormFields::new(
        items
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect(),
    )
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn show_count(pool: &PgPool, column: &str, id: i32) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM shows WHERE {} = $1", column);
    let (count,): (i64,) = sqlx::query_as(&sql).bind(id).fetch_one(pool).await.unwrap();
    count
}

#[tokio::test]
#[ignore = "requires database"]
async fn scalar_genre_is_stored_as_list() {
    let pool = pool().await;
    let name = unique("Park Square Live Music & Coffee");
    let fields = pairs(&[
        ("name", name.as_str()),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("address", "34 Whiskey Moore Ave"),
        ("genres", "Folk"),
    ]);

    let form = VenueForm::parse(&fields).unwrap();
    let venue = VenueRepo::new(&pool).create(&form).await.unwrap();
    assert_eq!(venue.genres, vec!["Folk".to_string()]);

    let artist_fields = pairs(&[
        ("name", name.as_str()),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("genres", "Jazz"),
    ]);
    let artist = ArtistRepo::new(&pool)
        .create(&ArtistForm::parse(&artist_fields).unwrap())
        .await
        .unwrap();
    let stored = ArtistRepo::new(&pool).get(artist.id).await.unwrap();
    assert_eq!(stored.genres, vec!["Jazz".to_string()]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn deleting_venue_removes_exactly_its_shows() {
    let pool = pool().await;
    let venues = VenueRepo::new(&pool);
    let shows = ShowRepo::new(&pool);

    let venue = venues
        .create(&venue_form(&unique("The Dueling Pianos Bar"), "New York", "NY"))
        .await
        .unwrap();
    let other = venues
        .create(&venue_form(&unique("Other Bar"), "New York", "NY"))
        .await
        .unwrap();
    let artist = ArtistRepo::new(&pool)
        .create(&artist_form(&unique("The Wild Sax Band")))
        .await
        .unwrap();

    for day in 1..=3 {
        shows
            .create(&ShowForm {
                artist_id: artist.id,
                venue_id: venue.id,
                start_time: Utc.with_ymd_and_hms(2035, 4, day, 20, 0, 0).unwrap(),
            })
            .await
            .unwrap();
    }
    shows
        .create(&ShowForm {
            artist_id: artist.id,
            venue_id: other.id,
            start_time: Utc.with_ymd_and_hms(2035, 4, 9, 20, 0, 0).unwrap(),
        })
        .await
        .unwrap();

    let deleted = venues.delete(venue.id).await.unwrap();
    assert_eq!(deleted.shows_removed, 3);
    assert_eq!(deleted.name, venue.name);
    assert_eq!(show_count(&pool, "venue_id", venue.id).await, 0);
    assert_eq!(show_count(&pool, "venue_id", other.id).await, 1);
    assert!(venues.get(venue.id).await.is_err());

    let deleted = ArtistRepo::new(&pool).delete(artist.id).await.unwrap();
    assert_eq!(deleted.shows_removed, 1);
    assert_eq!(show_count(&pool, "artist_id", artist.id).await, 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn failed_venue_delete_keeps_venue_and_shows() {
    let pool = pool().await;

    // Refuse to delete marked venues, after their shows are already gone
    sqlx::query(
        "CREATE OR REPLACE FUNCTION refuse_undeletable_venue() RETURNS trigger AS $$
         BEGIN
             IF OLD.name LIKE 'Undeletable %' THEN
                 RAISE EXCEPTION 'venue % cannot be deleted', OLD.id;
             END IF;
             RETURN OLD;
         END;
         $$ LANGUAGE plpgsql",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "DO $$
         BEGIN
             IF NOT EXISTS (
                 SELECT 1 FROM pg_trigger WHERE tgname = 'venues_refuse_undeletable'
             ) THEN
                 CREATE TRIGGER venues_refuse_undeletable
                     BEFORE DELETE ON venues
                     FOR EACH ROW EXECUTE FUNCTION refuse_undeletable_venue();
             END IF;
         END
         $$",
    )
    .execute(&pool)
    .await
    .unwrap();

    let venues = VenueRepo::new(&pool);
    let venue = venues
        .create(&venue_form(&unique("Undeletable Hall"), "New York", "NY"))
        .await
        .unwrap();
    let artist = ArtistRepo::new(&pool)
        .create(&artist_form(&unique("The Wild Sax Band")))
        .await
        .unwrap();
    for day in 1..=2 {
        ShowRepo::new(&pool)
            .create(&ShowForm {
                artist_id: artist.id,
                venue_id: venue.id,
                start_time: Utc.with_ymd_and_hms(2035, 6, day, 20, 0, 0).unwrap(),
            })
            .await
            .unwrap();
    }

    let err = venues.delete(venue.id).await.unwrap_err();
    assert!(matches!(err, fyyur_server::db::DbError::Sqlx(_)));

    assert_eq!(venues.get(venue.id).await.unwrap().name, venue.name);
    assert_eq!(show_count(&pool, "venue_id", venue.id).await, 2);
}

#[tokio::test]
#[ignore = "requires database"]
async fn deleting_missing_venue_is_not_found() {
    let pool = pool().await;
    let err = VenueRepo::new(&pool).delete(i32::MAX).await.unwrap_err();
    assert!(matches!(err, fyyur_server::db::DbError::NotFound { .. }));
}

#[tokio::test]
#[ignore = "requires database"]
async fn show_starting_now_is_upcoming() {
    let pool = pool().await;
    let venue = VenueRepo::new(&pool)
        .create(&venue_form(&unique("Boundary Hall"), "Austin", "TX"))
        .await
        .unwrap();
    let artist = ArtistRepo::new(&pool)
        .create(&artist_form(&unique("Boundary Band")))
        .await
        .unwrap();

    // Postgres keeps microseconds, so truncate before comparing
    let now = Utc.timestamp_opt(Utc::now().timestamp(), 0).unwrap();
    ShowRepo::new(&pool)
        .create(&ShowForm {
            artist_id: artist.id,
            venue_id: venue.id,
            start_time: now,
        })
        .await
        .unwrap();

    let detail = VenueRepo::new(&pool).detail(venue.id, now).await.unwrap();
    assert_eq!(detail.past_shows_count(), 0);
    assert_eq!(detail.upcoming_shows_count(), 1);

    let detail = ArtistRepo::new(&pool).detail(artist.id, now).await.unwrap();
    assert_eq!(detail.upcoming_shows_count(), 1);
    assert_eq!(detail.upcoming_shows[0].venue_id, venue.id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn every_venue_in_its_own_area() {
    let pool = pool().await;
    let repo = VenueRepo::new(&pool);
    let created = vec![
        repo.create(&venue_form(&unique("Hall"), "Springfield", "IL")).await.unwrap(),
        repo.create(&venue_form(&unique("Arena"), "Springfield", "MO")).await.unwrap(),
    ];

    let areas = repo.list_areas(Utc::now()).await.unwrap();
    for venue in &created {
        let matching: Vec<_> = areas
            .iter()
            .filter(|a| a.venues.iter().any(|v| v.id == venue.id))
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].city, venue.city);
        assert_eq!(matching[0].state, venue.state);
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn search_is_case_insensitive_substring() {
    let pool = pool().await;
    let name = unique("The Musical Hop");
    let venue = VenueRepo::new(&pool)
        .create(&venue_form(&name, "San Francisco", "CA"))
        .await
        .unwrap();

    let results = VenueRepo::new(&pool).search("hop", Utc::now()).await.unwrap();
    assert!(results.data.iter().any(|v| v.id == venue.id));
    assert_eq!(results.count, results.data.len());

    let results = VenueRepo::new(&pool).search("MUSICAL H", Utc::now()).await.unwrap();
    assert!(results.data.iter().any(|v| v.id == venue.id));

    let results = VenueRepo::new(&pool).search("hop%", Utc::now()).await.unwrap();
    assert!(!results.data.iter().any(|v| v.id == venue.id));
}

#[tokio::test]
#[ignore = "requires database"]
async fn edit_replaces_all_fields_and_keeps_date_listed() {
    let pool = pool().await;
    let repo = ArtistRepo::new(&pool);
    let mut form = artist_form(&unique("Guns N Petals"));
    form.phone = Some("326-123-5000".to_owned());
    form.seeking_venue = true;
    let artist = repo.create(&form).await.unwrap();

    let replacement = artist_form(&unique("Guns N Roses"));
    let updated = repo.update(artist.id, &replacement).await.unwrap();

    assert_eq!(updated.name, replacement.name);
    assert_eq!(updated.phone, None);
    assert!(!updated.seeking_venue);
    assert_eq!(updated.genres, vec!["Rock n Roll".to_string()]);
    assert_eq!(updated.date_listed, artist.date_listed);
}

#[tokio::test]
#[ignore = "requires database"]
async fn shows_are_listed_chronologically() {
    let pool = pool().await;
    let venue = VenueRepo::new(&pool)
        .create(&venue_form(&unique("Order Hall"), "Denver", "CO"))
        .await
        .unwrap();
    let artist = ArtistRepo::new(&pool)
        .create(&artist_form(&unique("Order Band")))
        .await
        .unwrap();

    for day in [15, 3, 9] {
        ShowRepo::new(&pool)
            .create(&ShowForm {
                artist_id: artist.id,
                venue_id: venue.id,
                start_time: Utc.with_ymd_and_hms(2036, 1, day, 20, 0, 0).unwrap(),
            })
            .await
            .unwrap();
    }

    let listed = ShowRepo::new(&pool).list().await.unwrap();
    let ours: Vec<_> = listed.iter().filter(|s| s.venue_id == venue.id).collect();
    assert_eq!(ours.len(), 3);
    assert!(ours.windows(2).all(|w| w[0].start_time <= w[1].start_time));
    assert!(listed.windows(2).all(|w| w[0].start_time <= w[1].start_time));
}

#[tokio::test]
#[ignore = "requires database"]
async fn posting_venue_lists_it_with_no_shows() {
    let pool = pool().await;
    let app = build_router(AppState::new(pool.clone()), Duration::from_secs(10));
    let name = unique("Fresh Venue");
    let body = format!(
        "name={}&city=Portland&state=OR&address=1+Main+St&genres=Jazz",
        name.replace(' ', "+")
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/venues/create")
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(&format!("Venue {} was successfully listed!", name)));

    let found = VenueRepo::new(&pool).search(&name, Utc::now()).await.unwrap();
    assert_eq!(found.count, 1);
    let id = found.data[0].id;

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/venues/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("0 Upcoming Shows"));
    assert!(html.contains("0 Past Shows"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn posting_show_with_unknown_artist_rolls_back() {
    let pool = pool().await;
    let venue = VenueRepo::new(&pool)
        .create(&venue_form(&unique("Lonely Venue"), "Reno", "NV"))
        .await
        .unwrap();
    let app = build_router(AppState::new(pool.clone()), Duration::from_secs(10));

    let body = format!(
        "artist_id={}&venue_id={}&start_time=2035-04-01+20%3A00%3A00",
        i32::MAX,
        venue.id
    );
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/shows/create")
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("An error occurred. Show could not be listed."));
    assert_eq!(show_count(&pool, "venue_id", venue.id).await, 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn deleting_via_route_redirects_home() {
    let pool = pool().await;
    let artist = ArtistRepo::new(&pool)
        .create(&artist_form(&unique("Short Lived")))
        .await
        .unwrap();
    let app = build_router(AppState::new(pool.clone()), Duration::from_secs(10));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/artists/{}", artist.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/");

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/artists/{}", artist.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
