use guestbook_core::{entities::*, repositories::CommentRepo};

use diesel::RunQueryDsl as _;

use super::*;

fn setup() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

fn new_comment(section: &str, content: &str) -> NewComment {
    NewComment {
        section: SectionKey::from(&SectionName::new(section)),
        author: None,
        content: content.into(),
    }
}

#[test]
fn create_and_load_anonymous_comment() {
    let connections = setup();
    let stored = connections
        .exclusive()
        .unwrap()
        .create_comment(new_comment("Testing", "Hello"))
        .unwrap();
    assert!(stored.id.is_valid());
    let loaded = connections
        .shared()
        .unwrap()
        .recent_comments_of_section(&stored.section, 10)
        .unwrap();
    assert_eq!(vec![stored], loaded);
    assert!(loaded[0].author.is_none());
}

#[test]
fn create_and_load_comment_with_author() {
    let connections = setup();
    let mut comment = new_comment("Testing", "Hi");
    comment.author = Some(Author {
        identity: Some("abc".into()),
        name: None,
        email: Some(EmailAddress::new_unchecked("foo@example.com".into())),
    });
    let stored = connections
        .exclusive()
        .unwrap()
        .create_comment(comment)
        .unwrap();
    let loaded = connections
        .shared()
        .unwrap()
        .recent_comments_of_section(&stored.section, 10)
        .unwrap();
    let author = loaded[0].author.as_ref().unwrap();
    assert_eq!(author.identity.as_deref(), Some("abc"));
    assert!(author.name.is_none());
    assert_eq!(author.email.as_ref().unwrap().as_str(), "foo@example.com");
}

#[test]
fn load_newest_comments_of_a_section_only() {
    let connections = setup();
    {
        let db = connections.exclusive().unwrap();
        for i in 0..12 {
            db.create_comment(new_comment("A", &format!("a{i}"))).unwrap();
        }
        db.create_comment(new_comment("B", "b")).unwrap();
        db.create_comment(new_comment("a", "lower")).unwrap();
    }
    let db = connections.shared().unwrap();
    let key = SectionKey::from(&SectionName::new("A"));
    let comments = db.recent_comments_of_section(&key, 10).unwrap();
    assert_eq!(comments.len(), 10);
    assert!(comments.iter().all(|c| c.section == key));
    assert!(comments.windows(2).all(|pair| pair[0].date >= pair[1].date));
    assert_eq!(comments[0].content, "a11");
    assert_eq!(comments[9].content, "a2");

    let key = SectionKey::from(&SectionName::new("B"));
    let comments = db.recent_comments_of_section(&key, 10).unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "b");
}

#[test]
fn dates_never_decrease_within_a_section() {
    let connections = setup();
    let future = Timestamp::from_millis(Timestamp::now().as_millis() + 3_600_000);
    {
        let db = connections.exclusive().unwrap();
        let mut conn = db.sqlite_conn();
        diesel::insert_into(schema::comment::table)
            .values(&models::NewComment {
                id: "future",
                section: "A",
                created_at: future.as_millis(),
                author_identity: None,
                author_name: None,
                author_email: None,
                content: "from the future",
            })
            .execute(&mut *conn)
            .unwrap();
    }
    let stored = connections
        .exclusive()
        .unwrap()
        .create_comment(new_comment("A", "now"))
        .unwrap();
    assert_eq!(stored.date, future);
    let comments = connections
        .shared()
        .unwrap()
        .recent_comments_of_section(&stored.section, 10)
        .unwrap();
    assert_eq!(comments[0].content, "now");
    assert_eq!(comments[1].content, "from the future");
}

#[test]
fn read_only_access_cannot_create_comments() {
    let connections = setup();
    let db = connections.shared().unwrap();
    assert!(db.create_comment(new_comment("A", "x")).is_err());
}

#[test]
fn in_memory_database_is_shared_by_all_pooled_connections() {
    let connections = Connections::init(":memory:", 4).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    let section = SectionKey::from(&SectionName::new("Testing"));
    for _ in 0..16 {
        assert!(connections
            .shared()
            .unwrap()
            .recent_comments_of_section(&section, 10)
            .is_ok());
    }
}

#[test]
fn all_pragmas_are_applied() {
    #[derive(diesel::QueryableByName)]
    struct Synchronous {
        #[diesel(sql_type = diesel::sql_types::Integer)]
        synchronous: i32,
    }
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let mut conn = db.sqlite_conn();
    let pragma = diesel::sql_query("PRAGMA synchronous")
        .get_result::<Synchronous>(&mut *conn)
        .unwrap();
    // NORMAL
    assert_eq!(pragma.synchronous, 1);
}
