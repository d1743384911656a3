use crate::schema::*;

#[derive(Insertable)]
#[diesel(table_name = comment)]
pub struct NewComment<'a> {
    pub id: &'a str,
    pub section: &'a str,
    pub created_at: i64,
    pub author_identity: Option<&'a str>,
    pub author_name: Option<&'a str>,
    pub author_email: Option<&'a str>,
    pub content: &'a str,
}

#[derive(Queryable)]
pub struct Comment {
    pub rowid: i64,
    pub id: String,
    pub section: String,
    pub created_at: i64,
    pub author_identity: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub content: String,
}
