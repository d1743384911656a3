use anyhow::anyhow;

use super::*;

impl<'a> CommentRepo for DbReadWrite<'a> {
    fn create_comment(&self, comment: NewComment) -> Result<Comment> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn recent_comments_of_section(
        &self,
        section: &SectionKey,
        limit: usize,
    ) -> Result<Vec<Comment>> {
        recent_comments_of_section(&mut self.conn.borrow_mut(), section, limit)
    }
}

impl<'a> CommentRepo for DbReadOnly<'a> {
    fn create_comment(&self, _comment: NewComment) -> Result<Comment> {
        Err(anyhow!("Comments cannot be stored with read-only access").into())
    }
    fn recent_comments_of_section(
        &self,
        section: &SectionKey,
        limit: usize,
    ) -> Result<Vec<Comment>> {
        recent_comments_of_section(&mut self.conn.borrow_mut(), section, limit)
    }
}

impl From<models::Comment> for Comment {
    fn from(from: models::Comment) -> Self {
        let models::Comment {
            rowid: _,
            id,
            section,
            created_at,
            author_identity,
            author_name,
            author_email,
            content,
        } = from;
        let author = if author_identity.is_some() || author_name.is_some() || author_email.is_some()
        {
            Some(Author {
                identity: author_identity,
                name: author_name,
                email: author_email.map(EmailAddress::new_unchecked),
            })
        } else {
            None
        };
        Self {
            id: id.into(),
            section: section.into(),
            author,
            content,
            date: Timestamp::from_millis(created_at),
        }
    }
}

fn latest_date_of_section(
    conn: &mut SqliteConnection,
    section: &SectionKey,
) -> QueryResult<Option<Timestamp>> {
    use schema::comment::dsl;
    let latest = schema::comment::table
        .filter(dsl::section.eq(section.as_str()))
        .select(diesel::dsl::max(dsl::created_at))
        .first::<Option<i64>>(conn)?;
    Ok(latest.map(Timestamp::from_millis))
}

fn create_comment(conn: &mut SqliteConnection, new_comment: NewComment) -> Result<Comment> {
    conn.transaction::<_, DieselError, _>(|conn| {
        // The date of a new comment must never precede the
        // newest comment of the same section, even if the
        // system clock has been set back in the meantime.
        let now = Timestamp::now();
        let date = latest_date_of_section(conn, &new_comment.section)?
            .map_or(now, |latest| latest.max(now));
        let comment = new_comment.into_comment(Id::new(), date);
        let author = comment.author.as_ref();
        let model = models::NewComment {
            id: comment.id.as_str(),
            section: comment.section.as_str(),
            created_at: comment.date.as_millis(),
            author_identity: author.and_then(|a| a.identity.as_deref()),
            author_name: author.and_then(|a| a.name.as_deref()),
            author_email: author.and_then(|a| a.email.as_ref()).map(EmailAddress::as_str),
            content: &comment.content,
        };
        let _count = diesel::insert_into(schema::comment::table)
            .values(&model)
            .execute(conn)?;
        debug_assert_eq!(1, _count);
        Ok(comment)
    })
    .map_err(from_diesel_err)
}

fn recent_comments_of_section(
    conn: &mut SqliteConnection,
    section: &SectionKey,
    limit: usize,
) -> Result<Vec<Comment>> {
    use schema::comment::dsl;
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    Ok(schema::comment::table
        .filter(dsl::section.eq(section.as_str()))
        // Comments with the same date are ordered by insertion
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .limit(limit)
        .load::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
