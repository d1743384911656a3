table! {
    comment (rowid) {
        rowid -> BigInt,
        id -> Text,
        section -> Text,
        created_at -> BigInt,
        author_identity -> Nullable<Text>,
        author_name -> Nullable<Text>,
        author_email -> Nullable<Text>,
        content -> Text,
    }
}
