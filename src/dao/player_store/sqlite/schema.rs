diesel::table! {
    players (id) {
        id -> Integer,
        name -> Text,
        #[sql_name = "keyWord"]
        key_word -> Text,
        teams -> Text,
        story -> Text,
        created_at -> Nullable<Text>,
    }
}
