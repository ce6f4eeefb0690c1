//! Diesel table definitions. Keep in step with `backend/migrations`.

diesel::table! {
    /// Registered accounts.
    users (id) {
        id -> Uuid,
        username -> Text,
        name -> Text,
        surname -> Text,
        /// bcrypt digest; never the plaintext.
        password_hash -> Varchar,
        email -> Varchar,
        age -> Int4,
        is_admin -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    meetups (id) {
        id -> Uuid,
        name -> Text,
        details -> Text,
        start_date -> Timestamptz,
        end_date -> Timestamptz,
        address -> Text,
        quota -> Int4,
        registered_user_count -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Participation links; rows go away with either side.
    user_meetups (user_id, meetup_id) {
        user_id -> Uuid,
        meetup_id -> Uuid,
    }
}

diesel::joinable!(user_meetups -> users (user_id));
diesel::joinable!(user_meetups -> meetups (meetup_id));

diesel::allow_tables_to_appear_in_same_query!(meetups, user_meetups, users);
