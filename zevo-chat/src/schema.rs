diesel::table! {
    arena_chat_rooms (id) {
        id -> Uuid,
        #[max_length = 50]
        arena_id -> Varchar,
        #[max_length = 120]
        arena_name -> Varchar,
        #[max_length = 30]
        sport -> Varchar,
        topic -> Text,
        #[max_length = 100]
        created_by -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    messages (id) {
        id -> Uuid,
        room_id -> Uuid,
        #[max_length = 100]
        sender_name -> Varchar,
        text -> Text,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(messages -> arena_chat_rooms (room_id));

diesel::allow_tables_to_appear_in_same_query!(
    arena_chat_rooms,
    messages,
);
