// Mirrors migrations/; the compatibility stub tables are not mapped.

diesel::table! {
    chats (id) {
        id -> Text,
        user_id -> Text,
        title -> Text,
        visibility -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    messages (id) {
        id -> Text,
        chat_id -> Text,
        role -> Varchar,
        content -> Text,
        parts -> Jsonb,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    chat_pdfs (chat_id, pdf_id) {
        chat_id -> Text,
        pdf_id -> Text,
        added_at -> Timestamptz,
    }
}

diesel::joinable!(chat_pdfs -> chats (chat_id));
diesel::joinable!(messages -> chats (chat_id));

diesel::allow_tables_to_appear_in_same_query!(chat_pdfs, chats, messages,);
