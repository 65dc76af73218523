//! Diesel table definitions.

diesel::table! {
    presentations (id) {
        id -> Uuid,
        file_name -> Text,
        content_hash -> Text,
        owner_id -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    slides (id) {
        id -> Uuid,
        presentation_id -> Uuid,
        position -> Int4,
        extracted_text -> Nullable<Text>,
        image_mime -> Nullable<Text>,
        image_base64 -> Nullable<Text>,
        script_simple -> Nullable<Text>,
        script_medium -> Nullable<Text>,
        script_pro -> Nullable<Text>,
    }
}

diesel::joinable!(slides -> presentations (presentation_id));

diesel::allow_tables_to_appear_in_same_query!(presentations, slides);
