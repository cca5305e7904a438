//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Owning user identifier.
        owner_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional description.
        description -> Nullable<Text>,
        /// Lifecycle status name.
        #[max_length = 20]
        status -> Varchar,
        /// Optional deadline date.
        deadline -> Nullable<Date>,
        /// Optional tag reference.
        tag_id -> Nullable<Uuid>,
        /// Optional event reference.
        event_id -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Checklist items owned by tasks.
    task_items (id) {
        /// Item identifier.
        id -> Uuid,
        /// Owning task identifier.
        task_id -> Uuid,
        /// Item title.
        #[max_length = 255]
        title -> Varchar,
        /// Completion flag.
        completed -> Bool,
        /// Zero-based display position within the task.
        position -> Int4,
    }
}

diesel::table! {
    /// Hashtags attached to tasks.
    task_hashtags (task_id, hashtag_id) {
        /// Task identifier.
        task_id -> Uuid,
        /// Hashtag identifier.
        hashtag_id -> Uuid,
        /// Zero-based attachment order.
        position -> Int4,
    }
}

diesel::table! {
    /// Tags tasks can be filed under.
    tags (id) {
        /// Tag identifier.
        id -> Uuid,
        /// Owning user identifier.
        owner_id -> Uuid,
        /// Tag title.
        #[max_length = 255]
        title -> Varchar,
    }
}

diesel::table! {
    /// Calendar events tasks can belong to.
    events (id) {
        /// Event identifier.
        id -> Uuid,
        /// Owning user identifier.
        owner_id -> Uuid,
        /// Event title.
        #[max_length = 255]
        title -> Varchar,
    }
}

diesel::table! {
    /// Hashtags available to a user.
    hashtags (id) {
        /// Hashtag identifier.
        id -> Uuid,
        /// Owning user identifier.
        owner_id -> Uuid,
        /// Hashtag name.
        #[max_length = 255]
        name -> Varchar,
    }
}

diesel::joinable!(task_items -> tasks (task_id));
diesel::joinable!(task_hashtags -> tasks (task_id));
diesel::joinable!(task_hashtags -> hashtags (hashtag_id));

diesel::allow_tables_to_appear_in_same_query!(tasks, task_items, task_hashtags, tags, events, hashtags);
