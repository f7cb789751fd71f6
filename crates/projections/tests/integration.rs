//! Integration tests: InMemoryContentStore → ViewAssembler → JSON payloads.

use catalog::{
    ContentStore, Course, EntityType, Favorite, InMemoryContentStore, Lesson, NewReview,
    ProgressStatus, ReactionKind, Remedy, Review, ReviewStatus, SubjectRef, UserId,
};
use projections::{Relations, ViewAssembler, Viewer, ViewerReaction};

/// A remedy with three published reviews (5, 4, 3) and one pending review.
async fn setup_remedy() -> (InMemoryContentStore, Remedy, UserId) {
    let store = InMemoryContentStore::new();
    let remedy = Remedy::new("Peppermint oil", "Tension headaches");
    store.insert_remedy(remedy.clone()).await;

    let author = UserId::new();
    for rating in [5, 4, 3] {
        store
            .add_review(
                author,
                NewReview {
                    subject: SubjectRef::remedy(remedy.id),
                    rating,
                    message: format!("{rating} stars"),
                },
            )
            .await
            .unwrap();
    }
    store
        .insert_review(
            Review::new(author, SubjectRef::remedy(remedy.id), 1, "awaiting moderation")
                .with_status(ReviewStatus::Pending),
        )
        .await;

    (store, remedy, author)
}

#[tokio::test]
async fn test_remedy_view_from_store() {
    let (store, remedy, _) = setup_remedy().await;
    let viewer = UserId::new();
    store
        .toggle_favorite(viewer, EntityType::Remedy, remedy.id)
        .await
        .unwrap();

    let reviews = store
        .reviews_for_subject(SubjectRef::remedy(remedy.id), true)
        .await
        .unwrap();
    let review_ids: Vec<_> = reviews.iter().map(|r| r.id).collect();
    store
        .set_reaction(review_ids[0], viewer, ReactionKind::Like)
        .await
        .unwrap();
    let reactions = store.reactions_for_reviews(&review_ids).await.unwrap();
    let favorites = store.favorites_for_user(viewer).await.unwrap();

    let assembler = ViewAssembler::new(Viewer::User(viewer), &favorites);
    let view = assembler.remedy(
        &remedy,
        Relations::none()
            .with_reviews(&reviews)
            .with_reactions(&reactions),
    );

    assert!(view.is_fav);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["average_rating"], 4.0);
    assert_eq!(json["review_count"], 3);
    assert_eq!(json["reviews"].as_array().unwrap().len(), 3);
    assert_eq!(json["reviews"][0]["user_reaction"], "like");
    assert_eq!(json["reviews"][0]["likes_count"], 1);
    assert!(json["reviews"][1]["user_reaction"].is_null());
}

#[tokio::test]
async fn test_guest_sees_same_ratings_without_personal_state() {
    let (store, remedy, author) = setup_remedy().await;
    store
        .toggle_favorite(author, EntityType::Remedy, remedy.id)
        .await
        .unwrap();

    let reviews = store
        .reviews_for_subject(SubjectRef::remedy(remedy.id), true)
        .await
        .unwrap();
    let review_ids: Vec<_> = reviews.iter().map(|r| r.id).collect();
    store
        .set_reaction(review_ids[0], author, ReactionKind::Dislike)
        .await
        .unwrap();
    let reactions = store.reactions_for_reviews(&review_ids).await.unwrap();

    let view = ViewAssembler::guest().remedy(
        &remedy,
        Relations::none()
            .with_reviews(&reviews)
            .with_reactions(&reactions),
    );

    assert!(!view.is_fav);
    let embedded = view.reviews.present().unwrap();
    assert_eq!(embedded[0].reactions.dislikes_count, 1);
    assert_eq!(embedded[0].user_reaction, ViewerReaction::None);
}

#[tokio::test]
async fn test_course_progress_follows_store_updates() {
    let store = InMemoryContentStore::new();
    let course = Course::new("Mindful mornings", "Five short lessons");
    store.insert_course(course.clone()).await;
    let lessons: Vec<_> = (1..=3)
        .map(|i| Lesson::new(course.id, format!("Day {i}"), i).with_duration(300))
        .collect();
    for lesson in &lessons {
        store.insert_lesson(lesson.clone()).await;
    }

    let user = UserId::new();
    let no_favorites: Vec<Favorite> = Vec::new();
    let assembler = ViewAssembler::new(Viewer::User(user), &no_favorites);

    let ordered = store.lessons_for_course(course.id).await.unwrap();

    // Nothing watched yet.
    let progress = store.progress_for_course(user, course.id).await.unwrap();
    let view = assembler.course(
        &course,
        Relations::none()
            .with_lessons(&ordered)
            .with_progress(&progress),
    );
    let projected = view.progress.present().unwrap();
    assert_eq!(projected.coming_lesson_id, Some(lessons[0].id));
    assert!(!projected.is_started);

    // Finish the first lesson, start the second.
    store
        .set_progress(user, lessons[0].id, ProgressStatus::Completed)
        .await
        .unwrap();
    store
        .set_progress(user, lessons[1].id, ProgressStatus::InProgress)
        .await
        .unwrap();
    let progress = store.progress_for_course(user, course.id).await.unwrap();
    let view = assembler.course(
        &course,
        Relations::none()
            .with_lessons(&ordered)
            .with_progress(&progress),
    );
    let projected = view.progress.present().unwrap();
    assert_eq!(projected.completed_lessons, 1);
    assert_eq!(projected.percentage, 33.3);
    assert_eq!(projected.coming_lesson_id, Some(lessons[1].id));
    assert!(projected.is_started);

    // Finish everything.
    for lesson in &lessons {
        store
            .set_progress(user, lesson.id, ProgressStatus::Completed)
            .await
            .unwrap();
    }
    let progress = store.progress_for_course(user, course.id).await.unwrap();
    let view = assembler.course(
        &course,
        Relations::none()
            .with_lessons(&ordered)
            .with_progress(&progress),
    );
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["percentage"], 100.0);
    assert!(json["coming_lesson_id"].is_null());
    assert_eq!(json["lessons"][2]["status"], "completed");
}

#[tokio::test]
async fn test_legacy_out_of_range_ratings_are_ignored() {
    let store = InMemoryContentStore::new();
    let remedy = Remedy::new("Honey", "Sore throat");
    store.insert_remedy(remedy.clone()).await;
    let subject = SubjectRef::remedy(remedy.id);
    store
        .insert_review(Review::new(UserId::new(), subject, 0, "legacy import"))
        .await;
    store
        .insert_review(Review::new(UserId::new(), subject, 4, "works"))
        .await;

    let reviews = store.reviews_for_subject(subject, true).await.unwrap();
    let view = ViewAssembler::guest().remedy(&remedy, Relations::none().with_reviews(&reviews));

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["average_rating"], 4.0);
    assert_eq!(json["review_count"], 1);
}
