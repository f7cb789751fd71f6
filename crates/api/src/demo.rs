//! Demo catalog for local development.

use catalog::{
    Course, EntityType, Favorite, InMemoryContentStore, Lesson, LessonProgress, ProgressStatus,
    Remedy, Review, SubjectRef, UserId, Video,
};

/// Bearer token of the seeded demo user.
pub const DEMO_TOKEN: &str = "demo-token";

/// Fills the store with a small catalog and one user with some history.
///
/// Returns the demo user's id.
pub async fn seed_demo_data(store: &InMemoryContentStore) -> UserId {
    let user = UserId::new();
    let reviewer = UserId::new();
    store.issue_token(DEMO_TOKEN, user).await;

    let ginger = Remedy::new("Ginger tea", "Settles the stomach after meals");
    let lavender = Remedy::new("Lavender oil", "A few drops on the pillow before sleep");
    for (remedy, ratings) in [(&ginger, [5, 4]), (&lavender, [3, 4])] {
        store.insert_remedy(remedy.clone()).await;
        for rating in ratings {
            store
                .insert_review(Review::new(
                    reviewer,
                    SubjectRef::remedy(remedy.id),
                    rating,
                    "Helped me a lot",
                ))
                .await;
        }
    }

    let course = Course::new("Breathing basics", "Three short guided sessions");
    store.insert_course(course.clone()).await;
    let lessons = [
        ("Box breathing", 240),
        ("Alternate nostril", 300),
        ("4-7-8 breathing", 360),
    ];
    let mut first_lesson = None;
    for (order, (title, seconds)) in (1..).zip(lessons) {
        let lesson = Lesson::new(course.id, title, order).with_duration(seconds);
        first_lesson.get_or_insert(lesson.id);
        store.insert_lesson(lesson).await;
    }
    if let Some(lesson_id) = first_lesson {
        store
            .insert_progress(LessonProgress::new(
                user,
                course.id,
                lesson_id,
                ProgressStatus::Completed,
            ))
            .await;
    }

    let video = Video::new("Morning stretch", "https://videos.example.com/morning-stretch.mp4");
    store.insert_video(video.clone()).await;
    store
        .insert_review(Review::new(reviewer, SubjectRef::video(video.id), 5, "Great start"))
        .await;

    store
        .insert_favorite(Favorite::new(user, EntityType::Remedy, ginger.id))
        .await;

    tracing::info!(user_id = %user, "seeded demo catalog");
    user
}
