use catalog::{
    Course, EntityId, EntityType, Favorite, Lesson, LessonProgress, ProgressStatus, Reaction,
    ReactionKind, Remedy, Review, SubjectRef, UserId,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use projections::progress::{self, ProgressMap};
use projections::{Relations, ViewAssembler, Viewer, rating};

/// N published reviews with ratings cycling through 1..=5.
fn make_reviews(subject: SubjectRef, n: usize) -> Vec<Review> {
    (0..n)
        .map(|i| Review::new(UserId::new(), subject, (i % 5) as u8 + 1, "review"))
        .collect()
}

/// N lessons with the first half completed by `user`.
fn make_course(user: UserId, n: u32) -> (Course, Vec<Lesson>, Vec<LessonProgress>) {
    let course = Course::new("Course", "Bench course");
    let lessons: Vec<_> = (1..=n)
        .map(|i| Lesson::new(course.id, format!("Lesson {i}"), i))
        .collect();
    let progress = lessons
        .iter()
        .take(n as usize / 2)
        .map(|l| LessonProgress::new(user, course.id, l.id, ProgressStatus::Completed))
        .collect();
    (course, lessons, progress)
}

fn bench_aggregate_300_reviews(c: &mut Criterion) {
    let reviews = make_reviews(SubjectRef::remedy(EntityId::new()), 300);

    c.bench_function("projections/aggregate_300_reviews", |b| {
        b.iter(|| rating::aggregate(black_box(&reviews)));
    });
}

fn bench_project_progress_200_lessons(c: &mut Criterion) {
    let user = UserId::new();
    let (_, lessons, records) = make_course(user, 200);
    let map: ProgressMap = progress::progress_map(&records);

    c.bench_function("projections/progress_200_lessons", |b| {
        b.iter(|| progress::project(black_box(&lessons), Some(&map)));
    });
}

fn bench_assemble_remedy_with_reviews(c: &mut Criterion) {
    let user = UserId::new();
    let remedy = Remedy::new("Ginger tea", "For nausea");
    let reviews = make_reviews(SubjectRef::remedy(remedy.id), 100);
    let reactions: Vec<_> = reviews
        .iter()
        .map(|r| Reaction::new(r.id, UserId::new(), ReactionKind::Like))
        .collect();
    let favorites = vec![Favorite::new(user, EntityType::Remedy, remedy.id)];
    let assembler = ViewAssembler::new(Viewer::User(user), &favorites);

    c.bench_function("projections/assemble_remedy_100_reviews", |b| {
        b.iter(|| {
            assembler.remedy(
                &remedy,
                Relations::none()
                    .with_reviews(&reviews)
                    .with_reactions(&reactions),
            )
        });
    });
}

fn bench_assemble_course_detail(c: &mut Criterion) {
    let user = UserId::new();
    let (course, lessons, records) = make_course(user, 50);
    let favorites: Vec<Favorite> = Vec::new();
    let assembler = ViewAssembler::new(Viewer::User(user), &favorites);

    c.bench_function("projections/assemble_course_50_lessons", |b| {
        b.iter(|| {
            assembler.course(
                &course,
                Relations::none()
                    .with_lessons(&lessons)
                    .with_progress(&records),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_aggregate_300_reviews,
    bench_project_progress_200_lessons,
    bench_assemble_remedy_with_reviews,
    bench_assemble_course_detail,
);
criterion_main!(benches);
