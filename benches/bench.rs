// Criterion benchmarks for Mentor Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mentor_match::core::{skill_overlap, SkillMatcher};
use mentor_match::models::{MentorProfile, RankOptions};
use serde_json::json;

const SKILL_POOL: &[&str] = &[
    "Python", "JavaScript", "React.js", "Node.js", "Machine Learning", "Statistics", "Docker",
    "Kubernetes", "AWS", "SQL", "Figma", "Linux", "Java", "Neural Networks", "CI/CD", "Django",
];

fn create_mentor(id: usize) -> MentorProfile {
    let skills: Vec<&str> = (0..4).map(|k| SKILL_POOL[(id * 7 + k * 3) % SKILL_POOL.len()]).collect();
    serde_json::from_value(json!({
        "_id": id.to_string(),
        "fullName": format!("Mentor {}", id),
        "skills": skills,
        "isVerified": id % 3 == 0,
        "education": if id % 2 == 0 { json!([{"degree": "BSc"}]) } else { json!([]) },
        "availability": {"monday": [{"isAvailable": true}, {"isAvailable": id % 4 == 0}]}
    }))
    .unwrap()
}

fn learner_skills() -> Vec<String> {
    ["Python", "Machine Learning", "Docker", "SQL"].iter().map(|s| s.to_string()).collect()
}

fn bench_normalize(c: &mut Criterion) {
    let matcher = SkillMatcher::default();
    let skills: Vec<String> = SKILL_POOL.iter().map(|s| s.to_string()).collect();

    c.bench_function("normalize_skills", |b| {
        b.iter(|| matcher.normalize_skills(black_box(&skills)));
    });
}

fn bench_overlap(c: &mut Criterion) {
    let matcher = SkillMatcher::default();
    let learner = learner_skills();
    let mentor: Vec<String> = ["Linux", "Unix", "Statistics", "Python"].iter().map(|s| s.to_string()).collect();

    c.bench_function("skill_overlap", |b| {
        b.iter(|| {
            skill_overlap(
                matcher.normalizer(),
                matcher.expander(),
                black_box(&learner),
                black_box(&mentor),
            )
        });
    });
}

fn bench_matching_score(c: &mut Criterion) {
    let matcher = SkillMatcher::default();
    let learner = learner_skills();
    let mentor = create_mentor(0);

    c.bench_function("calculate_matching_score", |b| {
        b.iter(|| matcher.calculate_matching_score(black_box(&learner), black_box(&mentor)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = SkillMatcher::default();
    let learner = learner_skills();
    let options = RankOptions::default();

    let mut group = c.benchmark_group("ranking");

    for mentor_count in [10, 50, 100, 500].iter() {
        let mentors: Vec<MentorProfile> = (0..*mentor_count).map(create_mentor).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_mentors", mentor_count),
            mentor_count,
            |b, _| {
                b.iter(|| {
                    matcher.rank_mentors(
                        black_box(&learner),
                        black_box(mentors.clone()),
                        black_box(&options),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_overlap,
    bench_matching_score,
    bench_ranking
);

criterion_main!(benches);
